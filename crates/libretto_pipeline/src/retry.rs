//! Fixed-delay retry for completion calls.

use libretto_error::{CompletionError, CompletionExhaustedError, LibrettoResult, RetryableError};
use libretto_interface::CompletionPort;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

/// How many times a completion call may be attempted, and how long to wait
/// between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_getters::Getters)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Always at least one.
    max_attempts: usize,
    /// Wait after each transient failure.
    delay: Duration,
}

impl RetryPolicy {
    /// Create a policy. `max_attempts` below one is raised to one.
    pub fn new(max_attempts: usize, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Policy configured on a completion port.
    pub fn from_port<P: CompletionPort + ?Sized>(port: &P) -> Self {
        Self::new(port.max_attempts(), port.retry_delay())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(1, libretto_interface::DEFAULT_RETRY_DELAY)
    }
}

/// Run `operation` until it succeeds, fails fatally, or the policy runs out.
///
/// Fatal failures are returned as they are. When every allowed attempt
/// fails transiently, a [`CompletionExhaustedError`] carrying the attempt
/// count and the last failure is returned instead.
#[instrument(skip(operation))]
pub async fn retry_completion<F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> LibrettoResult<String>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<String, CompletionError>>,
{
    let mut attempt = 0;

    loop {
        attempt += 1;
        debug!(attempt, "Requesting completion");

        match operation().await {
            Ok(response) => {
                if attempt > 1 {
                    debug!(attempt, "Completion succeeded after retry");
                }
                return Ok(response);
            }
            Err(err) if !err.is_retryable() => {
                warn!(attempt, error = %err, "Completion failed, not retryable");
                return Err(err.into());
            }
            Err(err) if attempt >= policy.max_attempts => {
                warn!(attempt, error = %err, "All completion attempts exhausted");
                return Err(CompletionExhaustedError::new(attempt, err).into());
            }
            Err(err) => {
                warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    delay_ms = policy.delay.as_millis() as u64,
                    error = %err,
                    "Transient completion failure, retrying"
                );
                sleep(policy.delay).await;
            }
        }
    }
}
