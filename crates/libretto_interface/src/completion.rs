//! The boundary to a text-completion backend.

use async_trait::async_trait;
use libretto_core::Params;
use libretto_error::CompletionError;
use std::sync::Arc;
use std::time::Duration;

/// Delay between retries of a transiently failed completion call.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Abstract completion capability consumed by the step-chain executor.
///
/// Implementations own the transport: HTTP client, authentication, request
/// shape, and parsing of the provider's reply. The prompt text they receive
/// is the whole accumulated transcript, with boundary markers that
/// chat-style adapters can split on via
/// [`Transcript::turns`](libretto_core::Transcript::turns).
///
/// Ports must classify failures: return
/// [`CompletionError::transient`] for anything worth retrying and
/// [`CompletionError::fatal`] otherwise.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use libretto_core::Params;
/// use libretto_error::CompletionError;
/// use libretto_interface::CompletionPort;
///
/// struct Echo;
///
/// #[async_trait]
/// impl CompletionPort for Echo {
///     async fn complete(&self, prompt: &str, _params: &Params) -> Result<String, CompletionError> {
///         Ok(prompt.to_uppercase())
///     }
/// }
/// ```
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Request a completion for `prompt` with the resolved request `params`.
    async fn complete(&self, prompt: &str, params: &Params) -> Result<String, CompletionError>;

    /// Default request parameters, overridden per step.
    fn default_params(&self) -> Params {
        Params::new()
    }

    /// Total attempts allowed per completion call. One means no retry.
    fn max_attempts(&self) -> usize {
        1
    }

    /// Fixed wait between attempts after a transient failure.
    fn retry_delay(&self) -> Duration {
        DEFAULT_RETRY_DELAY
    }

    /// Name used in logs.
    fn port_name(&self) -> &str {
        "completion"
    }
}

#[async_trait]
impl<T: CompletionPort + ?Sized> CompletionPort for Arc<T> {
    async fn complete(&self, prompt: &str, params: &Params) -> Result<String, CompletionError> {
        (**self).complete(prompt, params).await
    }

    fn default_params(&self) -> Params {
        (**self).default_params()
    }

    fn max_attempts(&self) -> usize {
        (**self).max_attempts()
    }

    fn retry_delay(&self) -> Duration {
        (**self).retry_delay()
    }

    fn port_name(&self) -> &str {
        (**self).port_name()
    }
}

#[async_trait]
impl<T: CompletionPort + ?Sized> CompletionPort for Box<T> {
    async fn complete(&self, prompt: &str, params: &Params) -> Result<String, CompletionError> {
        (**self).complete(prompt, params).await
    }

    fn default_params(&self) -> Params {
        (**self).default_params()
    }

    fn max_attempts(&self) -> usize {
        (**self).max_attempts()
    }

    fn retry_delay(&self) -> Duration {
        (**self).retry_delay()
    }

    fn port_name(&self) -> &str {
        (**self).port_name()
    }
}
