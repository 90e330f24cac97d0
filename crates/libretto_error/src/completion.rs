//! Completion port error types and retry classification.

/// Failure classes reported by a completion port.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CompletionErrorKind {
    /// Retryable provider failure (rate limit, timeout, 5xx, dropped connection)
    #[display("Transient completion failure: {}", _0)]
    Transient(String),
    /// Permanent failure (bad request, authentication, malformed parameters)
    #[display("Completion failed: {}", _0)]
    Fatal(String),
}

impl CompletionErrorKind {
    /// Check if this failure should be retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, CompletionErrorKind::Transient(_))
    }
}

/// Error returned by a completion port for a single attempt.
///
/// # Examples
///
/// ```
/// use libretto_error::{CompletionError, RetryableError};
///
/// let err = CompletionError::transient("HTTP 503: service unavailable");
/// assert!(err.is_retryable());
///
/// let err = CompletionError::fatal("HTTP 401: unauthorized");
/// assert!(!err.is_retryable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Completion Error: {} at line {} in {}", kind, line, file)]
pub struct CompletionError {
    /// The kind of failure
    pub kind: CompletionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new CompletionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a retryable failure.
    #[track_caller]
    pub fn transient(message: impl Into<String>) -> Self {
        Self::new(CompletionErrorKind::Transient(message.into()))
    }

    /// Shorthand for a permanent failure.
    #[track_caller]
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(CompletionErrorKind::Fatal(message.into()))
    }
}

/// Trait for errors that support retry logic.
///
/// Transient errors like 503 (service unavailable), 429 (rate limit),
/// or network timeouts should return true. Permanent errors like 401
/// (unauthorized) or 400 (bad request) should return false.
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for CompletionError {
    fn is_retryable(&self) -> bool {
        self.kind.is_transient()
    }
}

/// Every allowed attempt of a completion call failed transiently.
///
/// # Examples
///
/// ```
/// use libretto_error::{CompletionError, CompletionExhaustedError};
///
/// let err = CompletionExhaustedError::new(2, CompletionError::transient("timeout"));
/// assert_eq!(err.attempts, 2);
/// assert!(format!("{}", err).contains("2 attempts"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Completion Exhausted: request failed after {} attempts ({}) at line {} in {}",
    attempts,
    last,
    line,
    file
)]
pub struct CompletionExhaustedError {
    /// Number of attempts made before giving up
    pub attempts: usize,
    /// The failure returned by the final attempt
    #[error(source)]
    pub last: CompletionError,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CompletionExhaustedError {
    /// Create a new exhaustion error with automatic location tracking.
    #[track_caller]
    pub fn new(attempts: usize, last: CompletionError) -> Self {
        let location = std::panic::Location::caller();
        Self {
            attempts,
            last,
            line: location.line(),
            file: location.file(),
        }
    }
}
