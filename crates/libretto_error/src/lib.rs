//! Error types for the Libretto library.
//!
//! Every error carries the source location where it was raised. The
//! individual error structs are gathered into [`LibrettoErrorKind`] so that
//! callers can tell a template problem from a completion failure from an
//! output that didn't match the expected shape.

mod completion;
mod config;
mod projection;
mod template;

pub use completion::{
    CompletionError, CompletionErrorKind, CompletionExhaustedError, RetryableError,
};
pub use config::{ConfigError, ConfigErrorKind};
pub use projection::{OutputProjectionError, OutputProjectionErrorKind};
pub use template::{
    RenderError, RenderErrorKind, TemplateNotFoundError, TemplateValidationError,
    TemplateValidationErrorKind,
};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum LibrettoErrorKind {
    /// Malformed or ambiguous template document
    TemplateValidation(TemplateValidationError),
    /// Unknown pipeline key
    TemplateNotFound(TemplateNotFoundError),
    /// Strict rendering hit an unresolved placeholder
    Render(RenderError),
    /// Non-retryable completion failure
    Completion(CompletionError),
    /// Retry budget spent on transient failures
    CompletionExhausted(CompletionExhaustedError),
    /// Projector could not build the requested output
    OutputProjection(OutputProjectionError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for LibrettoErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LibrettoErrorKind::TemplateValidation(e) => write!(f, "{}", e),
            LibrettoErrorKind::TemplateNotFound(e) => write!(f, "{}", e),
            LibrettoErrorKind::Render(e) => write!(f, "{}", e),
            LibrettoErrorKind::Completion(e) => write!(f, "{}", e),
            LibrettoErrorKind::CompletionExhausted(e) => write!(f, "{}", e),
            LibrettoErrorKind::OutputProjection(e) => write!(f, "{}", e),
            LibrettoErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Libretto error with kind discrimination.
///
/// # Examples
///
/// ```
/// use libretto_error::{LibrettoError, LibrettoErrorKind, TemplateNotFoundError};
///
/// let err: LibrettoError = TemplateNotFoundError::new("missing").into();
/// assert!(err.is_template_not_found());
/// assert!(matches!(err.kind(), LibrettoErrorKind::TemplateNotFound(_)));
/// ```
#[derive(Debug)]
pub struct LibrettoError(Box<LibrettoErrorKind>);

impl LibrettoError {
    /// Create a new error from a kind.
    pub fn new(kind: LibrettoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LibrettoErrorKind {
        &self.0
    }

    /// Consume the error, returning its kind.
    pub fn into_kind(self) -> LibrettoErrorKind {
        *self.0
    }

    /// True for load-time template document failures.
    pub fn is_template_validation(&self) -> bool {
        matches!(*self.0, LibrettoErrorKind::TemplateValidation(_))
    }

    /// True when a run named an unknown pipeline.
    pub fn is_template_not_found(&self) -> bool {
        matches!(*self.0, LibrettoErrorKind::TemplateNotFound(_))
    }

    /// True when the completion call itself failed, fatally or after retries.
    pub fn is_completion_failure(&self) -> bool {
        matches!(
            *self.0,
            LibrettoErrorKind::Completion(_) | LibrettoErrorKind::CompletionExhausted(_)
        )
    }

    /// True when the output did not match the shape the projector expected.
    pub fn is_output_projection(&self) -> bool {
        matches!(*self.0, LibrettoErrorKind::OutputProjection(_))
    }
}

impl std::fmt::Display for LibrettoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Libretto Error: {}", self.0)
    }
}

impl std::error::Error for LibrettoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &*self.0 {
            LibrettoErrorKind::TemplateValidation(e) => Some(e),
            LibrettoErrorKind::TemplateNotFound(e) => Some(e),
            LibrettoErrorKind::Render(e) => Some(e),
            LibrettoErrorKind::Completion(e) => Some(e),
            LibrettoErrorKind::CompletionExhausted(e) => Some(e),
            LibrettoErrorKind::OutputProjection(e) => Some(e),
            LibrettoErrorKind::Config(e) => Some(e),
        }
    }
}

// Generic From implementation for any type that converts to LibrettoErrorKind
impl<T> From<T> for LibrettoError
where
    T: Into<LibrettoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Libretto operations.
pub type LibrettoResult<T> = std::result::Result<T, LibrettoError>;
