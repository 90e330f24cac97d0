//! Template loading, lookup, and rendering error types.

/// Reasons a template document is rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TemplateValidationErrorKind {
    /// Failed to read the template file
    #[display("Failed to read template file: {}", _0)]
    FileRead(String),
    /// The document could not be parsed into a node tree
    #[display("Failed to parse template document: {}", _0)]
    Document(String),
    /// A prompt definition has no `type` attribute
    #[display("Found prompt #{} with missing `type` attribute", _0)]
    MissingTemplateKey(usize),
    /// A step definition has no `name` attribute
    #[display(
        "Found step #{} with missing `name` attribute in prompt '{}'",
        position,
        template
    )]
    MissingStepName {
        /// Key of the prompt containing the step
        template: String,
        /// 1-based position of the step within the prompt
        position: usize,
    },
    /// Two steps of one prompt share a name
    #[display(
        "All prompt steps must have unique names: '{}' appears more than once in prompt '{}'",
        step,
        template
    )]
    DuplicateStepName {
        /// Key of the prompt containing the steps
        template: String,
        /// The repeated step name
        step: String,
    },
}

/// A template document failed validation.
///
/// # Examples
///
/// ```
/// use libretto_error::{TemplateValidationError, TemplateValidationErrorKind};
///
/// let err = TemplateValidationError::new(TemplateValidationErrorKind::MissingTemplateKey(1));
/// assert!(format!("{}", err).contains("`type`"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Template Validation Error: {} at line {} in {}", kind, line, file)]
pub struct TemplateValidationError {
    /// The specific validation failure
    pub kind: TemplateValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TemplateValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TemplateValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// A run asked for a pipeline key the store does not know.
///
/// # Examples
///
/// ```
/// use libretto_error::TemplateNotFoundError;
///
/// let err = TemplateNotFoundError::new("tagline");
/// assert_eq!(err.key, "tagline");
/// assert!(format!("{}", err).contains("'tagline'"));
/// ```
#[derive(Debug, Clone)]
pub struct TemplateNotFoundError {
    /// The pipeline key that was requested
    pub key: String,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TemplateNotFoundError {
    /// Create a new not-found error for `key` at the current location.
    #[track_caller]
    pub fn new(key: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            key: key.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for TemplateNotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Template Not Found: unable to find prompt template for '{}' at line {} in {}",
            self.key, self.line, self.file
        )
    }
}

impl std::error::Error for TemplateNotFoundError {}

/// Rendering failures raised by a strict template engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RenderErrorKind {
    /// A `${name}` placeholder had no value in the run variables
    #[display("Unresolved template variable '{}'", _0)]
    UnresolvedVariable(String),
}

/// Template rendering error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Render Error: {} at line {} in {}", kind, line, file)]
pub struct RenderError {
    /// The specific rendering failure
    pub kind: RenderErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl RenderError {
    /// Create a new render error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RenderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
