//! Output projection error types.

/// Ways a projector can fail to build its output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OutputProjectionErrorKind {
    /// The run produced no steps to project from
    #[display("Run produced no steps")]
    NoSteps,
    /// No executed step carries the requested name
    #[display("No executed step named '{}'", _0)]
    MissingStep(String),
    /// The requested step index is past the end of the run
    #[display("Step index {} out of range for run with {} steps", index, len)]
    StepOutOfRange {
        /// Requested index
        index: usize,
        /// Number of executed steps
        len: usize,
    },
    /// A step response did not deserialize into the requested type
    #[display(
        "Error parsing output of step '{}': {} (received: {})",
        step,
        message,
        response
    )]
    Deserialize {
        /// Name of the step whose response was parsed
        step: String,
        /// Deserializer message
        message: String,
        /// The raw response text
        response: String,
    },
    /// No projector is registered for the pipeline key
    #[display("No output projector registered for pipeline '{}'", _0)]
    NoProjector(String),
    /// Caller-defined projection failure
    #[display("{}", _0)]
    Custom(String),
}

/// The completion succeeded but its output did not match the expected shape.
///
/// # Examples
///
/// ```
/// use libretto_error::{OutputProjectionError, OutputProjectionErrorKind};
///
/// let err = OutputProjectionError::new(OutputProjectionErrorKind::NoSteps);
/// assert!(format!("{}", err).contains("no steps"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Output Projection Error: {} at line {} in {}", kind, line, file)]
pub struct OutputProjectionError {
    /// The kind of failure
    pub kind: OutputProjectionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl OutputProjectionError {
    /// Create a new projection error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OutputProjectionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a caller-defined failure message.
    #[track_caller]
    pub fn custom(message: impl Into<String>) -> Self {
        Self::new(OutputProjectionErrorKind::Custom(message.into()))
    }
}
