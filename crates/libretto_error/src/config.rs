//! Configuration error types.

/// Configuration failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Failed to read the configuration file
    #[display("Failed to read config file: {}", _0)]
    FileRead(String),
    /// Failed to parse configuration content
    #[display("Failed to parse config: {}", _0)]
    Parse(String),
    /// A configuration value is present but unusable
    #[display("Invalid config value: {}", _0)]
    InvalidValue(String),
    /// The tracing subscriber could not be installed
    #[display("Failed to install tracing subscriber: {}", _0)]
    Subscriber(String),
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use libretto_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::InvalidValue(
///     "token_estimate_divisor must be positive".to_string(),
/// ));
/// assert!(format!("{}", err).contains("must be positive"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific configuration failure
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
