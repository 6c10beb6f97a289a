use thiserror::Error;

/// Errors raised by the options model, the rule codec and configuration.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The rule text is not well-formed RECUR syntax.
    #[error("Malformed rule: {0}")]
    ParseError(String),

    /// The rule is well-formed but its parts contradict each other or are out
    /// of range.
    #[error("Inconsistent rule: {0}")]
    ValidationError(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
