use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolboxError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid identifier '{value}': {reason}")]
    InvalidIdentifier { value: String, reason: String },

    #[error("Invalid instant '{value}': {reason}")]
    InvalidInstant { value: String, reason: String },

    #[error("Logger initialization failed: {message}")]
    LoggerError { message: String },
}

pub type Result<T> = std::result::Result<T, ToolboxError>;
