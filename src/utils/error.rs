use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid input value {value:?}: {reason}")]
    InvalidInput { value: String, reason: String },

    #[error("Modern numeral lookup failed: {message}")]
    ResolutionFailure { message: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Resolution,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn invalid_input(value: impl ToString, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn resolution(message: impl Into<String>) -> Self {
        CalcError::ResolutionFailure {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidInput { .. } => ErrorCategory::Input,
            CalcError::ResolutionFailure { .. } | CalcError::HttpError(_) => {
                ErrorCategory::Resolution
            }
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Resolution => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Whether this failure is the caller's input rather than the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. })
    }

    pub fn is_resolution_failure(&self) -> bool {
        self.category() == ErrorCategory::Resolution
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidInput { value, .. } => {
                format!("'{}' cannot be converted: expected a whole number from 1 to 3999", value)
            }
            CalcError::ResolutionFailure { message } => message.clone(),
            CalcError::HttpError(e) => format!("Could not reach the numeral service: {}", e),
            CalcError::ConfigError { message } => message.clone(),
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            CalcError::IoError(e) => format!("File access failed: {}", e),
            CalcError::SerializationError(e) => format!("Stored data is malformed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Enter an integer between 1 and 3999",
            ErrorCategory::Resolution => {
                "Check the resolver endpoint and network connection, then try again"
            }
            ErrorCategory::Configuration => "Review the configuration file and CLI flags",
            ErrorCategory::System => "Check file permissions or remove the corrupted store file",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
