use thiserror::Error;

/// Failures of the data-access step behind the interactor.
///
/// These never escape as `Err` from the VIPER chain: the interactor hands them
/// to its output so the presenter can show them on the view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Greeting data unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Greeting data malformed: {reason}")]
    Malformed { reason: String },
}

impl DataError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum GreetingError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("Component not wired: {role}")]
    Unwired { role: &'static str },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Wiring,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

/// Exit code for input the process rejects before running (bad flags, bad config).
pub const EXIT_INVALID_INPUT: i32 = 1;

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => EXIT_INVALID_INPUT,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl GreetingError {
    pub fn exit_code(&self) -> i32 {
        self.severity().exit_code()
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GreetingError::Data(_) => ErrorCategory::Data,
            GreetingError::Unwired { .. } => ErrorCategory::Wiring,
            GreetingError::IoError(_) => ErrorCategory::Io,
            GreetingError::ConfigError { .. }
            | GreetingError::ConfigValidationError { .. }
            | GreetingError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Io | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Wiring => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GreetingError::Data(e) => e.to_string(),
            GreetingError::Unwired { role } => {
                format!("The greeting module was not assembled correctly ({} missing)", role)
            }
            GreetingError::IoError(e) => format!("Could not read a file: {}", e),
            GreetingError::ConfigError { message } => message.clone(),
            GreetingError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            GreetingError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GreetingError::Data(DataError::Unavailable { .. }) => {
                "Check that the person file exists and is readable"
            }
            GreetingError::Data(DataError::Malformed { .. }) => {
                "Make sure the person file is JSON with first_name and last_name"
            }
            GreetingError::Unwired { .. } => {
                "Assemble the module through its composition root before delivering events"
            }
            GreetingError::IoError(_) => "Check the path and file permissions",
            GreetingError::ConfigError { .. }
            | GreetingError::ConfigValidationError { .. }
            | GreetingError::InvalidConfigValueError { .. } => {
                "Review the TOML configuration and command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GreetingError>;
