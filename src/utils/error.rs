use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Validation error on {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Service error (HTTP {status}): {message}")]
    ServiceError { status: u16, message: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid state: {message}")]
    InvalidState { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Service,
    Network,
    Configuration,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PlannerError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::ServiceError { .. } => ErrorCategory::Service,
            Self::NetworkError(_) => ErrorCategory::Network,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) | Self::InvalidState { .. } => {
                ErrorCategory::Internal
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Service | ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ValidationError { field, .. } => {
                format!("Fill in a valid value for '{}' and submit again", field)
            }
            Self::ServiceError { status, .. } if *status >= 500 => {
                "The itinerary service is having trouble; try again later".to_string()
            }
            Self::ServiceError { .. } => {
                "Review the request against the service message and resubmit".to_string()
            }
            Self::NetworkError(_) => {
                "Check that the service URL is reachable and resubmit".to_string()
            }
            Self::IoError(_) => "Check the file path and permissions".to_string(),
            Self::SerializationError(_) => {
                "Check that the file or response is valid JSON".to_string()
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => {
                "Fix the configuration file or command-line flags".to_string()
            }
            Self::InvalidState { .. } => {
                "Wait for the pending submission to finish".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError { message, .. } => message.clone(),
            Self::ServiceError { message, .. } => message.clone(),
            Self::NetworkError(_) => "Could not reach the service".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err = PlannerError::validation("name", "Itinerary name is required");
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.user_friendly_message(), "Itinerary name is required");
    }

    #[test]
    fn test_service_error_keeps_message() {
        let err = PlannerError::ServiceError {
            status: 400,
            message: "Accommodation 99 not found".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.user_friendly_message(), "Accommodation 99 not found");
        assert!(err.to_string().contains("HTTP 400"));
    }

    #[test]
    fn test_missing_config_is_critical() {
        let err = PlannerError::MissingConfigError {
            field: "itinerary_service.base_url".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.to_string().contains("itinerary_service.base_url"));
    }
}
