//! Error types used throughout the export client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for AppMetrica export operations
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum AppmetricaError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Export not ready after {attempts} attempts")]
    Timeout { attempts: usize },

    #[error("Export cancelled")]
    Cancelled,
}

/// Broad classification of export errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Local input, transport, parse, or configuration problems
    Client,
    /// The remote API returned a definitive non-success status
    Api,
    /// The poll loop exhausted its attempt budget
    Timeout,
    /// The caller's cancellation signal fired
    Cancelled,
}

impl AppmetricaError {
    /// Get the error category for this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput(_) | Self::Network(_) | Self::Parse(_) | Self::Config(_) => {
                ErrorCategory::Client
            }
            Self::Api { .. } => ErrorCategory::Api,
            Self::Timeout { .. } => ErrorCategory::Timeout,
            Self::Cancelled => ErrorCategory::Cancelled,
        }
    }
}

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, AppmetricaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            AppmetricaError::InvalidInput("test".to_string()).category(),
            ErrorCategory::Client
        );
        assert_eq!(AppmetricaError::Network("test".to_string()).category(), ErrorCategory::Client);
        assert_eq!(AppmetricaError::Parse("test".to_string()).category(), ErrorCategory::Client);
        assert_eq!(
            AppmetricaError::Api { status: 403, body: "forbidden".to_string() }.category(),
            ErrorCategory::Api
        );
        assert_eq!(AppmetricaError::Timeout { attempts: 10 }.category(), ErrorCategory::Timeout);
        assert_eq!(AppmetricaError::Cancelled.category(), ErrorCategory::Cancelled);
    }

    #[test]
    fn test_api_error_carries_body() {
        let err = AppmetricaError::Api { status: 403, body: "forbidden".to_string() };
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains("forbidden"));
    }

    #[test]
    fn test_errors_serialize_with_type_tag() {
        let err = AppmetricaError::Timeout { attempts: 3 };
        let json = serde_json::to_value(&err).expect("error should serialize");
        assert_eq!(json["type"], "Timeout");
        assert_eq!(json["detail"]["attempts"], 3);
    }
}
