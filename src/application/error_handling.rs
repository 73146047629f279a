// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps AppError → client-facing responses
// - Validation and not-found messages are passed through verbatim
// - Unexpected failures are logged and never expose internals

use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};

/// Standard error body returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input or broken business rule (400)
    Validation,

    /// Anything else (500)
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error.kind() {
            ErrorKind::Validation => {
                warn!("Validation error: {}", error);
                Self::validation(error.to_string())
            }

            ErrorKind::NotFound => {
                warn!("Not found: {}", error);
                Self {
                    success: false,
                    error_type: ErrorType::NotFound,
                    message: error.to_string(),
                    details: None,
                }
            }

            ErrorKind::Unexpected => {
                error!("Unexpected error: {:?}", error);
                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Unexpected error".to_string(),
                    details: Some("Check logs for details".to_string()),
                }
            }
        }
    }

    /// Create validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message: message.into(),
            details: None,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self.error_type {
            ErrorType::Validation => 400,
            ErrorType::NotFound => 404,
            ErrorType::Internal => 500,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}

/// Helper trait to convert service Results for the command layer
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, ErrorResponse>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, ErrorResponse> {
        self.map_err(ErrorResponse::from_app_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::not_found("film", 9));
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "film with id 9 not found");
        assert_eq!(error.status_code(), 404);
    }

    #[test]
    fn test_validation_error() {
        let error = ErrorResponse::validation("Invalid input");
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, "Invalid input");
        assert_eq!(error.status_code(), 400);
    }

    #[test]
    fn test_state_transition_is_validation() {
        let error = ErrorResponse::from_app_error(AppError::Domain(
            DomainError::InvalidStateTransition("request already processed".to_string()),
        ));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, "request already processed");
    }

    #[test]
    fn test_unexpected_hides_internals() {
        let error = ErrorResponse::from_app_error(AppError::Storage("lock poisoned".to_string()));
        assert_eq!(error.error_type, ErrorType::Internal);
        assert_eq!(error.status_code(), 500);
        assert!(!error.message.contains("poisoned"));
    }

    #[test]
    fn test_serialization() {
        let error = ErrorResponse::from_app_error(AppError::not_found("film", 1));
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"errorType\":\"not_found\""));
        assert!(json.contains("film with id 1 not found"));
    }

    #[test]
    fn test_to_error_response() {
        let result: Result<(), AppError> = Err(AppError::validation("email already used"));
        let error = result.to_error_response().unwrap_err();
        assert_eq!(error.message, "email already used");
    }
}
