// src/application/error_handling.rs
//
// Enhanced Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors -> user-facing responses
// - Provides consistent error format for UI modals
// - Never exposes internal implementation details
// - Logs errors for debugging

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input/validation error (400)
    Validation,

    /// Domain invariant violation (422)
    DomainError,

    /// Database/persistence error (500)
    Database,

    /// Remote catalog unreachable or misbehaving (502)
    ExternalService,

    /// File system error (500)
    FileSystem,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self {
                success: false,
                error_type: ErrorType::NotFound,
                message: "Resource not found".to_string(),
                details: None,
            },

            AppError::Validation(message) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message,
                details: None,
            },

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: "Domain validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::Transport(message) => {
                log::error!("transport error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::ExternalService,
                    message: "The remote catalog could not be reached".to_string(),
                    details: Some(message),
                }
            }

            AppError::Database(db_error) => {
                log::error!("database error: {:?}", db_error);

                Self {
                    success: false,
                    error_type: ErrorType::Database,
                    message: "Database operation failed".to_string(),
                    details: Some("Check logs for details".to_string()),
                }
            }

            AppError::Serialization(serde_error) => {
                log::error!("serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                    details: None,
                }
            }

            AppError::Io(io_error) => {
                log::error!("io error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Pool(pool_error) => {
                log::error!("connection pool error: {}", pool_error);

                Self {
                    success: false,
                    error_type: ErrorType::Database,
                    message: "Database connection failed".to_string(),
                    details: None,
                }
            }

            AppError::Other(message) => {
                log::error!("unclassified error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                    details: None,
                }
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response).unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Resource not found");
    }

    #[test]
    fn test_validation_error_keeps_message() {
        let error =
            ErrorResponse::from_app_error(AppError::Validation("Type a name".to_string()));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, "Type a name");
    }

    #[test]
    fn test_transport_maps_to_external_service() {
        let error =
            ErrorResponse::from_app_error(AppError::Transport("status 503".to_string()));
        assert_eq!(error.error_type, ErrorType::ExternalService);
        assert_eq!(error.details.as_deref(), Some("status 503"));
    }

    #[test]
    fn test_serialization() {
        let error = ErrorResponse::validation("Wrong password".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("validation"));
        assert!(json.contains("Wrong password"));
    }
}
