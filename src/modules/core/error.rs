//! Error types for the breed inquiry service

use std::time::Duration;
use thiserror::Error;

/// Main error type for breed inquiry operations
#[derive(Error, Debug)]
pub enum BreedInquiryError {
    /// Configuration file parsing error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Environment variable not found
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    /// Database connection error
    #[error("Database error: {0}")]
    Database(String),

    /// Query execution error
    #[error("Query execution failed: {0}")]
    QueryExecution(String),

    /// Query exceeded its deadline
    #[error("Query timed out after {}s", .0.as_secs_f64())]
    QueryTimeout(Duration),

    /// A result row could not be mapped into a breed record
    #[error("Row mapping failed: {0}")]
    RowMapping(String),

    /// Request body could not be parsed into a search filter
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    /// The whole request exceeded the server deadline
    #[error("Request timed out after {}s", .0.as_secs_f64())]
    RequestTimeout(Duration),

    /// The search matched no rows
    #[error("Breed not found")]
    BreedNotFound,

    /// HTTP server error
    #[error("Server error: {0}")]
    Server(String),

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BreedInquiryError {
    /// Returns true if this error should be logged at error level
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            BreedInquiryError::Database(_)
                | BreedInquiryError::QueryExecution(_)
                | BreedInquiryError::QueryTimeout(_)
                | BreedInquiryError::RowMapping(_)
                | BreedInquiryError::RequestTimeout(_)
                | BreedInquiryError::Server(_)
                | BreedInquiryError::Internal(_)
        )
    }

    /// Returns true if this error is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            BreedInquiryError::InvalidRequest(_) | BreedInquiryError::BreedNotFound
        )
    }

    /// Returns the appropriate HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            BreedInquiryError::InvalidRequest(_) => 400,
            BreedInquiryError::BreedNotFound => 404,
            BreedInquiryError::RequestTimeout(_) => 408,
            _ => 500,
        }
    }

    /// Sanitize the error message to avoid leaking driver or connection details
    pub fn sanitized_message(&self) -> String {
        match self {
            BreedInquiryError::InvalidRequest(_) => "Invalid request body".to_string(),
            BreedInquiryError::BreedNotFound => "Breed not found".to_string(),

            BreedInquiryError::Database(_)
            | BreedInquiryError::QueryExecution(_)
            | BreedInquiryError::QueryTimeout(_) => "Database error".to_string(),

            BreedInquiryError::RowMapping(_) => "Error scanning data".to_string(),

            BreedInquiryError::RequestTimeout(_) => "Request timeout".to_string(),

            _ => "Internal server error".to_string(),
        }
    }
}

/// Result type alias using BreedInquiryError
pub type Result<T> = std::result::Result<T, BreedInquiryError>;
