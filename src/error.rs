//! Error Handling Module
//!
//! Defines the service-wide error taxonomy. Every failure is classified as
//! validation, model, inference, or image handling so the HTTP boundary can
//! map it to an appropriate status code, while the response body keeps the
//! uniform `{success: false, error}` shape.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for agrisense operations
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Invalid request input (bad fields, missing upload, etc.)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Error decoding or processing an uploaded image
    #[error("Failed to process image: {0}")]
    Image(String),

    /// Error loading, saving, or constructing a model
    #[error("Model error: {0}")]
    Model(String),

    /// Error during training
    #[error("Training error: {0}")]
    Training(String),

    /// Error during inference
    #[error("Inference error: {0}")]
    Inference(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

impl ServiceError {
    /// Whether this error is the caller's fault
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::Validation(_) | ServiceError::Image(_))
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Serialization(err.to_string())
    }
}

/// Convenience Result type for agrisense operations
pub type Result<T> = std::result::Result<T, ServiceError>;
