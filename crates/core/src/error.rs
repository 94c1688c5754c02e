use thiserror::Error;

/// Errors raised before a request reaches the server
#[derive(Debug, Error)]
pub enum FhirError {
    #[error("Resource id must not be empty")]
    MissingId,

    #[error("Invalid resource: {0}")]
    Invalid(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
