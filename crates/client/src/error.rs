//! Client error handling

use fhir_core::{FhirError, OperationOutcome};
use thiserror::Error;

use crate::transport::TransportError;

/// Errors returned by `FhirPatientClient`
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server was reached and rejected the request
    #[error("Server error: {status} {status_text}")]
    Server {
        status: u16,
        status_text: String,
        outcome: Option<OperationOutcome>,
    },

    #[error("No response received from server. This might be a CORS issue. ({0})")]
    NoResponse(String),

    #[error("Error setting up the request: {0}")]
    RequestSetup(String),

    #[error("An unexpected error occurred")]
    Unknown,

    /// Raw transport failure, passed through without classification
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Invalid(#[from] FhirError),
}

pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Map a transport failure onto the search error taxonomy
    pub fn classify(err: TransportError) -> Self {
        match err {
            TransportError::Status {
                status,
                status_text,
                body,
            } => ClientError::Server {
                status,
                status_text,
                outcome: OperationOutcome::from_body(&body),
            },
            TransportError::NoResponse(detail) => ClientError::NoResponse(detail),
            TransportError::Setup(message) => ClientError::RequestSetup(message),
            TransportError::Body(_) => ClientError::Unknown,
        }
    }

    /// HTTP status of the failure, classified or raw
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status() {
        let err = ClientError::classify(TransportError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
            body: String::new(),
        });
        assert_eq!(err.to_string(), "Server error: 404 Not Found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_classify_keeps_operation_outcome() {
        let body = r#"{"resourceType":"OperationOutcome",
            "issue":[{"severity":"error","code":"invalid","diagnostics":"bad _count"}]}"#;
        let err = ClientError::classify(TransportError::Status {
            status: 400,
            status_text: "Bad Request".to_string(),
            body: body.to_string(),
        });

        match err {
            ClientError::Server { outcome, .. } => {
                let outcome = outcome.expect("outcome should be parsed");
                assert_eq!(outcome.diagnostics().as_deref(), Some("bad _count"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_classify_no_response_mentions_cors() {
        let err = ClientError::classify(TransportError::NoResponse("connection refused".into()));
        let message = err.to_string();
        assert!(message.contains("No response received"));
        assert!(message.contains("CORS"));
    }

    #[test]
    fn test_classify_setup_and_body() {
        let err = ClientError::classify(TransportError::Setup("relative URL".into()));
        assert_eq!(err.to_string(), "Error setting up the request: relative URL");

        let err = ClientError::classify(TransportError::Body("expected value".into()));
        assert!(matches!(err, ClientError::Unknown));
        assert_eq!(err.to_string(), "An unexpected error occurred");
    }
}
