//! fhir-core: Shared FHIR R4 types for the Patient client
//!
//! This crate provides the transport-free pieces of the client: search
//! parameter encoding, a lenient Bundle view and OperationOutcome.

pub mod bundle;
pub mod error;
pub mod outcome;
pub mod search;

/// A FHIR Patient resource, kept as an opaque JSON document
pub type PatientResource = serde_json::Value;

// Re-export our types
pub use bundle::{Bundle, BundleEntry, BundleLink};
pub use error::FhirError;
pub use outcome::{IssueSeverity, IssueType, OperationOutcome, OperationOutcomeIssue};
pub use search::SearchParams;

/// Media type for FHIR JSON payloads
pub const FHIR_JSON: &str = "application/fhir+json";
