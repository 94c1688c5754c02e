//! fhir-client library crate
//!
//! Exposes `FhirPatientClient`, its transport abstraction and configuration.
//! The command-line entrypoint is in `main.rs`.

mod client;
pub mod config;
mod error;
pub mod transport;

pub use client::{FhirPatientClient, UrlHook};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use fhir_core::{Bundle, OperationOutcome, PatientResource, SearchParams};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};
