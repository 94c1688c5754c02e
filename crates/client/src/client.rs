//! Patient client for a FHIR REST server

use std::sync::Arc;

use fhir_core::{FHIR_JSON, FhirError, PatientResource, SearchParams};
use reqwest::Method;
use serde_json::Value as JsonValue;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};

/// Hook receiving every search URL before the request is issued
pub type UrlHook = Arc<dyn Fn(&str) + Send + Sync>;

/// Client for `Patient` CRUD and search against a FHIR server
///
/// The server base URL is passed on every call and used as given, without
/// trailing-slash normalization.
#[derive(Clone)]
pub struct FhirPatientClient<T = ReqwestTransport> {
    transport: T,
    url_hook: Option<UrlHook>,
}

impl FhirPatientClient<ReqwestTransport> {
    /// Create a client with a default `reqwest` transport
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::new())
    }

    /// Create a client whose transport honours `config`
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::from_config(config).map_err(ClientError::classify)?;
        Ok(Self::with_transport(transport))
    }
}

impl Default for FhirPatientClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> FhirPatientClient<T> {
    /// Create a client over any transport, logging search URLs through `tracing`
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            url_hook: Some(Arc::new(|url: &str| {
                tracing::info!(url, "Fetching patients");
            })),
        }
    }

    /// Replace the search URL hook
    pub fn with_url_hook(mut self, hook: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.url_hook = Some(Arc::new(hook));
        self
    }

    /// Drop the search URL hook entirely
    pub fn without_url_logging(mut self) -> Self {
        self.url_hook = None;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET {server}/Patient?... and return the search Bundle as-is
    ///
    /// Transport failures are classified into `Server`, `NoResponse`,
    /// `RequestSetup` or `Unknown`.
    pub async fn search(&self, server_url: &str, params: &SearchParams) -> Result<JsonValue> {
        let url = params.search_url(server_url);
        if let Some(hook) = &self.url_hook {
            hook(&url);
        }

        let request = HttpRequest::new(Method::GET, url).header("Accept", FHIR_JSON);

        let result = self.exchange(request).await.and_then(|r| decode(&r));

        result.map_err(|err| {
            let err = ClientError::classify(err);
            tracing::warn!(error = %err, "Patient search failed");
            err
        })
    }

    /// GET {server}/Patient/{id}
    pub async fn get(&self, server_url: &str, id: &str) -> Result<PatientResource> {
        let request = HttpRequest::new(Method::GET, patient_url(server_url, id)?);
        let response = self.exchange(request).await?;
        Ok(decode(&response)?)
    }

    /// POST {server}/Patient, returning the stored resource
    pub async fn create(
        &self,
        server_url: &str,
        patient: &PatientResource,
    ) -> Result<PatientResource> {
        let request = HttpRequest::new(Method::POST, format!("{}/Patient", server_url))
            .header("Content-Type", FHIR_JSON)
            .body(encode(patient)?);
        let response = self.exchange(request).await?;
        Ok(decode(&response)?)
    }

    /// PUT {server}/Patient/{id}, returning the stored resource
    pub async fn update(
        &self,
        server_url: &str,
        id: &str,
        patient: &PatientResource,
    ) -> Result<PatientResource> {
        let request = HttpRequest::new(Method::PUT, patient_url(server_url, id)?)
            .header("Content-Type", FHIR_JSON)
            .body(encode(patient)?);
        let response = self.exchange(request).await?;
        Ok(decode(&response)?)
    }

    /// DELETE {server}/Patient/{id}; any response body is ignored
    pub async fn delete(&self, server_url: &str, id: &str) -> Result<()> {
        let request = HttpRequest::new(Method::DELETE, patient_url(server_url, id)?);
        self.exchange(request).await?;
        Ok(())
    }

    async fn exchange(
        &self,
        request: HttpRequest,
    ) -> std::result::Result<HttpResponse, TransportError> {
        let method = request.method.clone();
        let url = request.url.clone();
        tracing::debug!(%method, %url, "Sending request");

        self.transport.send(request).await.inspect_err(|e| {
            tracing::debug!(%method, %url, error = %e, "Request failed");
        })
    }
}

fn patient_url(server_url: &str, id: &str) -> std::result::Result<String, FhirError> {
    if id.trim().is_empty() {
        return Err(FhirError::MissingId);
    }
    Ok(format!("{}/Patient/{}", server_url, id))
}

fn encode(patient: &PatientResource) -> std::result::Result<Vec<u8>, FhirError> {
    Ok(serde_json::to_vec(patient)?)
}

fn decode(response: &HttpResponse) -> std::result::Result<JsonValue, TransportError> {
    serde_json::from_slice(&response.body).map_err(|e| TransportError::Body(e.to_string()))
}
