//! HTTP transport used by the Patient client

use std::error::Error as StdError;

use async_trait::async_trait;
use reqwest::Method;
use thiserror::Error;

use crate::config::ClientConfig;

/// Failure reported by a transport, before any client-level classification
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The server answered with a non-2xx status
    #[error("Request failed with status code {status}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },

    /// The request went out but no response came back
    #[error("No response: {0}")]
    NoResponse(String),

    /// The request could not be built or sent
    #[error("Invalid request: {0}")]
    Setup(String),

    /// A response arrived but its body could not be decoded
    #[error("Invalid response body: {0}")]
    Body(String),
}

impl TransportError {
    /// Status code for `Status` failures
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    fn from_reqwest(err: reqwest::Error) -> Self {
        let message = error_chain(&err);
        // JSON decoding happens above the transport, so anything reqwest
        // reports past the builder stage (connect, timeout, a body stream
        // that stalls or is cut off) means the response never fully arrived.
        if err.is_builder() {
            TransportError::Setup(message)
        } else {
            TransportError::NoResponse(message)
        }
    }
}

/// Render an error with its source chain, reqwest's top-level message is terse
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

/// Outgoing HTTP request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Look up a header value by case-insensitive name
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Successful (2xx) HTTP response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// A single request/response exchange
///
/// Implementations must return `TransportError::Status` for any non-2xx
/// status so callers never see an unsuccessful `HttpResponse`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Transport backed by `reqwest`
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a transport with the timeout and user agent from `config`
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| TransportError::Setup(error_chain(&e)))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.http.request(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(TransportError::from_reqwest)?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %request.url, "Received response");

        if !status.is_success() {
            // The status alone decides the outcome, the body is best effort
            let body = response.bytes().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(TransportError::from_reqwest)?;

        Ok(HttpResponse {
            status: status.as_u16(),
            body: body.to_vec(),
        })
    }
}
