//! HTTP transport seam.
//!
//! DESIGN
//! ======
//! The façade depends on the `Transport` trait rather than on `reqwest`
//! directly so tests can script responses and observe the loading state
//! mid-request. `HttpTransport` is the production implementation.
//!
//! The transport returns the raw body text regardless of HTTP status;
//! interpreting the payload is the façade's job.

use super::types::{ApiError, HttpMethod, HttpRequest, TransportError};
use crate::config::HttpTimeouts;

/// Sends a resolved request and returns the response body.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`TransportError`] if no response arrives or the body
    /// cannot be read.
    async fn send(&self, request: HttpRequest) -> Result<String, TransportError>;
}

// =============================================================================
// REQWEST
// =============================================================================

pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the TLS backend cannot initialise.
    pub fn new(timeouts: HttpTimeouts) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request())
            .connect_timeout(timeouts.connect())
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http })
    }
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<String, TransportError> {
        let mut builder = self.http.request(reqwest_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        tracing::debug!(url = %request.url, status = response.status().as_u16(), "response received");

        response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}

#[cfg(test)]
#[path = "transport_test.rs"]
mod tests;
