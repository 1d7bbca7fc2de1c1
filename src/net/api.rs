//! API access façade.
//!
//! DESIGN
//! ======
//! `ApiClient::call` is the single entry point for outbound requests from
//! the page. Every call:
//! 1. holds a loading guard on the configured region for its whole duration,
//! 2. sends the request with JSON + XHR default headers,
//! 3. decodes the body as JSON and hands it back unchanged.
//!
//! The caller interprets any `success` field in the payload; the HTTP status
//! is not inspected.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and undecodable bodies are reported identically as
//! `ApiError::Connectivity`. Each failure is logged, produces exactly one
//! danger toast, and is returned to the caller. Nothing is retried.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::transport::Transport;
use super::types::{ApiError, HttpMethod, HttpRequest};
use crate::config::DEFAULT_LOADING_REGION;
use crate::ui::loading::LoadingRegions;
use crate::ui::toast::{CONNECTION_ERROR_MESSAGE, ToastKind, ToastQueue};

/// Headers sent with every call unless the caller overrides them.
pub const DEFAULT_HEADERS: [(&str, &str); 2] =
    [("Content-Type", "application/json"), ("X-Requested-With", "XMLHttpRequest")];

// =============================================================================
// OPTIONS
// =============================================================================

/// Per-call overrides merged onto the defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallOptions {
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl CallOptions {
    #[must_use]
    pub fn post(body: serde_json::Value) -> Self {
        Self { method: HttpMethod::Post, body: Some(body), ..Self::default() }
    }

    #[must_use]
    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

fn merge_headers(overrides: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = DEFAULT_HEADERS
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    for (name, value) in overrides {
        match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&name)) {
            Some(existing) => existing.1 = value,
            None => headers.push((name, value)),
        }
    }
    headers
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    loading: LoadingRegions,
    loading_region: String,
    toasts: ToastQueue,
}

impl ApiClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        base_url: impl Into<String>,
        loading: LoadingRegions,
        toasts: ToastQueue,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            loading,
            loading_region: DEFAULT_LOADING_REGION.to_owned(),
            toasts,
        }
    }

    #[must_use]
    pub fn with_loading_region(mut self, region: impl Into<String>) -> Self {
        self.loading_region = region.into();
        self
    }

    #[must_use]
    pub fn loading_region(&self) -> &str {
        &self.loading_region
    }

    /// Absolute URLs pass through; paths are joined onto the base URL.
    #[must_use]
    pub fn resolve_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_owned();
        }
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    fn build_request(&self, endpoint: &str, options: CallOptions) -> HttpRequest {
        HttpRequest {
            method: options.method,
            url: self.resolve_url(endpoint),
            headers: merge_headers(options.headers),
            body: options.body.map(|b| b.to_string()),
        }
    }

    /// Perform one façade call and return the decoded JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Connectivity`] if the request fails or the body is
    /// not JSON. A connection-error toast has already been queued when this
    /// returns an error.
    pub async fn call(&self, endpoint: &str, options: CallOptions) -> Result<serde_json::Value, ApiError> {
        let _loading = self.loading.begin(&self.loading_region);
        let request = self.build_request(endpoint, options);
        let method = request.method.as_str();

        let outcome = match self.transport.send(request).await {
            Ok(body) => serde_json::from_str::<serde_json::Value>(&body).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match outcome {
            Ok(payload) => {
                tracing::debug!(endpoint, method, "api call succeeded");
                Ok(payload)
            }
            Err(reason) => Err(self.connectivity_failure(endpoint, reason)),
        }
    }

    /// `GET` `endpoint` and decode the payload as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Connectivity`] if the call fails or the payload does
    /// not match `T`; either way exactly one toast is queued.
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let payload = self.call(endpoint, CallOptions::default()).await?;
        serde_json::from_value(payload).map_err(|e| self.connectivity_failure(endpoint, e.to_string()))
    }

    fn connectivity_failure(&self, endpoint: &str, reason: String) -> ApiError {
        tracing::error!(endpoint, error = %reason, "api call failed");
        self.toasts.push(CONNECTION_ERROR_MESSAGE, ToastKind::Danger);
        ApiError::Connectivity { endpoint: endpoint.to_owned(), reason }
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
