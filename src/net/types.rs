//! Wire types and errors shared by the transport and the API façade.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERRORS
// =============================================================================

/// Errors surfaced by [`super::api::ApiClient`].
///
/// Transport and decode failures collapse into a single `Connectivity`
/// variant; callers only need to know the call did not produce a payload.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be completed or its body was not valid JSON.
    #[error("connectivity error calling {endpoint}: {reason}")]
    Connectivity { endpoint: String, reason: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Errors produced by a [`super::transport::Transport`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The response body could not be read.
    #[error("response body unreadable: {0}")]
    Body(String),
}

// =============================================================================
// REQUEST
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully resolved outbound request handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Envelope returned by `GET /api/notifications/count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCountResponse {
    pub success: bool,
    #[serde(default)]
    pub count: u64,
}
