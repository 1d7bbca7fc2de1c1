//! Transient user-facing notifications.
//!
//! The queue is a shared handle: the façade pushes, the page host drains and
//! renders. Toasts are never persisted.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

// Product copy is Portuguese, matching the rendered pages.

/// Shown whenever a façade call fails.
pub const CONNECTION_ERROR_MESSAGE: &str = "Erro de conexão. Tente novamente.";

/// Shown when the network link comes back.
pub const CONNECTION_RESTORED_MESSAGE: &str = "Conexão restaurada";

/// Shown when the network link drops.
pub const CONNECTION_LOST_MESSAGE: &str = "Sem conexão com a internet";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl ToastKind {
    /// Style suffix used by the page markup (`text-bg-<kind>`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Default)]
pub struct ToastQueue {
    inner: Arc<Mutex<VecDeque<Toast>>>,
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a toast and return a copy of it.
    pub fn push(&self, message: impl Into<String>, kind: ToastKind) -> Toast {
        let toast = Toast {
            id: format!("toast-{}", uuid::Uuid::new_v4()),
            message: message.into(),
            kind,
        };
        tracing::info!(id = %toast.id, kind = kind.as_str(), message = %toast.message, "toast queued");
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(toast.clone());
        toast
    }

    /// Remove and return every queued toast, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<Toast> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<Toast> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "toast_test.rs"]
mod tests;
