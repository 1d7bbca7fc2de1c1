//! Network link status toasts.
//!
//! The page host reports link transitions (the browser's `online` /
//! `offline` events); each real transition queues one toast. Repeated
//! reports of the current state are ignored. The link is assumed up at
//! start.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::toast::{CONNECTION_LOST_MESSAGE, CONNECTION_RESTORED_MESSAGE, Toast, ToastKind, ToastQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Online,
    Offline,
}

#[derive(Clone)]
pub struct ConnectivityMonitor {
    toasts: ToastQueue,
    online: Arc<AtomicBool>,
}

impl ConnectivityMonitor {
    #[must_use]
    pub fn new(toasts: ToastQueue) -> Self {
        Self { toasts, online: Arc::new(AtomicBool::new(true)) }
    }

    #[must_use]
    pub fn state(&self) -> LinkState {
        if self.online.load(Ordering::SeqCst) { LinkState::Online } else { LinkState::Offline }
    }

    /// Record the link state, returning the toast queued for a transition.
    pub fn report(&self, state: LinkState) -> Option<Toast> {
        let was_online = self.online.swap(state == LinkState::Online, Ordering::SeqCst);
        match (was_online, state) {
            (false, LinkState::Online) => {
                tracing::info!("network link restored");
                Some(self.toasts.push(CONNECTION_RESTORED_MESSAGE, ToastKind::Success))
            }
            (true, LinkState::Offline) => {
                tracing::warn!("network link lost");
                Some(self.toasts.push(CONNECTION_LOST_MESSAGE, ToastKind::Warning))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "connectivity_test.rs"]
mod tests;
