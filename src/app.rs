//! Page runtime wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `App` per page: it owns the shared display handles (loading, toasts,
//! badges), the API façade, and the theme controller, and starts the
//! notification poller. Ad-hoc callers borrow the façade through `api()`.
//!
//! Page events the host observes (theme switch, link up/down) arrive as
//! `HostEvent`s through `App::handle`.

use std::str::FromStr;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::transport::{HttpTransport, Transport};
use crate::net::types::ApiError;
use crate::services::notifications::{NotificationPoller, PollerHandle};
use crate::theme::{Theme, ThemeController};
use crate::theme::store::{FilePreferenceStore, PreferenceStore, StoreError};
use crate::ui::badge::BadgeBoard;
use crate::ui::connectivity::{ConnectivityMonitor, LinkState};
use crate::ui::loading::LoadingRegions;
use crate::ui::toast::ToastQueue;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A page event forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    ToggleTheme,
    Link(LinkState),
}

#[derive(Debug, thiserror::Error)]
#[error("unknown host event '{0}' (expected 'theme', 'online' or 'offline')")]
pub struct HostEventParseError(String);

impl FromStr for HostEvent {
    type Err = HostEventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "theme" | "toggle" => Ok(Self::ToggleTheme),
            "online" => Ok(Self::Link(LinkState::Online)),
            "offline" => Ok(Self::Link(LinkState::Offline)),
            other => Err(HostEventParseError(other.to_owned())),
        }
    }
}

pub struct App {
    config: ClientConfig,
    api: ApiClient,
    theme: ThemeController,
    badges: BadgeBoard,
    toasts: ToastQueue,
    loading: LoadingRegions,
    connectivity: ConnectivityMonitor,
}

impl App {
    /// Build the page runtime with the HTTP transport and the file-backed
    /// preference store named in `config`.
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] if the HTTP client cannot be built or the
    /// preference store cannot be opened.
    pub fn new(config: ClientConfig) -> Result<Self, AppError> {
        let transport = HttpTransport::new(config.timeouts)?;
        let store = FilePreferenceStore::open(&config.preferences_path)?;
        Self::with_parts(config, Arc::new(transport), Arc::new(store))
    }

    /// Build the page runtime over caller-supplied transport and storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if resolving the startup theme fails.
    pub fn with_parts(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        store: Arc<dyn PreferenceStore>,
    ) -> Result<Self, AppError> {
        let loading = LoadingRegions::new();
        let toasts = ToastQueue::new();
        let api = ApiClient::new(transport, config.base_url.clone(), loading.clone(), toasts.clone())
            .with_loading_region(config.loading_region.clone());
        let theme = ThemeController::init(store, config.prefers_dark)?;
        let connectivity = ConnectivityMonitor::new(toasts.clone());

        Ok(Self { config, api, theme, badges: BadgeBoard::with_default_selectors(), toasts, loading, connectivity })
    }

    /// Start notification polling. The first poll runs immediately.
    pub fn start(&self) -> PollerHandle {
        NotificationPoller::new(self.api.clone(), self.badges.clone(), self.config.poll_interval).spawn()
    }

    /// Apply a host event. Returns the new theme for `ToggleTheme`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the toggled theme cannot be persisted.
    pub fn handle(&self, event: HostEvent) -> Result<Option<Theme>, AppError> {
        match event {
            HostEvent::ToggleTheme => Ok(Some(self.theme.toggle()?)),
            HostEvent::Link(state) => {
                self.connectivity.report(state);
                Ok(None)
            }
        }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    #[must_use]
    pub fn badges(&self) -> &BadgeBoard {
        &self.badges
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    #[must_use]
    pub fn loading(&self) -> &LoadingRegions {
        &self.loading
    }

    #[must_use]
    pub fn connectivity(&self) -> &ConnectivityMonitor {
        &self.connectivity
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
