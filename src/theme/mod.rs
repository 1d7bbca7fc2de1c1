//! Light/dark theme preference.
//!
//! DESIGN
//! ======
//! `ThemeController` owns the document's theme attribute and the persisted
//! preference. Interested components subscribe to a typed broadcast
//! channel instead of listening for an ambient page event.
//!
//! Startup resolution: a stored value wins; otherwise the page starts
//! light and switches (and persists) dark when the host reports a dark
//! system preference.

pub mod store;

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::broadcast;

use store::{PreferenceStore, StoreError};

/// Storage key holding the preference.
pub const THEME_KEY: &str = "theme";

/// Document attribute mirroring the active theme.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

const CHANGE_CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown theme '{0}' (expected 'light' or 'dark')")]
pub struct ThemeParseError(String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

pub struct ThemeController {
    store: Arc<dyn PreferenceStore>,
    attribute: Mutex<Theme>,
    changes: broadcast::Sender<Theme>,
}

impl ThemeController {
    /// Resolve the startup theme from `store`, falling back to the system
    /// preference when nothing valid is stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if persisting the system dark preference fails.
    pub fn init(store: Arc<dyn PreferenceStore>, prefers_dark: bool) -> Result<Self, StoreError> {
        let saved = store.get(THEME_KEY).and_then(|raw| match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring stored theme");
                None
            }
        });

        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        let controller = Self { store, attribute: Mutex::new(saved.unwrap_or_default()), changes };

        if saved.is_none() && prefers_dark {
            controller.set_theme(Theme::Dark)?;
        }

        tracing::info!(theme = %controller.current(), saved = saved.is_some(), "theme initialized");
        Ok(controller)
    }

    /// The theme currently applied to the document attribute.
    #[must_use]
    pub fn current(&self) -> Theme {
        *self.attribute.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// `(name, value)` of the document theme attribute.
    #[must_use]
    pub fn document_attribute(&self) -> (&'static str, &'static str) {
        (THEME_ATTRIBUTE, self.current().as_str())
    }

    /// Receive every theme change made after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Theme> {
        self.changes.subscribe()
    }

    /// Apply `theme` to the document, persist it, and notify subscribers.
    ///
    /// The attribute is updated and subscribers are notified even when
    /// persisting fails; the store error is returned afterwards.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the preference cannot be written.
    pub fn set_theme(&self, theme: Theme) -> Result<(), StoreError> {
        *self.attribute.lock().unwrap_or_else(PoisonError::into_inner) = theme;
        let persisted = self.store.set(THEME_KEY, theme.as_str());
        if let Err(e) = &persisted {
            tracing::error!(error = %e, %theme, "theme preference not persisted");
        }
        // No subscribers is not an error.
        let _ = self.changes.send(theme);
        tracing::debug!(%theme, "theme changed");
        persisted
    }

    /// Flip between light and dark, returning the new theme.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the preference cannot be written.
    pub fn toggle(&self) -> Result<Theme, StoreError> {
        let next = self.current().toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
