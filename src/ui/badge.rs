//! Notification badge projection.
//!
//! A page may carry any number of badge elements; each poll result is
//! projected onto all of them with the same display policy.

use std::sync::{Arc, Mutex, PoisonError};

/// Selectors the page templates use for notification badges.
pub const DEFAULT_BADGE_SELECTORS: [&str; 2] = [".badge-notification", ".notification-count"];

/// Largest count shown verbatim; anything above renders as `99+`.
pub const MAX_DISPLAYED_COUNT: u64 = 99;

/// Text for a badge showing `count`, or `None` when the badge is hidden.
#[must_use]
pub fn badge_text(count: u64) -> Option<String> {
    match count {
        0 => None,
        1..=MAX_DISPLAYED_COUNT => Some(count.to_string()),
        _ => Some(format!("{MAX_DISPLAYED_COUNT}+")),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Badge {
    pub selector: String,
    pub text: String,
    pub visible: bool,
}

impl Badge {
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self { selector: selector.into(), text: String::new(), visible: false }
    }

    fn render(&mut self, count: u64) {
        match badge_text(count) {
            Some(text) => {
                self.text = text;
                self.visible = true;
            }
            // Hidden badges keep their last text.
            None => self.visible = false,
        }
    }
}

#[derive(Clone, Default)]
pub struct BadgeBoard {
    badges: Arc<Mutex<Vec<Badge>>>,
}

impl BadgeBoard {
    #[must_use]
    pub fn new(badges: Vec<Badge>) -> Self {
        Self { badges: Arc::new(Mutex::new(badges)) }
    }

    #[must_use]
    pub fn with_default_selectors() -> Self {
        Self::new(DEFAULT_BADGE_SELECTORS.iter().map(|s| Badge::new(*s)).collect())
    }

    /// Apply the display policy for `count` to every badge.
    pub fn render(&self, count: u64) {
        let mut badges = self.badges.lock().unwrap_or_else(PoisonError::into_inner);
        for badge in badges.iter_mut() {
            badge.render(count);
        }
        tracing::debug!(count, badges = badges.len(), "badges rendered");
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<Badge> {
        self.badges.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[cfg(test)]
#[path = "badge_test.rs"]
mod tests;
