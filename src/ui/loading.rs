//! Loading indicator for page regions.
//!
//! DESIGN
//! ======
//! Each façade call holds a `LoadingGuard` for its region. The guard marks
//! the region on creation and unmarks it on drop, so every exit path
//! (success, error, or a dropped future) releases the indicator.
//!
//! Regions keep an in-flight counter rather than a boolean: two overlapping
//! calls on `body` keep it loading until the second one finishes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone, Default)]
pub struct LoadingRegions {
    inner: Arc<Mutex<HashMap<String, usize>>>,
}

impl LoadingRegions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `region` as loading until the returned guard is dropped.
    #[must_use = "the region stops loading as soon as the guard is dropped"]
    pub fn begin(&self, region: &str) -> LoadingGuard {
        let mut regions = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let count = regions.entry(region.to_owned()).or_insert(0);
        *count += 1;
        if *count == 1 {
            tracing::debug!(region, "loading shown");
        }
        LoadingGuard { regions: self.clone(), region: region.to_owned() }
    }

    #[must_use]
    pub fn is_loading(&self, region: &str) -> bool {
        self.in_flight(region) > 0
    }

    /// Number of guards currently held for `region`.
    #[must_use]
    pub fn in_flight(&self, region: &str) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(region)
            .copied()
            .unwrap_or(0)
    }

    fn end(&self, region: &str) {
        let mut regions = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(count) = regions.get_mut(region) else {
            return;
        };
        *count = count.saturating_sub(1);
        if *count == 0 {
            regions.remove(region);
            tracing::debug!(region, "loading hidden");
        }
    }
}

/// Scoped loading marker returned by [`LoadingRegions::begin`].
pub struct LoadingGuard {
    regions: LoadingRegions,
    region: String,
}

impl LoadingGuard {
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.regions.end(&self.region);
    }
}

#[cfg(test)]
#[path = "loading_test.rs"]
mod tests;
