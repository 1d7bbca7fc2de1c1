//! Notification polling — periodic badge refresh.
//!
//! DESIGN
//! ======
//! One background task polls `/api/notifications/count` through the API
//! façade: immediately at start, then on every interval tick. A successful
//! envelope is projected onto the badge board; `success: false` leaves the
//! badges as they are.
//!
//! Polls are serialized: the loop awaits each poll before waiting for the
//! next tick, and ticks missed during a slow response are skipped rather
//! than replayed. At most one poll is ever in flight.
//!
//! ERROR HANDLING
//! ==============
//! A failed poll is logged and the cycle skipped. The façade has already
//! queued the connection toast; badges are not touched and the timer keeps
//! running. There is no backoff.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::config::DEFAULT_POLL_INTERVAL_SECS;
use crate::net::api::ApiClient;
use crate::net::types::{ApiError, NotificationCountResponse};
use crate::ui::badge::BadgeBoard;

pub const NOTIFICATION_COUNT_ENDPOINT: &str = "/api/notifications/count";

/// What a single poll did to the badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The server reported a count and every badge was updated.
    Rendered(u64),
    /// The server answered with `success: false`; badges untouched.
    Declined,
}

#[derive(Clone)]
pub struct NotificationPoller {
    api: ApiClient,
    badges: BadgeBoard,
    interval: Duration,
}

impl NotificationPoller {
    /// A zero `interval` cannot drive a timer; it falls back to the default
    /// poll interval with a warning.
    #[must_use]
    pub fn new(api: ApiClient, badges: BadgeBoard, interval: Duration) -> Self {
        let interval = if interval.is_zero() {
            warn!(default_secs = DEFAULT_POLL_INTERVAL_SECS, "zero poll interval; using default");
            Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS)
        } else {
            interval
        };
        Self { api, badges, interval }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run one poll cycle.
    ///
    /// # Errors
    ///
    /// Returns the façade's [`ApiError`] if the request or decode failed.
    pub async fn poll_once(&self) -> Result<PollOutcome, ApiError> {
        let resp: NotificationCountResponse = self.api.get_json(NOTIFICATION_COUNT_ENDPOINT).await?;
        if !resp.success {
            debug!("notification count declined by server");
            return Ok(PollOutcome::Declined);
        }
        self.badges.render(resp.count);
        Ok(PollOutcome::Rendered(resp.count))
    }

    /// Spawn the polling loop. The first poll runs immediately.
    pub fn spawn(self) -> PollerHandle {
        info!(interval_secs = self.interval.as_secs(), "notification polling started");
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                match self.poll_once().await {
                    Ok(PollOutcome::Rendered(count)) => debug!(count, "notification count refreshed"),
                    Ok(PollOutcome::Declined) => {}
                    Err(e) => warn!(error = %e, "notification poll failed; skipping cycle"),
                }
            }
        });
        PollerHandle { task }
    }
}

/// Handle to the background polling task. Dropping it leaves the task running.
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    pub fn stop(&self) {
        self.task.abort();
        info!("notification polling stopped");
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

#[cfg(test)]
#[path = "notifications_test.rs"]
mod tests;
