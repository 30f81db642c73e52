//! Badge policy controlling how card variants are derived.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Policy for the card's overlay badges.
///
/// The only knob today is the new-release recency window: a card whose
/// release date falls within the window before the evaluation instant is
/// badged as a new release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgePolicy {
    /// Length of the new-release window, in days.
    pub new_release_window_days: i64,
}

impl BadgePolicy {
    /// Default new-release window.
    pub const DEFAULT_WINDOW_DAYS: i64 = 30;

    /// Create a policy with the given new-release window.
    pub fn new(new_release_window_days: i64) -> Self {
        Self {
            new_release_window_days,
        }
    }

    /// Set the new-release window in days.
    pub fn with_new_release_window_days(mut self, days: i64) -> Self {
        self.new_release_window_days = days;
        self
    }

    /// The new-release window as a duration.
    pub fn new_release_window(&self) -> Duration {
        Duration::days(self.new_release_window_days)
    }

    /// Check whether a release date counts as recent at `now`.
    ///
    /// The window is half-open: a release exactly `window` days old is no
    /// longer recent, and a release dated in the future is not recent.
    pub fn is_recent_release(&self, released_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let elapsed = now.signed_duration_since(released_at);
        elapsed >= Duration::zero() && elapsed < self.new_release_window()
    }
}

impl Default for BadgePolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW_DAYS)
    }
}
