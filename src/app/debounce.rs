//! Keystroke coalescing for the search bar.
//!
//! Zellij timers cannot be cancelled. Instead of cancelling, the debouncer
//! keeps one pending value with a deadline; every keystroke overwrites it and
//! asks for another timer. A timer tick flushes the pending query only once
//! its deadline has passed, so ticks belonging to superseded keystrokes fall
//! through without effect.

use chrono::{DateTime, Duration, Utc};

/// Default quiet period before a typed query is applied.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Upper bound on the quiet period.
const MAX_SEARCH_DEBOUNCE_MS: u64 = 10_000;

/// Host timers may fire a hair before the deadline they were set for.
pub(crate) const TIMER_GRACE_MS: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    query: String,
    deadline: DateTime<Utc>,
}

/// Pending-timer value for debounced search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE_MS)
    }
}

impl Debouncer {
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::milliseconds(
                i64::try_from(delay_ms.min(MAX_SEARCH_DEBOUNCE_MS)).unwrap_or(0),
            ),
            pending: None,
        }
    }

    /// Quiet period to request from the host timer.
    #[must_use]
    pub fn delay(&self) -> std::time::Duration {
        self.delay.to_std().unwrap_or_default()
    }

    /// Records a new query, replacing any pending one, and restarts the quiet
    /// period from `at`.
    pub fn schedule(&mut self, query: impl Into<String>, at: DateTime<Utc>) {
        self.pending = Some(Pending {
            query: query.into(),
            deadline: at + self.delay,
        });
    }

    /// Returns the pending query if its quiet period has elapsed at `now`.
    pub fn flush_due(&mut self, now: DateTime<Utc>) -> Option<String> {
        let grace = Duration::milliseconds(TIMER_GRACE_MS);
        if self.pending.as_ref().is_some_and(|p| now + grace >= p.deadline) {
            return self.pending.take().map(|p| p.query);
        }
        None
    }

    /// Drops the pending query without applying it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000 + ms).unwrap()
    }

    #[test]
    fn burst_of_keystrokes_flushes_last_query_once() {
        let mut debouncer = Debouncer::new(300);
        debouncer.schedule("r", t(0));
        debouncer.schedule("ru", t(100));
        debouncer.schedule("rus", t(200));

        // tick from the first keystroke's timer
        assert_eq!(debouncer.flush_due(t(300)), None);
        // tick from the second
        assert_eq!(debouncer.flush_due(t(400)), None);
        assert_eq!(debouncer.flush_due(t(500)), Some("rus".to_string()));
        assert_eq!(debouncer.flush_due(t(600)), None);
    }

    #[test]
    fn cancel_drops_pending_query() {
        let mut debouncer = Debouncer::default();
        debouncer.schedule("abc", t(0));
        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.flush_due(t(10_000)), None);
    }

    #[test]
    fn delay_is_clamped_and_reported_for_the_host_timer() {
        assert_eq!(Debouncer::new(300).delay(), std::time::Duration::from_millis(300));
        assert_eq!(Debouncer::new(u64::MAX).delay(), std::time::Duration::from_secs(10));
    }

    #[test]
    fn early_tick_within_grace_still_flushes() {
        let mut debouncer = Debouncer::new(300);
        debouncer.schedule("ada", t(0));
        assert_eq!(debouncer.flush_due(t(298)), Some("ada".to_string()));
    }
}
