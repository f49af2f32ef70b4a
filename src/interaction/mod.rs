//! Resize signal debouncing.
//!
//! Hosts forward every raw resize signal to [`ResizeDebouncer::notify_at`] and
//! call [`ResizeDebouncer::poll_at`] from their event loop tick. A single
//! pending slot is kept: a new signal during the quiet window restarts the
//! window instead of queueing a second recompute.
//!
//! Time is always passed in explicitly so identical signal sequences yield
//! identical decisions.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Default quiet window before a burst of resize signals is applied.
pub const DEFAULT_RESIZE_QUIET_PERIOD_MS: u64 = 100;

/// Outcome of a debouncer poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeDecision {
    /// Nothing pending.
    Idle,
    /// A recompute is pending; the quiet window has not elapsed yet.
    Waiting { remaining: Duration },
    /// The quiet window elapsed; apply once. `coalesced` counts the signals
    /// folded into this apply.
    Apply { coalesced: u64 },
}

impl ResizeDecision {
    #[must_use]
    pub const fn should_apply(self) -> bool {
        matches!(self, Self::Apply { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingResize {
    last_signal: Instant,
    coalesced: u64,
}

/// Trailing-edge debounce with a single pending slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeDebouncer {
    quiet_period: Duration,
    pending: Option<PendingResize>,
    applied_count: u64,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_RESIZE_QUIET_PERIOD_MS))
    }
}

impl ResizeDebouncer {
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
            applied_count: 0,
        }
    }

    #[must_use]
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of applies fired since construction.
    #[must_use]
    pub fn applied_count(&self) -> u64 {
        self.applied_count
    }

    /// Instant at which the pending recompute becomes due.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending
            .map(|pending| pending.last_signal + self.quiet_period)
    }

    /// Records a resize signal, restarting the quiet window.
    pub fn notify_at(&mut self, now: Instant) {
        let coalesced = self.pending.map_or(0, |pending| pending.coalesced);
        self.pending = Some(PendingResize {
            last_signal: now,
            coalesced: coalesced + 1,
        });
    }

    /// Fires at most once per burst, on the trailing edge of the quiet window.
    pub fn poll_at(&mut self, now: Instant) -> ResizeDecision {
        let Some(pending) = self.pending else {
            return ResizeDecision::Idle;
        };

        let elapsed = now.saturating_duration_since(pending.last_signal);
        if elapsed < self.quiet_period {
            return ResizeDecision::Waiting {
                remaining: self.quiet_period - elapsed,
            };
        }

        self.pending = None;
        self.applied_count += 1;
        ResizeDecision::Apply {
            coalesced: pending.coalesced,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{ResizeDebouncer, ResizeDecision};

    #[test]
    fn idle_without_signals() {
        let mut debouncer = ResizeDebouncer::new(Duration::from_millis(50));
        assert_eq!(debouncer.poll_at(Instant::now()), ResizeDecision::Idle);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn burst_coalesces_into_one_apply() {
        let start = Instant::now();
        let mut debouncer = ResizeDebouncer::new(Duration::from_millis(50));

        debouncer.notify_at(start);
        debouncer.notify_at(start + Duration::from_millis(20));
        debouncer.notify_at(start + Duration::from_millis(40));

        assert_eq!(
            debouncer.poll_at(start + Duration::from_millis(60)),
            ResizeDecision::Waiting {
                remaining: Duration::from_millis(30)
            }
        );
        assert_eq!(
            debouncer.poll_at(start + Duration::from_millis(90)),
            ResizeDecision::Apply { coalesced: 3 }
        );
        assert_eq!(
            debouncer.poll_at(start + Duration::from_millis(500)),
            ResizeDecision::Idle
        );
        assert_eq!(debouncer.applied_count(), 1);
    }

    #[test]
    fn new_signal_resets_the_window() {
        let start = Instant::now();
        let mut debouncer = ResizeDebouncer::new(Duration::from_millis(50));
        debouncer.notify_at(start);
        assert_eq!(debouncer.deadline(), Some(start + Duration::from_millis(50)));

        debouncer.notify_at(start + Duration::from_millis(45));
        assert_eq!(debouncer.deadline(), Some(start + Duration::from_millis(95)));
        assert!(!debouncer.poll_at(start + Duration::from_millis(60)).should_apply());
    }

    #[test]
    fn zero_quiet_period_applies_on_next_poll() {
        let now = Instant::now();
        let mut debouncer = ResizeDebouncer::new(Duration::ZERO);
        debouncer.notify_at(now);
        assert!(debouncer.poll_at(now).should_apply());
    }
}
