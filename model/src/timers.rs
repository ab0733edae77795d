//! Named timer registry.
//!
//! Every deferred action in the engine is registered under a purpose key.
//! A key holds at most one pending timer: arming it again replaces the old
//! one, so rapid interactions can never stack two resume timers or two
//! autoplay intervals. Time is supplied by the host (`now_ms`), which keeps
//! the engine deterministic under test.

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerKey {
    /// Autoplay interval of the gallery.
    Slideshow,
    /// Re-arms autoplay after a user pause.
    ResumeSlideshow,
    /// Moves focus to the modal close button after opening.
    FocusCloseButton,
    /// Opens a project restored from a stale deep link.
    OpenModalDelay,
    /// Clears the "navigating" flag after an anchor scroll completes.
    NavigationSettle,
    /// Next typewriter keystroke.
    Typewriter,
    /// Re-shows the current page after the window stops resizing.
    ResizeDebounce,
    /// Re-opens the throttled scroll handler.
    ScrollThrottle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Timer {
    deadline: f64,
    period: Option<f64>,
}

#[derive(Debug, Default)]
pub struct TimerRegistry {
    timers: HashMap<TimerKey, Timer>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a one-shot timer, replacing any timer under the same key.
    pub fn set_timeout(&mut self, key: TimerKey, now_ms: f64, delay_ms: f64) {
        self.timers.insert(
            key,
            Timer {
                deadline: now_ms + delay_ms.max(0.0),
                period: None,
            },
        );
    }

    /// Arm a repeating timer, replacing any timer under the same key.
    pub fn set_interval(&mut self, key: TimerKey, now_ms: f64, period_ms: f64) {
        let period = period_ms.max(1.0);
        self.timers.insert(
            key,
            Timer {
                deadline: now_ms + period,
                period: Some(period),
            },
        );
    }

    /// Cancel the timer under `key`. Returns true if one was pending.
    pub fn clear(&mut self, key: TimerKey) -> bool {
        self.timers.remove(&key).is_some()
    }

    pub fn clear_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_pending(&self, key: TimerKey) -> bool {
        self.timers.contains_key(&key)
    }

    pub fn deadline(&self, key: TimerKey) -> Option<f64> {
        self.timers.get(&key).map(|t| t.deadline)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Remove and return the earliest timer due at `now_ms`.
    ///
    /// Intervals are re-armed at `now_ms + period`, not at their old
    /// deadline, so a host that ticks late fires each interval once instead
    /// of catching up in a burst. Ties on deadline resolve by key order.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<TimerKey> {
        self.pop_due_at(now_ms).map(|(key, _)| key)
    }

    /// Like `pop_due`, also returning the deadline the timer was due at, so
    /// the caller can run its callback at the time it was scheduled for.
    pub fn pop_due_at(&mut self, now_ms: f64) -> Option<(TimerKey, f64)> {
        let (key, deadline) = self
            .timers
            .iter()
            .filter(|(_, t)| t.deadline <= now_ms)
            .min_by(|(ka, a), (kb, b)| a.deadline.total_cmp(&b.deadline).then(ka.cmp(kb)))
            .map(|(k, t)| (*k, t.deadline))?;

        match self.timers.get(&key).and_then(|t| t.period) {
            Some(period) => {
                self.timers.insert(
                    key,
                    Timer {
                        deadline: now_ms + period,
                        period: Some(period),
                    },
                );
            }
            None => {
                self.timers.remove(&key);
            }
        }
        Some((key, deadline))
    }
}
