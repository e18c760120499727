// SPDX-License-Identifier: MPL-2.0
//! Debounce and throttle scheduling.
//!
//! A [`RateLimiter`] owns at most one pending timer handle. In debounce mode
//! a new request replaces the pending one; in throttle mode a request made
//! while the window is open is dropped.

use super::timer::{TimerHandle, TimerQueue};
use std::time::Duration;

/// Rate-limiting policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Run once `delay` after the last request.
    Debounce,
    /// Run the first request immediately, drop the rest until `delay` elapses.
    Throttle,
}

#[derive(Debug, Clone)]
pub struct RateLimiter {
    mode: Mode,
    delay: Duration,
    pending: Option<TimerHandle>,
}

impl RateLimiter {
    #[must_use]
    pub fn debounce(delay: Duration) -> Self {
        Self {
            mode: Mode::Debounce,
            delay,
            pending: None,
        }
    }

    #[must_use]
    pub fn throttle(limit: Duration) -> Self {
        Self {
            mode: Mode::Throttle,
            delay: limit,
            pending: None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Applies this limiter's policy to `action`.
    ///
    /// Returns the action when it must run right now (throttle, window
    /// closed). Returns `None` when it was deferred (debounce) or dropped
    /// (throttle, window open).
    pub fn schedule<T>(&mut self, timers: &mut TimerQueue<T>, action: T) -> Option<T> {
        match self.mode {
            Mode::Debounce => {
                self.schedule_debounced(timers, action);
                None
            }
            Mode::Throttle => self.schedule_throttled(timers, action),
        }
    }

    /// Cancels the pending action, if any, and schedules `action` to run
    /// after `delay` of inactivity.
    pub fn schedule_debounced<T>(&mut self, timers: &mut TimerQueue<T>, action: T) -> TimerHandle {
        if let Some(previous) = self.pending.take() {
            timers.cancel(previous);
        }
        let handle = timers.schedule(self.delay, action);
        self.pending = Some(handle);
        handle
    }

    /// Leading-edge throttle. Opens a suppression window and hands `action`
    /// back for immediate execution, or drops it if a window is open.
    pub fn schedule_throttled<T, A>(&mut self, timers: &mut TimerQueue<T>, action: A) -> Option<A> {
        if self.is_pending(timers) {
            return None;
        }
        self.pending = Some(timers.reserve(self.delay));
        Some(action)
    }

    /// Whether a debounced action or throttle window is still pending.
    #[must_use]
    pub fn is_pending<T>(&self, timers: &TimerQueue<T>) -> bool {
        self.pending.is_some_and(|handle| timers.is_pending(handle))
    }

    /// Cancels whatever is pending. Returns `true` if something was cancelled.
    pub fn cancel<T>(&mut self, timers: &mut TimerQueue<T>) -> bool {
        self.pending
            .take()
            .is_some_and(|handle| timers.cancel(handle))
    }
}
