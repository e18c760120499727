// SPDX-License-Identifier: MPL-2.0
//! Cancellable timers on a virtual timeline.
//!
//! Every delay in the coordinator (debounce windows, autoplay, stagger,
//! auto-hide, transition grace) is an entry in a single [`TimerQueue`].
//! Entries are identified by a [`TimerHandle`] that controllers keep in
//! their own state, which is what makes cancellation explicit and lets
//! tests drive time deterministically.

use super::clock::Timestamp;
use std::fmt;
use std::time::Duration;

/// Identifies one scheduled timer. Handles are never reused within a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

#[derive(Debug)]
struct Entry<T> {
    handle: TimerHandle,
    due: Timestamp,
    /// `None` for markers: timers that only hold a window open.
    payload: Option<T>,
}

/// A timer that came due.
#[derive(Debug, PartialEq)]
pub struct Fired<T> {
    pub handle: TimerHandle,
    pub due: Timestamp,
    pub task: T,
}

/// Ordered set of pending timers.
///
/// Entries are kept sorted by `(due, handle)`, so timers due at the same
/// instant fire in the order they were scheduled.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Timestamp,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            now: Timestamp::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position of the virtual clock.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        self.now
    }

    /// Schedules `task` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerHandle {
        self.insert(delay, Some(task))
    }

    /// Schedules a marker: a timer with no task that simply stays pending
    /// for `delay`. Markers expire silently.
    pub fn reserve(&mut self, delay: Duration) -> TimerHandle {
        self.insert(delay, None)
    }

    fn insert(&mut self, delay: Duration, payload: Option<T>) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        let due = self.now + delay;
        let position = self
            .entries
            .partition_point(|entry| (entry.due, entry.handle) <= (due, handle));
        self.entries.insert(
            position,
            Entry {
                handle,
                due,
                payload,
            },
        );
        handle
    }

    /// Cancels a pending timer. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        if let Some(position) = self.entries.iter().position(|e| e.handle == handle) {
            self.entries.remove(position);
            true
        } else {
            false
        }
    }

    /// Whether `handle` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Number of pending timers, markers included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Due time of the earliest pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Timestamp> {
        self.entries.first().map(|e| e.due)
    }

    /// Removes and returns the earliest timer due at or before `until`.
    ///
    /// The clock moves to the fired timer's due time, so anything the caller
    /// schedules in response is measured from the moment the timer fired.
    /// Expired markers are discarded on the way.
    pub fn pop_due(&mut self, until: Timestamp) -> Option<Fired<T>> {
        while self.entries.first().is_some_and(|e| e.due <= until) {
            let entry = self.entries.remove(0);
            self.now = self.now.max(entry.due);
            if let Some(task) = entry.payload {
                return Some(Fired {
                    handle: entry.handle,
                    due: entry.due,
                    task,
                });
            }
        }
        None
    }

    /// Moves the clock forward to `until`, dropping expired markers.
    /// Timers carrying a task must be drained with [`pop_due`](Self::pop_due)
    /// first; the clock never moves backwards.
    pub fn advance_to(&mut self, until: Timestamp) {
        self.entries
            .retain(|e| e.payload.is_some() || e.due > until);
        self.now = self.now.max(until);
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
