// SPDX-License-Identifier: MPL-2.0
//! Virtual time for the coordinator.
//!
//! The core never reads the wall clock. Hosts convert their own notion of
//! time (an `Instant` delta in the iced shell, a plain number in tests) into
//! a [`Timestamp`] and hand it to the coordinator.

use std::fmt;
use std::ops::Add;
use std::time::Duration;

/// A point on the coordinator's virtual timeline, measured from its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(Duration);

impl Timestamp {
    /// The coordinator's origin.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Creates a timestamp from milliseconds since origin.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Creates a timestamp from an elapsed duration since origin.
    #[must_use]
    pub const fn from_elapsed(elapsed: Duration) -> Self {
        Self(elapsed)
    }

    /// Milliseconds since origin.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX)
    }

    /// Time elapsed since `earlier`, or zero if `earlier` is in the future.
    #[must_use]
    pub fn saturating_since(self, earlier: Timestamp) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Self::Output {
        Timestamp(self.0.saturating_add(rhs))
    }
}

impl From<Duration> for Timestamp {
    fn from(elapsed: Duration) -> Self {
        Self(elapsed)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.as_millis())
    }
}
