// SPDX-License-Identifier: MPL-2.0
//! Timing primitives: virtual clock, cancellable timers, rate limiting.

pub mod clock;
pub mod rate_limiter;
pub mod timer;

pub use clock::Timestamp;
pub use rate_limiter::{Mode, RateLimiter};
pub use timer::{Fired, TimerHandle, TimerQueue};
