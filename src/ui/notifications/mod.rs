// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report the outcome of an action
//! (form sent, validation failed) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct and its `Kind`
//! - [`manager`] - `Manager` for the single-slot lifecycle
//!
//! # Design Considerations
//!
//! - One notification at a time: a new one replaces the current one, no queueing
//! - Auto-hide after 5s, exit transition of 300ms before detaching
//! - Explicit dismissal cancels the pending auto-hide

mod manager;
mod notification;

pub use manager::{Manager, Timer as NotificationTimer};
pub use notification::{Kind, Notification, NotificationId};
