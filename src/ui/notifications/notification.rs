// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Kind` enum used by the
//! notification queue.

use crate::timing::{TimerHandle, Timestamp};
use std::fmt;

/// Identifier of a mounted notification, unique within one queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub(crate) u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification#{}", self.0)
    }
}

/// Kind determines the notification's accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Info,
    Success,
    Error,
}

impl Kind {
    /// Class suffix used by the host's stylesheet (`notification--<suffix>`).
    #[must_use]
    pub fn css_suffix(&self) -> &'static str {
        match self {
            Kind::Info => "info",
            Kind::Success => "success",
            Kind::Error => "error",
        }
    }
}

/// A notification currently mounted by the queue.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
    created_at: Timestamp,
    /// Pending auto-hide timer; `None` once it fired or was cancelled.
    pub(crate) auto_hide: Option<TimerHandle>,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        kind: Kind,
        message: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            kind,
            message,
            created_at,
            auto_hide: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Whether the auto-hide timer is still armed.
    #[must_use]
    pub fn auto_hide_pending(&self) -> bool {
        self.auto_hide.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_suffixes_are_distinct() {
        assert_eq!(Kind::Info.css_suffix(), "info");
        assert_eq!(Kind::Success.css_suffix(), "success");
        assert_eq!(Kind::Error.css_suffix(), "error");
    }

    #[test]
    fn default_kind_is_info() {
        assert_eq!(Kind::default(), Kind::Info);
    }

    #[test]
    fn new_notification_has_no_timer() {
        let n = Notification::new(NotificationId(7), Kind::Error, "boom".into(), Timestamp::ZERO);
        assert_eq!(n.id(), NotificationId(7));
        assert_eq!(n.kind(), Kind::Error);
        assert_eq!(n.message(), "boom");
        assert!(!n.auto_hide_pending());
    }
}
