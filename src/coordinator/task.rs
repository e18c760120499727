// SPDX-License-Identifier: MPL-2.0
//! Payloads of the coordinator's timer queue.

use crate::page::Layout;
use crate::ui::notifications::NotificationTimer;
use crate::ui::{carousel, contact, portfolio};

/// Work deferred on the coordinator's [`TimerQueue`](crate::timing::TimerQueue).
#[derive(Debug, Clone, PartialEq)]
pub enum TimerTask {
    /// Debounced resize with the latest geometry.
    Resize(Layout),
    Carousel(carousel::Timer),
    Portfolio(portfolio::Timer),
    Notification(NotificationTimer),
    Contact(contact::Timer),
    /// Scroll to a location hash once the page settled.
    DeferredScroll(String),
}

impl From<carousel::Timer> for TimerTask {
    fn from(timer: carousel::Timer) -> Self {
        Self::Carousel(timer)
    }
}

impl From<portfolio::Timer> for TimerTask {
    fn from(timer: portfolio::Timer) -> Self {
        Self::Portfolio(timer)
    }
}

impl From<NotificationTimer> for TimerTask {
    fn from(timer: NotificationTimer) -> Self {
        Self::Notification(timer)
    }
}

impl From<contact::Timer> for TimerTask {
    fn from(timer: contact::Timer) -> Self {
        Self::Contact(timer)
    }
}
