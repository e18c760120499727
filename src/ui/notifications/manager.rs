// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` keeps at most one notification on screen. Showing a new one
//! evicts the previous one immediately; dismissing plays an exit transition
//! and detaches the element after a grace period.

use super::notification::{Kind, Notification, NotificationId};
use crate::timing::{TimerHandle, TimerQueue};
use crate::ui::view_sync::{ViewSync, ViewUpdate};
use std::time::Duration;

/// Timers owned by the notification manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Visible notification reached its display time.
    AutoHide(NotificationId),
    /// Exit transition finished; the element can go.
    Detach(NotificationId),
}

#[derive(Debug)]
pub struct Manager {
    next_id: u64,
    /// The notification currently shown, if any.
    visible: Option<Notification>,
    /// Notifications playing their exit transition, with their detach timers.
    leaving: Vec<(NotificationId, TimerHandle)>,
    auto_hide: Duration,
    exit_grace: Duration,
}

impl Manager {
    #[must_use]
    pub fn new(auto_hide: Duration, exit_grace: Duration) -> Self {
        Self {
            next_id: 0,
            visible: None,
            leaving: Vec::new(),
            auto_hide,
            exit_grace,
        }
    }

    /// Shows a notification, evicting whatever is mounted.
    pub fn show<T: From<Timer>>(
        &mut self,
        message: impl Into<String>,
        kind: Kind,
        timers: &mut TimerQueue<T>,
        sync: &mut ViewSync,
    ) -> NotificationId {
        self.evict_all(timers, sync);

        let id = NotificationId(self.next_id);
        self.next_id += 1;
        let mut notification = Notification::new(id, kind, message.into(), timers.now());

        sync.push(ViewUpdate::NotificationMounted {
            id,
            kind,
            message: notification.message().to_string(),
        });
        sync.push(ViewUpdate::NotificationEntered(id));

        notification.auto_hide = Some(timers.schedule(self.auto_hide, Timer::AutoHide(id).into()));
        self.visible = Some(notification);
        tracing::debug!(%id, ?kind, "notification shown");
        id
    }

    /// Starts the exit transition of the visible notification.
    ///
    /// Returns `false` if `id` is not the visible notification (already
    /// leaving, evicted or unknown).
    pub fn dismiss<T: From<Timer>>(
        &mut self,
        id: NotificationId,
        timers: &mut TimerQueue<T>,
        sync: &mut ViewSync,
    ) -> bool {
        if !self.visible.as_ref().is_some_and(|n| n.id() == id) {
            return false;
        }
        let Some(notification) = self.visible.take() else {
            return false;
        };
        if let Some(handle) = notification.auto_hide {
            timers.cancel(handle);
        }

        sync.push(ViewUpdate::NotificationLeaving(id));
        let detach = timers.schedule(self.exit_grace, Timer::Detach(id).into());
        self.leaving.push((id, detach));
        true
    }

    /// Handles one of this manager's timers.
    pub fn on_timer<T: From<Timer>>(
        &mut self,
        timer: Timer,
        timers: &mut TimerQueue<T>,
        sync: &mut ViewSync,
    ) {
        match timer {
            Timer::AutoHide(id) => {
                if let Some(notification) = self.visible.as_mut().filter(|n| n.id() == id) {
                    notification.auto_hide = None;
                }
                self.dismiss(id, timers, sync);
            }
            Timer::Detach(id) => {
                if let Some(position) = self.leaving.iter().position(|(lid, _)| *lid == id) {
                    self.leaving.remove(position);
                    sync.push(ViewUpdate::NotificationRemoved(id));
                }
            }
        }
    }

    /// Removes every mounted notification at once, cancelling their timers.
    pub fn evict_all<T>(&mut self, timers: &mut TimerQueue<T>, sync: &mut ViewSync) {
        if let Some(notification) = self.visible.take() {
            if let Some(handle) = notification.auto_hide {
                timers.cancel(handle);
            }
            sync.push(ViewUpdate::NotificationRemoved(notification.id()));
        }
        for (id, detach) in self.leaving.drain(..) {
            timers.cancel(detach);
            sync.push(ViewUpdate::NotificationRemoved(id));
        }
    }

    /// Disarms every timer. The visible notification stays mounted without
    /// auto-hide; notifications already leaving are removed at once.
    pub fn cancel_timers<T>(&mut self, timers: &mut TimerQueue<T>, sync: &mut ViewSync) {
        if let Some(handle) = self.visible.as_mut().and_then(|n| n.auto_hide.take()) {
            timers.cancel(handle);
        }
        for (id, detach) in self.leaving.drain(..) {
            timers.cancel(detach);
            sync.push(ViewUpdate::NotificationRemoved(id));
        }
    }

    /// Returns the visible notification.
    #[must_use]
    pub fn visible(&self) -> Option<&Notification> {
        self.visible.as_ref()
    }

    /// Number of notification elements mounted, leaving ones included.
    #[must_use]
    pub fn element_count(&self) -> usize {
        usize::from(self.visible.is_some()) + self.leaving.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::Timestamp;

    fn manager() -> Manager {
        Manager::new(Duration::from_millis(5000), Duration::from_millis(300))
    }

    fn run_until(
        manager: &mut Manager,
        timers: &mut TimerQueue<Timer>,
        sync: &mut ViewSync,
        millis: u64,
    ) {
        let until = Timestamp::from_millis(millis);
        while let Some(fired) = timers.pop_due(until) {
            manager.on_timer(fired.task, timers, sync);
        }
        timers.advance_to(until);
    }

    #[test]
    fn show_mounts_and_arms_auto_hide() {
        let mut manager = manager();
        let mut timers: TimerQueue<Timer> = TimerQueue::new();
        let mut sync = ViewSync::default();

        let id = manager.show("hello", Kind::Info, &mut timers, &mut sync);

        assert_eq!(manager.element_count(), 1);
        assert!(manager.visible().is_some_and(|n| n.auto_hide_pending()));
        assert_eq!(
            sync.drain(),
            vec![
                ViewUpdate::NotificationMounted {
                    id,
                    kind: Kind::Info,
                    message: "hello".into()
                },
                ViewUpdate::NotificationEntered(id),
            ]
        );
    }

    #[test]
    fn second_show_evicts_first_immediately() {
        let mut manager = manager();
        let mut timers: TimerQueue<Timer> = TimerQueue::new();
        let mut sync = ViewSync::default();

        let first = manager.show("one", Kind::Info, &mut timers, &mut sync);
        sync.drain();
        let second = manager.show("two", Kind::Success, &mut timers, &mut sync);

        assert_eq!(manager.element_count(), 1);
        assert_eq!(manager.visible().map(Notification::id), Some(second));
        assert_eq!(sync.drain()[0], ViewUpdate::NotificationRemoved(first));
        // Only the second notification's auto-hide remains.
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn auto_hide_then_detach_after_grace() {
        let mut manager = manager();
        let mut timers: TimerQueue<Timer> = TimerQueue::new();
        let mut sync = ViewSync::default();

        let id = manager.show("bye", Kind::Info, &mut timers, &mut sync);
        sync.drain();

        run_until(&mut manager, &mut timers, &mut sync, 4999);
        assert!(sync.is_empty());

        run_until(&mut manager, &mut timers, &mut sync, 5000);
        assert_eq!(sync.drain(), vec![ViewUpdate::NotificationLeaving(id)]);
        assert_eq!(manager.element_count(), 1);

        run_until(&mut manager, &mut timers, &mut sync, 5300);
        assert_eq!(sync.drain(), vec![ViewUpdate::NotificationRemoved(id)]);
        assert_eq!(manager.element_count(), 0);
    }

    #[test]
    fn explicit_dismiss_cancels_auto_hide() {
        let mut manager = manager();
        let mut timers: TimerQueue<Timer> = TimerQueue::new();
        let mut sync = ViewSync::default();

        let id = manager.show("x", Kind::Error, &mut timers, &mut sync);
        run_until(&mut manager, &mut timers, &mut sync, 1000);
        assert!(manager.dismiss(id, &mut timers, &mut sync));
        assert!(!manager.dismiss(id, &mut timers, &mut sync));

        // Only the detach timer is left.
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.next_due(), Some(Timestamp::from_millis(1300)));
    }

    #[test]
    fn show_during_exit_transition_removes_leaving_element() {
        let mut manager = manager();
        let mut timers: TimerQueue<Timer> = TimerQueue::new();
        let mut sync = ViewSync::default();

        let first = manager.show("one", Kind::Info, &mut timers, &mut sync);
        manager.dismiss(first, &mut timers, &mut sync);
        sync.drain();

        manager.show("two", Kind::Info, &mut timers, &mut sync);
        assert_eq!(manager.element_count(), 1);
        assert_eq!(sync.drain()[0], ViewUpdate::NotificationRemoved(first));

        // The cancelled detach timer never produces a second removal.
        run_until(&mut manager, &mut timers, &mut sync, 400);
        assert!(sync.is_empty());
    }

    #[test]
    fn dismiss_unknown_id_is_noop() {
        let mut manager = manager();
        let mut timers: TimerQueue<Timer> = TimerQueue::new();
        let mut sync = ViewSync::default();
        assert!(!manager.dismiss(NotificationId(42), &mut timers, &mut sync));
        assert!(sync.is_empty());
    }

    #[test]
    fn cancel_timers_disarms_and_settles() {
        let mut manager = manager();
        let mut timers: TimerQueue<Timer> = TimerQueue::new();
        let mut sync = ViewSync::default();
        let first = manager.show("first", Kind::Info, &mut timers, &mut sync);
        manager.dismiss(first, &mut timers, &mut sync);
        let second = manager.show("second", Kind::Info, &mut timers, &mut sync);
        sync.drain();

        manager.cancel_timers(&mut timers, &mut sync);
        assert!(timers.is_empty());
        let visible = manager.visible().expect("still mounted");
        assert_eq!(visible.id(), second);
        assert!(!visible.auto_hide_pending());
        assert_eq!(manager.element_count(), 1);
        assert!(sync.is_empty());
    }

    #[test]
    fn cancel_timers_removes_leaving_notifications() {
        let mut manager = manager();
        let mut timers: TimerQueue<Timer> = TimerQueue::new();
        let mut sync = ViewSync::default();
        let id = manager.show("bye", Kind::Success, &mut timers, &mut sync);
        manager.dismiss(id, &mut timers, &mut sync);
        sync.drain();

        manager.cancel_timers(&mut timers, &mut sync);
        assert!(timers.is_empty());
        assert_eq!(manager.element_count(), 0);
        assert_eq!(sync.drain(), vec![ViewUpdate::NotificationRemoved(id)]);
    }
}
