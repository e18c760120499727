// SPDX-License-Identifier: MPL-2.0
//! Event and timer handlers of the coordinator.

use super::{Coordinator, TimerTask, UiEvent};
use crate::error::Error;
use crate::page::Layout;
use crate::ui::contact::{self, MailLabels};
use crate::ui::notifications::Kind;
use crate::ui::scroll_spy::{self, parallax_offset};
use crate::ui::view_sync::ViewUpdate;

impl Coordinator {
    pub(super) fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Scroll { y } => self.handle_scroll(y),
            UiEvent::Resize(layout) => self.handle_resize(layout),
            UiEvent::CancelKey => {
                if !self.modal.close(&mut self.sync) {
                    self.navigation.close(&mut self.sync);
                }
            }
            UiEvent::NavToggle => {
                self.navigation.toggle(&mut self.sync);
            }
            UiEvent::NavLinkClicked(target) => {
                if self.is_mobile() {
                    self.navigation.close(&mut self.sync);
                }
                self.follow_link(&target);
            }
            UiEvent::AnchorClicked(target) => {
                self.follow_link(&target);
                self.navigation.close(&mut self.sync);
            }
            UiEvent::HashChanged(hash) => {
                if !hash.is_empty() {
                    self.scroll_to_target(&hash);
                }
            }
            UiEvent::Loaded { hash } => {
                if let Some(hash) = hash.filter(|hash| !hash.is_empty()) {
                    self.timers.schedule(
                        self.settings.hash_scroll_delay,
                        TimerTask::DeferredScroll(hash),
                    );
                }
            }
            UiEvent::ScrollToBottom => {
                self.sync.push(ViewUpdate::ScrollTo {
                    top: self.layout.document_height,
                });
            }
            UiEvent::ServiceToggled(index) => {
                if let Err(err) = self.services.toggle(index, &mut self.sync) {
                    tracing::warn!(%err, "service toggle ignored");
                }
            }
            UiEvent::FilterSelected(category) => {
                self.portfolio
                    .set_filter(&category, &mut self.timers, &mut self.sync);
            }
            UiEvent::PortfolioOpened(index) => self.open_portfolio_item(index),
            UiEvent::ModalBackdropClicked | UiEvent::ModalCloseClicked => {
                self.modal.close(&mut self.sync);
            }
            UiEvent::CarouselNext => self.carousel.next(&mut self.sync),
            UiEvent::CarouselPrevious => self.carousel.previous(&mut self.sync),
            UiEvent::CarouselDotClicked(index) => {
                if let Err(err) = self.carousel.go_to(index, &mut self.sync) {
                    tracing::warn!(%err, "carousel dot ignored");
                }
            }
            UiEvent::CarouselPointerEntered => {
                let is_mobile = self.is_mobile();
                self.carousel.pointer_entered(is_mobile, &mut self.timers);
            }
            UiEvent::CarouselPointerLeft => {
                let is_mobile = self.is_mobile();
                self.carousel.pointer_left(is_mobile, &mut self.timers);
            }
            UiEvent::TouchStarted(position) => self.carousel.touch_started(position),
            UiEvent::TouchMoved(position) => self.carousel.touch_moved(position),
            UiEvent::TouchEnded => self.carousel.touch_ended(&mut self.sync),
            UiEvent::SubjectChanged(subject) => {
                self.contact.subject_changed(&subject, &mut self.sync);
            }
            UiEvent::ContactSubmitted(fields) => self.submit_contact(fields),
            UiEvent::NotificationClosed(id) => {
                self.notifications
                    .dismiss(id, &mut self.timers, &mut self.sync);
            }
        }
    }

    pub(super) fn run_task(&mut self, task: TimerTask) {
        match task {
            TimerTask::Resize(layout) => self.handle_resize(layout),
            TimerTask::Carousel(timer) => {
                self.carousel
                    .on_timer(timer, &mut self.timers, &mut self.sync);
            }
            TimerTask::Portfolio(timer) => self.portfolio.on_timer(timer, &mut self.sync),
            TimerTask::Notification(timer) => {
                self.notifications
                    .on_timer(timer, &mut self.timers, &mut self.sync);
            }
            TimerTask::Contact(contact::Timer::Submit) => self.complete_contact(),
            TimerTask::DeferredScroll(hash) => {
                self.scroll_to_target(&hash);
            }
        }
    }

    pub(super) fn handle_scroll(&mut self, y: f32) {
        self.scroll_y = y;
        self.navigation
            .handle_scroll(y, &self.layout.sections, &mut self.sync);

        if self.hero_present {
            if let Some(offset) =
                parallax_offset(y, self.settings.parallax_factor, self.is_mobile())
            {
                self.sync.push(ViewUpdate::HeroParallax { offset });
            }
        }
        self.reveal_visible();
    }

    pub(super) fn handle_resize(&mut self, layout: Layout) {
        self.layout = layout;
        if !self.is_mobile() && self.navigation.close(&mut self.sync) {
            tracing::debug!(width = self.layout.viewport.width, "drawer closed on widening");
        }
        self.carousel
            .rebuild(self.layout.slide_count, &mut self.timers, &mut self.sync);
        self.reveal_visible();
    }

    /// Reveals targets that entered the viewport and were never revealed.
    pub(super) fn reveal_visible(&mut self) {
        let visible = scroll_spy::entered(
            self.scroll_y,
            self.layout.viewport.height,
            self.settings.reveal_margin,
            self.settings.reveal_threshold,
            &self.layout.reveal_targets,
        );
        for index in visible {
            if self.revealed.insert(index) {
                self.sync.push(ViewUpdate::Revealed(index));
            }
        }
    }

    /// Scrolls to `target`, warning when it does not exist.
    pub(super) fn scroll_to_target(&mut self, target: &str) -> bool {
        match self
            .navigation
            .scroll_to(target, &self.layout.sections, &mut self.sync)
        {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "scroll target not found");
                false
            }
        }
    }

    fn follow_link(&mut self, target: &str) {
        if target.starts_with('#') && self.scroll_to_target(target) {
            self.sync.push(ViewUpdate::HistoryPush(target.to_string()));
        }
    }

    fn open_portfolio_item(&mut self, index: usize) {
        match self.portfolio.item(index) {
            Some(item) => {
                let details = item.details.clone();
                self.modal.open(details, &mut self.sync);
            }
            None => {
                let err = Error::MissingTarget(format!("portfolio item {index}"));
                tracing::warn!(%err, "portfolio details not opened");
            }
        }
    }

    fn submit_contact(&mut self, fields: contact::ContactFields) {
        match self.contact.submit(fields, &mut self.timers, &mut self.sync) {
            Ok(_) => {}
            Err(Error::Validation(failure)) => {
                tracing::debug!(%failure, "contact form rejected");
                self.notify_key(failure.i18n_key(), Kind::Error);
            }
            Err(err) => tracing::warn!(%err, "contact submission not started"),
        }
    }

    fn complete_contact(&mut self) {
        let labels = self.mail_labels();
        match self.contact.complete(&labels, &mut self.sync) {
            Ok(()) => {
                self.notify_key("notification-form-sent", Kind::Success);
            }
            Err(err) => {
                tracing::warn!(%err, "contact submission failed");
                self.notify_key("notification-form-failed", Kind::Error);
            }
        }
    }

    fn mail_labels(&self) -> MailLabels {
        MailLabels {
            name: self.i18n.tr("mail-label-name"),
            email: self.i18n.tr("mail-label-email"),
            subject: self.i18n.tr("mail-label-subject"),
            message: self.i18n.tr("mail-label-message"),
        }
    }
}
