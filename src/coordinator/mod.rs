// SPDX-License-Identifier: MPL-2.0
//! Composition root of the page controllers.
//!
//! The [`Coordinator`] owns one instance of every controller, the single
//! timer queue and the view-update sink. The host feeds it [`UiEvent`]s and
//! clock advances, then drains the resulting [`ViewUpdate`]s.
//!
//! Cross-component rules live here:
//!
//! - the cancel key closes the modal first, the drawer otherwise
//! - widening the viewport past the mobile breakpoint closes the drawer
//! - page scrolling is locked while the drawer or the modal is open
//! - reveal targets animate in once, the first time they scroll into view

mod event;
mod handlers;
mod task;

pub use event::{route, Route, UiEvent};
pub use task::TimerTask;

use crate::config::Settings;
use crate::i18n::I18n;
use crate::page::{Layout, Page};
use crate::timing::{RateLimiter, TimerQueue, Timestamp};
use crate::ui::carousel::Carousel;
use crate::ui::contact::ContactForm;
use crate::ui::modal::Modal;
use crate::ui::navigation::Navigation;
use crate::ui::notifications::{self, Kind, NotificationId};
use crate::ui::portfolio::Portfolio;
use crate::ui::services::Services;
use crate::ui::view_sync::{ViewSync, ViewUpdate};
use std::collections::BTreeSet;
use std::time::Duration;

#[derive(Debug)]
pub struct Coordinator {
    settings: Settings,
    i18n: I18n,
    layout: Layout,
    scroll_y: f32,
    hero_present: bool,
    /// Reveal targets that already played their entrance.
    revealed: BTreeSet<usize>,
    timers: TimerQueue<TimerTask>,
    sync: ViewSync,
    scroll_limiter: RateLimiter,
    resize_limiter: RateLimiter,
    navigation: Navigation,
    carousel: Carousel,
    portfolio: Portfolio,
    modal: Modal,
    services: Services,
    contact: ContactForm,
    notifications: notifications::Manager,
    /// Last emitted body-scroll lock state.
    scroll_locked: bool,
}

impl Coordinator {
    /// Wires every controller to `page`. Components whose elements are
    /// missing are logged once and stay inert.
    #[must_use]
    pub fn new(page: Page, settings: Settings, i18n: I18n) -> Self {
        let Page {
            layout,
            navbar,
            drawer,
            hero_image,
            carousel_track,
            modal,
            contact_form,
            portfolio,
            service_count,
        } = page;

        // The navbar only carries styling; its absence is reported but
        // does not disable scroll tracking.
        navbar.present_for("navbar");
        let navigation = Navigation::new(
            drawer.present_for("navigation drawer"),
            settings.scrolled_threshold,
            settings.spy_lookahead,
            settings.navbar_offset,
        );
        let carousel = Carousel::new(
            carousel_track.present_for("carousel"),
            settings.autoplay,
            settings.autoplay_interval,
            settings.swipe_threshold,
        );
        let contact = ContactForm::new(
            contact_form.present_for("contact form"),
            contact_form.found().is_some_and(|markup| markup.has_file_upload),
            settings.submit_delay,
            settings.recipient.clone(),
            settings.subject_prefix.clone(),
        );

        let mut coordinator = Self {
            scroll_limiter: RateLimiter::throttle(settings.scroll_throttle),
            resize_limiter: RateLimiter::debounce(settings.resize_debounce),
            navigation,
            carousel,
            portfolio: Portfolio::new(portfolio, settings.filter_stagger),
            modal: Modal::new(modal.present_for("portfolio modal")),
            services: Services::new(service_count),
            contact,
            notifications: notifications::Manager::new(
                settings.notification_auto_hide,
                settings.notification_exit,
            ),
            hero_present: hero_image.is_found(),
            revealed: BTreeSet::new(),
            layout,
            scroll_y: 0.0,
            timers: TimerQueue::new(),
            sync: ViewSync::default(),
            scroll_locked: false,
            settings,
            i18n,
        };

        coordinator.carousel.rebuild(
            coordinator.layout.slide_count,
            &mut coordinator.timers,
            &mut coordinator.sync,
        );
        coordinator.reveal_visible();
        tracing::debug!(
            sections = coordinator.layout.sections.len(),
            slides = coordinator.layout.slide_count,
            "coordinator ready"
        );
        coordinator
    }

    /// Routes one host event to its handler.
    pub fn dispatch(&mut self, event: UiEvent) {
        match (route(&event), event) {
            (Route::ThrottledScroll, UiEvent::Scroll { y }) => {
                if let Some(y) = self.scroll_limiter.schedule_throttled(&mut self.timers, y) {
                    self.handle_scroll(y);
                }
            }
            (Route::DebouncedResize, UiEvent::Resize(layout)) => {
                self.resize_limiter
                    .schedule_debounced(&mut self.timers, TimerTask::Resize(layout));
            }
            (_, event) => self.handle_event(event),
        }
        self.reconcile_scroll_lock();
    }

    /// Moves the clock to `until`, running every timer that comes due in
    /// order. Timers scheduled by a callback run in the same call when they
    /// fall due before `until`.
    pub fn advance_to(&mut self, until: Timestamp) {
        while let Some(fired) = self.timers.pop_due(until) {
            self.run_task(fired.task);
            self.reconcile_scroll_lock();
        }
        self.timers.advance_to(until);
    }

    pub fn advance_by(&mut self, delta: Duration) {
        self.advance_to(self.timers.now() + delta);
    }

    /// Takes the view updates produced so far.
    pub fn drain_updates(&mut self) -> Vec<ViewUpdate> {
        self.sync.drain()
    }

    /// Cancels every pending timer. Controllers keep their state, except
    /// that a running submission is dropped and its button restored.
    pub fn teardown(&mut self) {
        self.carousel.pause_autoplay(&mut self.timers);
        self.contact.cancel(&mut self.timers, &mut self.sync);
        self.portfolio.cancel_reveals(&mut self.timers);
        self.notifications
            .cancel_timers(&mut self.timers, &mut self.sync);
        self.scroll_limiter.cancel(&mut self.timers);
        self.resize_limiter.cancel(&mut self.timers);
        self.timers.clear();
        tracing::debug!("coordinator torn down");
    }

    /// Scrolls to the section with this id.
    pub fn scroll_to_section(&mut self, id: &str) {
        self.scroll_to_target(&format!("#{id}"));
    }

    pub fn filter_portfolio(&mut self, category: &str) {
        self.portfolio
            .set_filter(category, &mut self.timers, &mut self.sync);
    }

    /// `"next"` or `"prev"`; anything else is ignored with a warning.
    pub fn update_carousel(&mut self, direction: &str) {
        if let Err(err) = self.carousel.update(direction, &mut self.sync) {
            tracing::warn!(%err, "carousel update ignored");
        }
    }

    /// Shows a notification, replacing the current one.
    pub fn notify(&mut self, message: impl Into<String>, kind: Kind) -> NotificationId {
        self.notifications
            .show(message, kind, &mut self.timers, &mut self.sync)
    }

    /// Shows the translation of `key` as a notification.
    pub fn notify_key(&mut self, key: &str, kind: Kind) -> NotificationId {
        let message = self.i18n.tr(key);
        self.notify(message, kind)
    }

    #[must_use]
    pub fn now(&self) -> Timestamp {
        self.timers.now()
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Timestamp> {
        self.timers.next_due()
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.layout.is_mobile(self.settings.mobile_breakpoint)
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    #[must_use]
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    #[must_use]
    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    #[must_use]
    pub fn services(&self) -> &Services {
        &self.services
    }

    #[must_use]
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    fn reconcile_scroll_lock(&mut self) {
        let locked = self.navigation.is_open() || self.modal.is_open();
        if locked != self.scroll_locked {
            self.scroll_locked = locked;
            self.sync.push(ViewUpdate::BodyScrollLock(locked));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::page::Lookup;
    use crate::ui::contact::ContactFields;
    use crate::ui::modal::ModalContent;
    use crate::ui::portfolio::PortfolioItem;
    use crate::ui::scroll_spy::Section;
    use iced::Size;

    fn layout(width: f32) -> Layout {
        Layout {
            viewport: Size::new(width, 800.0),
            sections: vec![
                Section::new("home", 0.0, 800.0),
                Section::new("services", 800.0, 900.0),
                Section::new("contact", 1700.0, 600.0),
            ],
            document_height: 2300.0,
            slide_count: 3,
            reveal_targets: Vec::new(),
        }
    }

    fn coordinator(width: f32) -> Coordinator {
        let mut page = Page::complete(layout(width));
        page.portfolio = vec![
            PortfolioItem::new("civil", ModalContent::new("a.webp", "Bridge", "Steel")),
            PortfolioItem::new("energy", ModalContent::new("b.webp", "Plant", "Solar")),
        ];
        page.service_count = 2;
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let mut coordinator = Coordinator::new(page, Settings::default(), i18n);
        coordinator.drain_updates();
        coordinator
    }

    #[test]
    fn construction_builds_carousel_and_autoplay() {
        let page = Page::complete(layout(1280.0));
        let mut coordinator = Coordinator::new(page, Settings::default(), I18n::default());
        let updates = coordinator.drain_updates();
        assert!(updates.contains(&ViewUpdate::CarouselDots {
            count: 3,
            active: 0
        }));
        assert!(coordinator.carousel().is_autoplaying());
    }

    #[test]
    fn cancel_key_closes_modal_before_drawer() {
        let mut c = coordinator(600.0);
        c.dispatch(UiEvent::NavToggle);
        c.dispatch(UiEvent::PortfolioOpened(0));
        assert!(c.is_scroll_locked());

        c.dispatch(UiEvent::CancelKey);
        assert!(!c.modal().is_open());
        assert!(c.navigation().is_open());
        assert!(c.is_scroll_locked());

        c.dispatch(UiEvent::CancelKey);
        assert!(!c.navigation().is_open());
        assert!(!c.is_scroll_locked());
    }

    #[test]
    fn scroll_lock_is_emitted_on_change_only() {
        let mut c = coordinator(600.0);
        c.dispatch(UiEvent::NavToggle);
        c.dispatch(UiEvent::PortfolioOpened(1));
        c.dispatch(UiEvent::ModalCloseClicked);
        c.dispatch(UiEvent::NavToggle);

        let locks: Vec<_> = c
            .drain_updates()
            .into_iter()
            .filter(|u| matches!(u, ViewUpdate::BodyScrollLock(_)))
            .collect();
        assert_eq!(
            locks,
            vec![
                ViewUpdate::BodyScrollLock(true),
                ViewUpdate::BodyScrollLock(false)
            ]
        );
    }

    #[test]
    fn scroll_is_throttled_leading_edge() {
        let mut c = coordinator(1280.0);
        c.dispatch(UiEvent::Scroll { y: 200.0 });
        c.dispatch(UiEvent::Scroll { y: 50.0 });
        assert!(c.navigation().is_scrolled());
        assert_eq!(c.scroll_y(), 200.0);

        c.advance_by(Duration::from_millis(16));
        c.dispatch(UiEvent::Scroll { y: 50.0 });
        assert!(!c.navigation().is_scrolled());
    }

    #[test]
    fn resize_is_debounced_and_widening_closes_drawer() {
        let mut c = coordinator(600.0);
        c.dispatch(UiEvent::NavToggle);
        c.dispatch(UiEvent::Resize(layout(700.0)));
        c.dispatch(UiEvent::Resize(layout(1200.0)));
        assert!(c.navigation().is_open());

        c.advance_by(Duration::from_millis(249));
        assert!(c.navigation().is_open());
        c.advance_by(Duration::from_millis(1));
        assert!(!c.navigation().is_open());
        assert!(!c.is_mobile());
        assert!(!c.is_scroll_locked());
    }

    #[test]
    fn resize_does_not_duplicate_autoplay() {
        let mut c = coordinator(1280.0);
        let before = c.pending_timers();
        c.dispatch(UiEvent::Resize(layout(1000.0)));
        c.advance_by(Duration::from_millis(300));
        assert_eq!(c.pending_timers(), before);
    }

    #[test]
    fn teardown_cancels_everything() {
        let mut c = coordinator(1280.0);
        c.filter_portfolio("civil");
        c.notify("hi", Kind::Info);
        assert!(c.has_pending_timers());
        c.teardown();
        assert!(!c.has_pending_timers());
        assert!(!c.carousel().is_autoplaying());
        assert_eq!(c.portfolio().pending_reveals(&c.timers), 0);
        let visible = c.notifications().visible().expect("toast kept");
        assert!(!visible.auto_hide_pending());
    }

    #[test]
    fn teardown_restores_submit_button() {
        let mut c = coordinator(1280.0);
        c.dispatch(UiEvent::ContactSubmitted(ContactFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "preventivo".into(),
            message: String::new(),
        }));
        assert!(c.contact().is_busy());
        c.drain_updates();

        c.teardown();
        assert!(!c.contact().is_busy());
        assert_eq!(c.drain_updates(), vec![ViewUpdate::SubmitBusy(false)]);
    }

    #[test]
    fn missing_components_are_inert() {
        let mut page = Page::empty(layout(600.0));
        page.modal = Lookup::Missing {
            selector: "#portfolio-modal",
        };
        let mut c = Coordinator::new(page, Settings::default(), I18n::default());
        c.dispatch(UiEvent::NavToggle);
        c.dispatch(UiEvent::CarouselNext);
        c.dispatch(UiEvent::PortfolioOpened(0));
        assert!(!c.navigation().is_open());
        assert!(!c.has_pending_timers());
        assert!(c.drain_updates().is_empty());
    }
}
