// SPDX-License-Identifier: MPL-2.0
//! Preview shell hosting the coordinator in an iced window.
//!
//! The `App` plays the part of the host page: it forwards widget and native
//! events to the [`Coordinator`], advances its clock from a tick
//! subscription and renders the [`ViewModel`] the coordinator keeps
//! updated.

mod demo;
mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, paths};
use crate::coordinator::{Coordinator, UiEvent};
use crate::i18n::I18n;
use crate::timing::Timestamp;
use crate::ui::contact::ContactFields;
use crate::ui::notifications::Kind;
use crate::ui::view_sync::{ViewModel, ViewUpdate};
use iced::{window, Size, Subscription, Task, Theme};
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root application state.
pub struct App {
    coordinator: Coordinator,
    model: ViewModel,
    /// Origin of the coordinator's clock.
    started: Instant,
    /// Contact form as typed.
    form: ContactFields,
    /// Form resets already applied to `form`.
    form_resets_seen: usize,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("now", &self.coordinator.now())
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        if paths::init_cli_override(flags.config_dir.clone()) {
            tracing::debug!(dir = ?flags.config_dir, "using config directory override");
        }
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let settings = config.settings();
        let page = demo::page(Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT));

        let mut app = Self::with_coordinator(
            Coordinator::new(page, settings, i18n),
            Instant::now(),
        );
        if let Some(key) = config_warning {
            app.coordinator.notify_key(&key, Kind::Error);
        }
        app.coordinator.dispatch(UiEvent::Loaded { hash: None });
        app.sync_view();

        (app, Task::none())
    }

    /// Wraps a coordinator whose clock origin is `started`.
    fn with_coordinator(coordinator: Coordinator, started: Instant) -> Self {
        Self {
            coordinator,
            model: ViewModel::default(),
            started,
            form: ContactFields::default(),
            form_resets_seen: 0,
        }
    }

    fn title(&self) -> String {
        self.coordinator.i18n().tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.coordinator.has_pending_timers()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = match &message {
            Message::Tick(at) => *at,
            _ => Instant::now(),
        };
        self.update_at(message, now)
    }

    /// Handles `message` as if it arrived at `now`.
    ///
    /// The coordinator's clock is brought up to `now` first, so timers
    /// scheduled by the message are measured from the moment it arrived
    /// even when no tick ran during an idle stretch.
    fn update_at(&mut self, message: Message, now: Instant) -> Task<Message> {
        let elapsed = now.saturating_duration_since(self.started);
        self.coordinator.advance_to(Timestamp::from_elapsed(elapsed));

        match message {
            Message::Ui(event) => self.coordinator.dispatch(event),
            Message::WindowResized(size) => {
                self.coordinator
                    .dispatch(UiEvent::Resize(demo::layout(size)));
            }
            Message::NameChanged(value) => self.form.name = value,
            Message::EmailChanged(value) => self.form.email = value,
            Message::SubjectChanged(value) => {
                self.form.subject.clone_from(&value);
                self.coordinator.dispatch(UiEvent::SubjectChanged(value));
            }
            Message::MessageChanged(value) => self.form.message = value,
            Message::SubmitPressed => {
                self.coordinator
                    .dispatch(UiEvent::ContactSubmitted(self.form.clone()));
            }
            Message::Tick(_) => {}
        }
        self.sync_view();
        Task::none()
    }

    fn view(&self) -> iced::Element<'_, Message> {
        view::view(view::ViewContext {
            model: &self.model,
            i18n: self.coordinator.i18n(),
            form: &self.form,
            portfolio: self.coordinator.portfolio().items(),
            current_slide: self.coordinator.carousel().current(),
        })
    }

    /// Applies pending view updates to the model.
    fn sync_view(&mut self) {
        for update in self.coordinator.drain_updates() {
            if let ViewUpdate::OpenUrl(url) = &update {
                tracing::info!(%url, "mail client hand-off");
            }
            self.model.apply(&update);
        }
        if self.model.form_resets != self.form_resets_seen {
            self.form_resets_seen = self.model.form_resets;
            self.form = ContactFields::default();
        }
    }
}
