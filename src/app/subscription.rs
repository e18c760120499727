// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the preview shell.
//!
//! Native keyboard, window and touch events are translated into messages;
//! a tick drives the coordinator's clock while timers are pending.

use super::Message;
use crate::coordinator::UiEvent;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, touch, window, Event, Subscription};
use std::time::Duration;

/// Tick period while timers are pending; matches the scroll throttle window.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Routes native events that have no widget of their own.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::Ui(UiEvent::CancelKey)),
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Touch(touch) if status == event::Status::Ignored => translate_touch(touch),
        _ => None,
    })
}

fn translate_touch(event: touch::Event) -> Option<Message> {
    let ui = match event {
        touch::Event::FingerPressed { position, .. } => UiEvent::TouchStarted(position),
        touch::Event::FingerMoved { position, .. } => UiEvent::TouchMoved(position),
        touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. } => UiEvent::TouchEnded,
    };
    Some(Message::Ui(ui))
}

/// Ticks only while the coordinator has something scheduled.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
