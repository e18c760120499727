// SPDX-License-Identifier: MPL-2.0
//! Host events and their routing.

use crate::page::Layout;
use crate::ui::contact::ContactFields;
use crate::ui::notifications::NotificationId;
use iced::Point;

/// Everything the host can report to the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Page scrolled to this vertical offset.
    Scroll { y: f32 },
    /// Viewport changed; carries the new geometry.
    Resize(Layout),
    /// Escape pressed.
    CancelKey,
    NavToggle,
    /// Click on a navbar link (`#id`).
    NavLinkClicked(String),
    /// Click on any other in-page anchor (`#id`).
    AnchorClicked(String),
    HashChanged(String),
    /// Page finished loading with this location hash, if any.
    Loaded { hash: Option<String> },
    ScrollToBottom,
    ServiceToggled(usize),
    FilterSelected(String),
    /// Details button of a portfolio item.
    PortfolioOpened(usize),
    ModalBackdropClicked,
    ModalCloseClicked,
    CarouselNext,
    CarouselPrevious,
    CarouselDotClicked(usize),
    CarouselPointerEntered,
    CarouselPointerLeft,
    TouchStarted(Point),
    TouchMoved(Point),
    TouchEnded,
    SubjectChanged(String),
    ContactSubmitted(ContactFields),
    NotificationClosed(NotificationId),
}

/// How an event reaches its handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Leading-edge throttle on the scroll limiter.
    ThrottledScroll,
    /// Debounced on the resize limiter.
    DebouncedResize,
    /// Handled immediately.
    Direct,
}

/// Classifies an event.
#[must_use]
pub fn route(event: &UiEvent) -> Route {
    match event {
        UiEvent::Scroll { .. } => Route::ThrottledScroll,
        UiEvent::Resize(_) => Route::DebouncedResize,
        _ => Route::Direct,
    }
}
