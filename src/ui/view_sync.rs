// SPDX-License-Identifier: MPL-2.0
//! Side effects requested by controllers.
//!
//! Controllers never touch the host's view directly. They push
//! [`ViewUpdate`]s into a [`ViewSync`] sink; the host drains the sink and
//! applies the updates, typically through [`ViewModel::apply`].

use crate::ui::modal::ModalContent;
use crate::ui::notifications::{Kind, NotificationId};
use std::collections::{BTreeMap, BTreeSet};

/// A single change the host must reflect.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    /// Page scrolling locked or released.
    BodyScrollLock(bool),
    /// Mobile drawer shown or hidden (also flips the toggle's expanded flag).
    Drawer { open: bool },
    /// Navbar switched to or from its compact, scrolled style.
    NavbarScrolled(bool),
    /// Nav link matching this section id becomes the only active one.
    ActiveNavLink(Option<String>),
    /// Vertical translation of the hero image, in pixels.
    HeroParallax { offset: f32 },
    /// Reveal target at this index plays its entrance animation. Sent once
    /// per element.
    Revealed(usize),
    /// Smooth scroll to an absolute document offset.
    ScrollTo { top: f32 },
    /// New history entry with this hash (including the leading `#`).
    HistoryPush(String),
    /// Carousel track translation, in percent of the track width.
    CarouselTrack { offset_percent: i32 },
    /// Dots were rebuilt.
    CarouselDots { count: usize, active: usize },
    /// Active dot moved.
    CarouselDotActive(usize),
    /// Filter button for this category becomes the only active one.
    FilterActive(String),
    PortfolioItem { index: usize, visible: bool },
    ModalContent(ModalContent),
    ModalVisible(bool),
    /// Move keyboard focus to the modal's image region.
    FocusModalImage,
    ServicePanel { index: usize, expanded: bool },
    NotificationMounted {
        id: NotificationId,
        kind: Kind,
        message: String,
    },
    NotificationEntered(NotificationId),
    NotificationLeaving(NotificationId),
    NotificationRemoved(NotificationId),
    FileUploadVisible(bool),
    FileInputCleared,
    /// Submit button disabled with a busy label, or restored.
    SubmitBusy(bool),
    FormReset,
    /// Hand a URL to the platform (mail client).
    OpenUrl(String),
}

/// Ordered buffer of pending [`ViewUpdate`]s.
#[derive(Debug, Default)]
pub struct ViewSync {
    updates: Vec<ViewUpdate>,
}

impl ViewSync {
    pub fn push(&mut self, update: ViewUpdate) {
        self.updates.push(update);
    }

    /// Takes every pending update, oldest first.
    pub fn drain(&mut self) -> Vec<ViewUpdate> {
        std::mem::take(&mut self.updates)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewUpdate> {
        self.updates.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.updates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

/// Notification as the host renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct MountedNotification {
    pub id: NotificationId,
    pub kind: Kind,
    pub message: String,
    pub entered: bool,
    pub leaving: bool,
}

/// Host-side mirror of everything the controllers can change.
///
/// The preview shell renders from this model; tests use it to check the
/// visible outcome of a sequence of events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    pub scroll_locked: bool,
    pub drawer_open: bool,
    pub navbar_scrolled: bool,
    pub active_link: Option<String>,
    pub hero_offset: f32,
    pub revealed: BTreeSet<usize>,
    pub scroll_top: f32,
    pub history: Vec<String>,
    pub track_offset_percent: i32,
    pub dot_count: usize,
    pub active_dot: usize,
    pub active_filter: Option<String>,
    pub portfolio_visible: BTreeMap<usize, bool>,
    pub modal_content: Option<ModalContent>,
    pub modal_visible: bool,
    pub modal_focused: bool,
    pub expanded_services: BTreeMap<usize, bool>,
    pub notifications: Vec<MountedNotification>,
    pub file_upload_visible: bool,
    pub file_input_clears: usize,
    pub submit_busy: bool,
    pub form_resets: usize,
    pub opened_urls: Vec<String>,
}

impl ViewModel {
    pub fn apply_all<'a>(&mut self, updates: impl IntoIterator<Item = &'a ViewUpdate>) {
        for update in updates {
            self.apply(update);
        }
    }

    pub fn apply(&mut self, update: &ViewUpdate) {
        match update {
            ViewUpdate::BodyScrollLock(locked) => self.scroll_locked = *locked,
            ViewUpdate::Drawer { open } => self.drawer_open = *open,
            ViewUpdate::NavbarScrolled(scrolled) => self.navbar_scrolled = *scrolled,
            ViewUpdate::ActiveNavLink(link) => self.active_link.clone_from(link),
            ViewUpdate::HeroParallax { offset } => self.hero_offset = *offset,
            ViewUpdate::Revealed(index) => {
                self.revealed.insert(*index);
            }
            ViewUpdate::ScrollTo { top } => self.scroll_top = *top,
            ViewUpdate::HistoryPush(hash) => self.history.push(hash.clone()),
            ViewUpdate::CarouselTrack { offset_percent } => {
                self.track_offset_percent = *offset_percent;
            }
            ViewUpdate::CarouselDots { count, active } => {
                self.dot_count = *count;
                self.active_dot = *active;
            }
            ViewUpdate::CarouselDotActive(index) => self.active_dot = *index,
            ViewUpdate::FilterActive(category) => self.active_filter = Some(category.clone()),
            ViewUpdate::PortfolioItem { index, visible } => {
                self.portfolio_visible.insert(*index, *visible);
            }
            ViewUpdate::ModalContent(content) => self.modal_content = Some(content.clone()),
            ViewUpdate::ModalVisible(visible) => {
                self.modal_visible = *visible;
                if !visible {
                    self.modal_focused = false;
                }
            }
            ViewUpdate::FocusModalImage => self.modal_focused = true,
            ViewUpdate::ServicePanel { index, expanded } => {
                self.expanded_services.insert(*index, *expanded);
            }
            ViewUpdate::NotificationMounted { id, kind, message } => {
                self.notifications.push(MountedNotification {
                    id: *id,
                    kind: *kind,
                    message: message.clone(),
                    entered: false,
                    leaving: false,
                });
            }
            ViewUpdate::NotificationEntered(id) => {
                if let Some(n) = self.notification_mut(*id) {
                    n.entered = true;
                }
            }
            ViewUpdate::NotificationLeaving(id) => {
                if let Some(n) = self.notification_mut(*id) {
                    n.entered = false;
                    n.leaving = true;
                }
            }
            ViewUpdate::NotificationRemoved(id) => {
                self.notifications.retain(|n| n.id != *id);
            }
            ViewUpdate::FileUploadVisible(visible) => self.file_upload_visible = *visible,
            ViewUpdate::FileInputCleared => self.file_input_clears += 1,
            ViewUpdate::SubmitBusy(busy) => self.submit_busy = *busy,
            ViewUpdate::FormReset => self.form_resets += 1,
            ViewUpdate::OpenUrl(url) => self.opened_urls.push(url.clone()),
        }
    }

    /// Ids of portfolio items currently shown, in index order.
    #[must_use]
    pub fn visible_items(&self) -> Vec<usize> {
        self.portfolio_visible
            .iter()
            .filter_map(|(index, visible)| visible.then_some(*index))
            .collect()
    }

    fn notification_mut(&mut self, id: NotificationId) -> Option<&mut MountedNotification> {
        self.notifications.iter_mut().find(|n| n.id == id)
    }
}
