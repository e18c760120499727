// SPDX-License-Identifier: MPL-2.0
//! What the host page provides to the coordinator.
//!
//! A [`Page`] is resolved once at construction. Components whose elements are
//! [`Lookup::Missing`] stay inert for the lifetime of the coordinator.

use crate::ui::portfolio::PortfolioItem;
use crate::ui::scroll_spy::Section;
use iced::Size;

/// Result of looking an element up in the host page.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    Missing { selector: &'static str },
}

impl<T> Lookup<T> {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    #[must_use]
    pub fn found(&self) -> Option<&T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Missing { .. } => None,
        }
    }

    /// Same as [`is_found`](Self::is_found), logging a warning naming
    /// `component` when the element is missing.
    pub fn present_for(&self, component: &str) -> bool {
        match self {
            Lookup::Found(_) => true,
            Lookup::Missing { selector } => {
                tracing::warn!(component, selector, "element not found, component disabled");
                false
            }
        }
    }
}

impl Lookup<()> {
    /// Element exists and carries no data.
    pub const FOUND: Self = Lookup::Found(());
}

/// Geometry snapshot of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub viewport: Size,
    /// Sections with an id, in document order.
    pub sections: Vec<Section>,
    pub document_height: f32,
    /// Slides currently in the carousel track.
    pub slide_count: usize,
    /// Elements that animate in the first time they scroll into view.
    pub reveal_targets: Vec<Section>,
}

impl Layout {
    #[must_use]
    pub fn is_mobile(&self, breakpoint: f32) -> bool {
        self.viewport.width <= breakpoint
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            viewport: Size::new(1280.0, 800.0),
            sections: Vec::new(),
            document_height: 0.0,
            slide_count: 0,
            reveal_targets: Vec::new(),
        }
    }
}

/// Contact form markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactMarkup {
    pub has_file_upload: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub layout: Layout,
    pub navbar: Lookup<()>,
    /// Mobile menu and its toggle button.
    pub drawer: Lookup<()>,
    pub hero_image: Lookup<()>,
    pub carousel_track: Lookup<()>,
    pub modal: Lookup<()>,
    pub contact_form: Lookup<ContactMarkup>,
    pub portfolio: Vec<PortfolioItem>,
    pub service_count: usize,
}

impl Page {
    /// A page where every element is present.
    #[must_use]
    pub fn complete(layout: Layout) -> Self {
        Self {
            layout,
            navbar: Lookup::FOUND,
            drawer: Lookup::FOUND,
            hero_image: Lookup::FOUND,
            carousel_track: Lookup::FOUND,
            modal: Lookup::FOUND,
            contact_form: Lookup::Found(ContactMarkup {
                has_file_upload: true,
            }),
            portfolio: Vec::new(),
            service_count: 0,
        }
    }

    /// A page with no interactive elements at all.
    #[must_use]
    pub fn empty(layout: Layout) -> Self {
        Self {
            layout,
            navbar: Lookup::Missing { selector: "#navbar" },
            drawer: Lookup::Missing { selector: "#nav-menu" },
            hero_image: Lookup::Missing { selector: ".hero-image" },
            carousel_track: Lookup::Missing { selector: "#carouselTrack" },
            modal: Lookup::Missing { selector: "#portfolio-modal" },
            contact_form: Lookup::Missing { selector: "#contact-form" },
            portfolio: Vec::new(),
            service_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_accessors() {
        let found = Lookup::Found(3);
        let missing: Lookup<i32> = Lookup::Missing { selector: "#x" };
        assert_eq!(found.found(), Some(&3));
        assert!(found.present_for("test"));
        assert!(!missing.is_found());
        assert!(!missing.present_for("test"));
    }

    #[test]
    fn breakpoint_is_inclusive() {
        let mut layout = Layout::default();
        layout.viewport = Size::new(768.0, 600.0);
        assert!(layout.is_mobile(768.0));
        layout.viewport = Size::new(769.0, 600.0);
        assert!(!layout.is_mobile(768.0));
    }
}
