// SPDX-License-Identifier: MPL-2.0
//! Navbar and mobile drawer state.
//!
//! The drawer is toggled by the hamburger button and closed by link clicks,
//! the cancel key and widening the viewport. Scrolling drives the navbar's
//! compact style and the active link.

use crate::error::{Error, Result};
use crate::ui::scroll_spy::{compute_active_section, Section};
use crate::ui::view_sync::{ViewSync, ViewUpdate};

#[derive(Debug, Clone)]
pub struct Navigation {
    /// Drawer and toggle button exist on the page.
    drawer_present: bool,
    is_open: bool,
    scrolled: bool,
    active_section: Option<String>,
    scrolled_threshold: f32,
    lookahead: f32,
    navbar_offset: f32,
}

impl Navigation {
    #[must_use]
    pub fn new(
        drawer_present: bool,
        scrolled_threshold: f32,
        lookahead: f32,
        navbar_offset: f32,
    ) -> Self {
        Self {
            drawer_present,
            is_open: false,
            scrolled: false,
            active_section: None,
            scrolled_threshold,
            lookahead,
            navbar_offset,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Flips the drawer. Returns the new state.
    pub fn toggle(&mut self, sync: &mut ViewSync) -> bool {
        if !self.drawer_present {
            return false;
        }
        self.is_open = !self.is_open;
        sync.push(ViewUpdate::Drawer { open: self.is_open });
        tracing::debug!(open = self.is_open, "drawer toggled");
        self.is_open
    }

    /// Closes the drawer. Returns `true` if it was open.
    pub fn close(&mut self, sync: &mut ViewSync) -> bool {
        if !self.is_open {
            return false;
        }
        self.is_open = false;
        sync.push(ViewUpdate::Drawer { open: false });
        tracing::debug!("drawer closed");
        true
    }

    /// Updates navbar style and active link for a new scroll offset.
    pub fn handle_scroll(&mut self, scroll_y: f32, sections: &[Section], sync: &mut ViewSync) {
        let scrolled = scroll_y > self.scrolled_threshold;
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            sync.push(ViewUpdate::NavbarScrolled(scrolled));
        }

        let active = compute_active_section(scroll_y, self.lookahead, sections);
        if active != self.active_section.as_deref() {
            self.active_section = active.map(str::to_owned);
            sync.push(ViewUpdate::ActiveNavLink(self.active_section.clone()));
        }
    }

    /// Scroll offset that brings `target` (`#id`) just below the fixed navbar.
    pub fn scroll_target(&self, target: &str, sections: &[Section]) -> Result<f32> {
        let id = target.strip_prefix('#').unwrap_or(target);
        sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| section.top - self.navbar_offset)
            .ok_or_else(|| Error::MissingTarget(format!("#{id}")))
    }

    /// Emits a smooth scroll to `target`.
    pub fn scroll_to(&self, target: &str, sections: &[Section], sync: &mut ViewSync) -> Result<()> {
        let top = self.scroll_target(target, sections)?;
        sync.push(ViewUpdate::ScrollTo { top });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigation() -> Navigation {
        Navigation::new(true, 100.0, 150.0, 80.0)
    }

    fn sections() -> Vec<Section> {
        vec![
            Section::new("home", 0.0, 700.0),
            Section::new("about", 700.0, 700.0),
        ]
    }

    #[test]
    fn toggle_flips_and_emits() {
        let mut nav = navigation();
        let mut sync = ViewSync::default();
        assert!(nav.toggle(&mut sync));
        assert!(!nav.toggle(&mut sync));
        assert_eq!(
            sync.drain(),
            vec![
                ViewUpdate::Drawer { open: true },
                ViewUpdate::Drawer { open: false }
            ]
        );
    }

    #[test]
    fn close_is_idempotent() {
        let mut nav = navigation();
        let mut sync = ViewSync::default();
        assert!(!nav.close(&mut sync));
        assert!(sync.is_empty());

        nav.toggle(&mut sync);
        sync.drain();
        assert!(nav.close(&mut sync));
        assert!(!nav.close(&mut sync));
        assert_eq!(sync.len(), 1);
    }

    #[test]
    fn missing_drawer_makes_toggle_inert() {
        let mut nav = Navigation::new(false, 100.0, 150.0, 80.0);
        let mut sync = ViewSync::default();
        assert!(!nav.toggle(&mut sync));
        assert!(!nav.is_open());
        assert!(sync.is_empty());
    }

    #[test]
    fn scrolled_flag_emitted_only_on_change() {
        let mut nav = navigation();
        let mut sync = ViewSync::default();
        let sections = sections();

        nav.handle_scroll(50.0, &sections, &mut sync);
        // Active link appears, navbar unchanged.
        assert_eq!(
            sync.drain(),
            vec![ViewUpdate::ActiveNavLink(Some("home".into()))]
        );

        nav.handle_scroll(150.0, &sections, &mut sync);
        nav.handle_scroll(200.0, &sections, &mut sync);
        assert_eq!(sync.drain(), vec![ViewUpdate::NavbarScrolled(true)]);

        nav.handle_scroll(100.0, &sections, &mut sync);
        assert_eq!(sync.drain(), vec![ViewUpdate::NavbarScrolled(false)]);
    }

    #[test]
    fn active_link_follows_sections() {
        let mut nav = navigation();
        let mut sync = ViewSync::default();
        let sections = sections();

        nav.handle_scroll(600.0, &sections, &mut sync);
        assert_eq!(nav.active_section(), Some("about"));
        nav.handle_scroll(5000.0, &sections, &mut sync);
        assert_eq!(nav.active_section(), None);
        assert!(sync.iter().any(|u| *u == ViewUpdate::ActiveNavLink(None)));
    }

    #[test]
    fn scroll_to_accounts_for_navbar() {
        let nav = navigation();
        let mut sync = ViewSync::default();
        nav.scroll_to("#about", &sections(), &mut sync).unwrap();
        assert_eq!(sync.drain(), vec![ViewUpdate::ScrollTo { top: 620.0 }]);
    }

    #[test]
    fn scroll_to_unknown_section_fails() {
        let nav = navigation();
        let mut sync = ViewSync::default();
        let err = nav.scroll_to("#missing", &sections(), &mut sync).unwrap_err();
        assert_eq!(err, Error::MissingTarget("#missing".into()));
        assert!(sync.is_empty());
    }
}
