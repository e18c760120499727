// SPDX-License-Identifier: MPL-2.0
//! Scroll-position derived state.
//!
//! Pure functions mapping a scroll offset to the section being read, to the
//! hero parallax offset and to the elements that have scrolled into view.

/// A page section in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Whether `y` falls inside `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Returns the id of the section containing `scroll_y + lookahead`.
///
/// Sections are given in document order. When spans overlap the last
/// matching section wins.
#[must_use]
pub fn compute_active_section<'a>(
    scroll_y: f32,
    lookahead: f32,
    sections: &'a [Section],
) -> Option<&'a str> {
    let probe = scroll_y + lookahead;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(probe))
        .map(|section| section.id.as_str())
}

/// Hero image translation for a scroll offset, or `None` on mobile
/// viewports where parallax is disabled.
#[must_use]
pub fn parallax_offset(scroll_y: f32, factor: f32, is_mobile: bool) -> Option<f32> {
    (!is_mobile).then_some(scroll_y * factor)
}

/// Indices of `targets` that are visible enough to be revealed.
///
/// The visible band is `[scroll_y, scroll_y + viewport_height - margin)`.
/// A target qualifies when at least `threshold` of its height lies inside
/// the band; zero-height targets qualify when their top does.
#[must_use]
pub fn entered(
    scroll_y: f32,
    viewport_height: f32,
    margin: f32,
    threshold: f32,
    targets: &[Section],
) -> Vec<usize> {
    let band_top = scroll_y;
    let band_bottom = scroll_y + viewport_height - margin;
    if band_bottom <= band_top {
        return Vec::new();
    }

    targets
        .iter()
        .enumerate()
        .filter(|(_, target)| {
            if target.height <= 0.0 {
                return target.top >= band_top && target.top < band_bottom;
            }
            let visible = (target.top + target.height).min(band_bottom) - target.top.max(band_top);
            visible > 0.0 && visible / target.height >= threshold
        })
        .map(|(index, _)| index)
        .collect()
}
