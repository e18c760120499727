// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the coordinator. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: rate limits, autoplay, stagger and notification delays
//! - **Layout**: breakpoints and pixel thresholds
//! - **Contact**: mail hand-off defaults

// ==========================================================================
// Timing Defaults (milliseconds)
// ==========================================================================

/// Leading-edge throttle window for scroll events (about one frame).
pub const DEFAULT_SCROLL_THROTTLE_MS: u64 = 16;

/// Quiet period before a resize is processed.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;

/// Interval between automatic carousel advances.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5000;

/// Per-item delay of the portfolio reveal cascade.
pub const DEFAULT_FILTER_STAGGER_MS: u64 = 50;

/// How long a notification stays before hiding itself.
pub const DEFAULT_NOTIFICATION_AUTO_HIDE_MS: u64 = 5000;

/// Grace period between a notification's exit transition and its removal.
pub const DEFAULT_NOTIFICATION_EXIT_MS: u64 = 300;

/// Simulated submission latency of the contact form.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

/// Delay before scrolling to the location hash after the page loads.
pub const DEFAULT_HASH_SCROLL_DELAY_MS: u64 = 100;

/// Upper bound accepted for any configured delay.
pub const MAX_DELAY_MS: u64 = 60_000;

// ==========================================================================
// Layout Defaults (CSS pixels)
// ==========================================================================

/// Viewports at or below this width use the mobile layout.
pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 768.0;

/// Scroll offset past which the navbar switches to its scrolled style.
pub const DEFAULT_SCROLLED_THRESHOLD: f32 = 100.0;

/// Scroll-spy lookahead added to the scroll offset.
pub const DEFAULT_SPY_LOOKAHEAD: f32 = 150.0;

/// Height of the fixed navbar, subtracted from scroll targets.
pub const DEFAULT_NAVBAR_OFFSET: f32 = 80.0;

/// Minimum horizontal travel for a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Hero image moves at this fraction of the scroll speed.
pub const DEFAULT_PARALLAX_FACTOR: f32 = 0.5;

/// Band at the bottom of the viewport that does not count as visible for
/// reveal-on-scroll.
pub const DEFAULT_REVEAL_MARGIN: f32 = 100.0;

/// Visible fraction of an element that triggers its reveal.
pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.1;

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Mailbox the compose action is addressed to.
pub const DEFAULT_CONTACT_RECIPIENT: &str = "info@engint.it";

/// Prefix of the composed subject line.
pub const DEFAULT_SUBJECT_PREFIX: &str = "ENGINT";

/// Subject option that reveals the file upload field.
pub const CV_SUBJECT: &str = "invio-cv";

/// Longest mail-compose URL handed to the host.
pub const MAX_MAILTO_LEN: usize = 2000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SCROLL_THROTTLE_MS > 0);
    assert!(DEFAULT_RESIZE_DEBOUNCE_MS > 0);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS > 0);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_DELAY_MS);
    assert!(DEFAULT_NOTIFICATION_AUTO_HIDE_MS <= MAX_DELAY_MS);
    assert!(DEFAULT_NOTIFICATION_EXIT_MS < DEFAULT_NOTIFICATION_AUTO_HIDE_MS);
    assert!(DEFAULT_SUBMIT_DELAY_MS <= MAX_DELAY_MS);

    assert!(DEFAULT_MOBILE_BREAKPOINT > 0.0);
    assert!(DEFAULT_SCROLLED_THRESHOLD >= 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD > 0.0);
    assert!(DEFAULT_PARALLAX_FACTOR >= 0.0);
    assert!(DEFAULT_PARALLAX_FACTOR <= 1.0);
    assert!(DEFAULT_REVEAL_MARGIN >= 0.0);
    assert!(DEFAULT_REVEAL_THRESHOLD > 0.0);
    assert!(DEFAULT_REVEAL_THRESHOLD <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults_match_site_behavior() {
        assert_eq!(DEFAULT_SCROLL_THROTTLE_MS, 16);
        assert_eq!(DEFAULT_RESIZE_DEBOUNCE_MS, 250);
        assert_eq!(DEFAULT_AUTOPLAY_INTERVAL_MS, 5000);
        assert_eq!(DEFAULT_FILTER_STAGGER_MS, 50);
        assert_eq!(DEFAULT_NOTIFICATION_AUTO_HIDE_MS, 5000);
        assert_eq!(DEFAULT_NOTIFICATION_EXIT_MS, 300);
    }

    #[test]
    fn layout_defaults_are_valid() {
        assert_eq!(DEFAULT_MOBILE_BREAKPOINT, 768.0);
        assert_eq!(DEFAULT_SPY_LOOKAHEAD, 150.0);
        assert!(DEFAULT_SWIPE_THRESHOLD > 0.0);
    }
}
