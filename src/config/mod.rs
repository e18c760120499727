// SPDX-License-Identifier: MPL-2.0
//! This module handles the coordinator's configuration, including loading and
//! saving preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[timing]` - Rate limits, autoplay, stagger and notification delays
//! - `[layout]` - Breakpoint and pixel thresholds
//! - `[carousel]` - Autoplay preference
//! - `[contact]` - Mail hand-off recipient and subject prefix
//!
//! Every field is optional; missing values fall back to [`defaults`].
//! [`Config::settings`] resolves a config into the [`Settings`] the
//! coordinator runs with.
//!
//! # Examples
//!
//! ```no_run
//! use vetrina::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("it".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "it").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Delays in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_throttle_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize_debounce_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay_interval_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_stagger_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_auto_hide_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_exit_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_delay_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_scroll_delay_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            scroll_throttle_ms: Some(DEFAULT_SCROLL_THROTTLE_MS),
            resize_debounce_ms: Some(DEFAULT_RESIZE_DEBOUNCE_MS),
            autoplay_interval_ms: Some(DEFAULT_AUTOPLAY_INTERVAL_MS),
            filter_stagger_ms: Some(DEFAULT_FILTER_STAGGER_MS),
            notification_auto_hide_ms: Some(DEFAULT_NOTIFICATION_AUTO_HIDE_MS),
            notification_exit_ms: Some(DEFAULT_NOTIFICATION_EXIT_MS),
            submit_delay_ms: Some(DEFAULT_SUBMIT_DELAY_MS),
            hash_scroll_delay_ms: Some(DEFAULT_HASH_SCROLL_DELAY_MS),
        }
    }
}

/// Breakpoint and thresholds in CSS pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_breakpoint: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrolled_threshold: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spy_lookahead: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navbar_offset: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallax_factor: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal_margin: Option<f32>,
    /// Fraction in `(0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal_threshold: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: Some(DEFAULT_MOBILE_BREAKPOINT),
            scrolled_threshold: Some(DEFAULT_SCROLLED_THRESHOLD),
            spy_lookahead: Some(DEFAULT_SPY_LOOKAHEAD),
            navbar_offset: Some(DEFAULT_NAVBAR_OFFSET),
            swipe_threshold: Some(DEFAULT_SWIPE_THRESHOLD),
            parallax_factor: Some(DEFAULT_PARALLAX_FACTOR),
            reveal_margin: Some(DEFAULT_REVEAL_MARGIN),
            reveal_threshold: Some(DEFAULT_REVEAL_THRESHOLD),
        }
    }
}

/// Carousel preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Whether slides advance on their own.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
        }
    }
}

/// Contact form hand-off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_prefix: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: Some(DEFAULT_CONTACT_RECIPIENT.to_string()),
            subject_prefix: Some(DEFAULT_SUBJECT_PREFIX.to_string()),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

fn default_autoplay() -> Option<bool> {
    Some(true)
}

// =============================================================================
// Resolved Settings
// =============================================================================

/// Fully resolved values the coordinator runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub scroll_throttle: Duration,
    pub resize_debounce: Duration,
    pub autoplay_interval: Duration,
    pub filter_stagger: Duration,
    pub notification_auto_hide: Duration,
    pub notification_exit: Duration,
    pub submit_delay: Duration,
    pub hash_scroll_delay: Duration,
    pub mobile_breakpoint: f32,
    pub scrolled_threshold: f32,
    pub spy_lookahead: f32,
    pub navbar_offset: f32,
    pub swipe_threshold: f32,
    pub parallax_factor: f32,
    pub reveal_margin: f32,
    pub reveal_threshold: f32,
    pub autoplay: bool,
    pub recipient: String,
    pub subject_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Config::default().settings()
    }
}

fn delay(value: Option<u64>, default: u64) -> Duration {
    Duration::from_millis(value.unwrap_or(default).min(MAX_DELAY_MS))
}

fn pixels(value: Option<f32>, default: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        _ => default,
    }
}

fn fraction(value: Option<f32>, default: f32) -> f32 {
    match value {
        Some(v) if v > 0.0 && v <= 1.0 => v,
        _ => default,
    }
}

impl Config {
    /// Resolves optional fields against the defaults, clamping delays to
    /// [`MAX_DELAY_MS`] and rejecting negative or non-finite pixel values.
    #[must_use]
    pub fn settings(&self) -> Settings {
        let timing = &self.timing;
        let layout = &self.layout;
        Settings {
            scroll_throttle: delay(timing.scroll_throttle_ms, DEFAULT_SCROLL_THROTTLE_MS),
            resize_debounce: delay(timing.resize_debounce_ms, DEFAULT_RESIZE_DEBOUNCE_MS),
            autoplay_interval: delay(
                timing.autoplay_interval_ms,
                DEFAULT_AUTOPLAY_INTERVAL_MS,
            )
            .max(Duration::from_millis(1)),
            filter_stagger: delay(timing.filter_stagger_ms, DEFAULT_FILTER_STAGGER_MS),
            notification_auto_hide: delay(
                timing.notification_auto_hide_ms,
                DEFAULT_NOTIFICATION_AUTO_HIDE_MS,
            ),
            notification_exit: delay(timing.notification_exit_ms, DEFAULT_NOTIFICATION_EXIT_MS),
            submit_delay: delay(timing.submit_delay_ms, DEFAULT_SUBMIT_DELAY_MS),
            hash_scroll_delay: delay(timing.hash_scroll_delay_ms, DEFAULT_HASH_SCROLL_DELAY_MS),
            mobile_breakpoint: pixels(layout.mobile_breakpoint, DEFAULT_MOBILE_BREAKPOINT),
            scrolled_threshold: pixels(layout.scrolled_threshold, DEFAULT_SCROLLED_THRESHOLD),
            spy_lookahead: pixels(layout.spy_lookahead, DEFAULT_SPY_LOOKAHEAD),
            navbar_offset: pixels(layout.navbar_offset, DEFAULT_NAVBAR_OFFSET),
            swipe_threshold: pixels(layout.swipe_threshold, DEFAULT_SWIPE_THRESHOLD),
            parallax_factor: pixels(layout.parallax_factor, DEFAULT_PARALLAX_FACTOR),
            reveal_margin: pixels(layout.reveal_margin, DEFAULT_REVEAL_MARGIN),
            reveal_threshold: fraction(layout.reveal_threshold, DEFAULT_REVEAL_THRESHOLD),
            autoplay: self.carousel.autoplay.unwrap_or(true),
            recipient: self
                .contact
                .recipient
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTACT_RECIPIENT.to_string()),
            subject_prefix: self
                .contact
                .subject_prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_SUBJECT_PREFIX.to_string()),
        }
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with an i18n warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.general.language = Some("it".to_string());
        config.timing.autoplay_interval_ms = Some(3000);
        config.carousel.autoplay = Some(false);
        config.contact.recipient = Some("hello@example.org".to_string());

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_falls_back_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[timing\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[layout]\nmobile_breakpoint = 900.0\n").expect("write");

        let settings = load_from_path(&config_path).expect("load").settings();
        assert_eq!(settings.mobile_breakpoint, 900.0);
        assert_eq!(settings.scroll_throttle, Duration::from_millis(16));
        assert!(settings.autoplay);
    }

    #[test]
    fn default_settings_match_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.resize_debounce, Duration::from_millis(250));
        assert_eq!(settings.autoplay_interval, Duration::from_millis(5000));
        assert_eq!(settings.notification_exit, Duration::from_millis(300));
        assert_eq!(settings.navbar_offset, 80.0);
        assert_eq!(settings.recipient, DEFAULT_CONTACT_RECIPIENT);
    }

    #[test]
    fn settings_clamp_and_sanitize_values() {
        let mut config = Config::default();
        config.timing.autoplay_interval_ms = Some(0);
        config.timing.notification_auto_hide_ms = Some(u64::MAX);
        config.layout.swipe_threshold = Some(-5.0);
        config.layout.reveal_threshold = Some(1.5);

        let settings = config.settings();
        assert_eq!(settings.autoplay_interval, Duration::from_millis(1));
        assert_eq!(
            settings.notification_auto_hide,
            Duration::from_millis(MAX_DELAY_MS)
        );
        assert_eq!(settings.swipe_threshold, DEFAULT_SWIPE_THRESHOLD);
        assert_eq!(settings.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
    }
}
