// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Notification texts, mail-compose labels and the preview window's strings
//! are resolved through Fluent bundles embedded at compile time.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Fallback to `en-US` when no preferred locale is available
//! - `MISSING: <key>` marker for untranslated keys

pub mod fluent;

pub use fluent::I18n;
