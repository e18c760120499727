// SPDX-License-Identifier: MPL-2.0
//! Page controllers and the view-update contract.
//!
//! Each controller owns the state of one interactive region and reports
//! changes as [`view_sync::ViewUpdate`]s. Controllers never reference each
//! other; cross-component rules belong to the coordinator.
//!
//! # Controllers
//!
//! - [`navigation`] - Drawer, navbar style and active link
//! - [`carousel`] - Slides, autoplay and swipe
//! - [`portfolio`] - Category filter with staggered reveal
//! - [`modal`] - Portfolio detail overlay
//! - [`services`] - Service card accordion
//! - [`contact`] - Contact form validation and mail hand-off
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`gesture`] - Swipe recognition
//! - [`scroll_spy`] - Active section and parallax derivation
//! - [`view_sync`] - `ViewUpdate` sink and host-side `ViewModel`

pub mod carousel;
pub mod contact;
pub mod gesture;
pub mod modal;
pub mod navigation;
pub mod notifications;
pub mod portfolio;
pub mod scroll_spy;
pub mod services;
pub mod view_sync;
