// SPDX-License-Identifier: MPL-2.0
//! `vetrina` coordinates the interactive parts of a showcase website.
//!
//! A [`Coordinator`](coordinator::Coordinator) owns the page controllers
//! (navigation drawer, scroll spy, carousel, portfolio filter, modal,
//! service accordion, contact form and toasts) and a single deterministic
//! timer queue. Hosts feed it events and clock advances and render the
//! [`ViewUpdate`](ui::view_sync::ViewUpdate)s it produces. The binary hosts
//! it in an iced preview window.

#![doc(html_root_url = "https://docs.rs/vetrina/0.1.0")]

pub mod app;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod i18n;
pub mod page;
pub mod timing;
pub mod ui;
