// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the preview shell.

use crate::coordinator::UiEvent;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Page interactions are
/// forwarded to the coordinator as [`UiEvent`]s; the rest edits the
/// shell's own form state.
#[derive(Debug, Clone)]
pub enum Message {
    Ui(UiEvent),
    /// Window size changed; the shell recomputes the page layout.
    WindowResized(Size),
    NameChanged(String),
    EmailChanged(String),
    SubjectChanged(String),
    MessageChanged(String),
    SubmitPressed,
    Tick(Instant),
}

/// Runtime flags passed into the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g., `it`).
    pub lang: Option<String>,
    /// Optional config directory override (from `--config-dir`).
    pub config_dir: Option<String>,
}
