// SPDX-License-Identifier: MPL-2.0
//! Contact form: validation, simulated submission and mail hand-off.
//!
//! A valid submission disables the button for the configured delay, then
//! composes a `mailto:` URL for the platform mail client. The attachment
//! field is only shown for job applications.

use crate::error::{Error, Result, ValidationFailure};
use crate::timing::{TimerHandle, TimerQueue};
use crate::ui::view_sync::{ViewSync, ViewUpdate};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

/// Longest mail-compose URL handed to the platform.
pub const MAX_MAILTO_LEN: usize = crate::config::defaults::MAX_MAILTO_LEN;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

/// Timers owned by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Simulated transport finished.
    Submit,
}

/// Values entered by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    /// Checks required fields and the email shape.
    pub fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        let required = [&self.name, &self.email, &self.subject];
        if required.iter().any(|value| value.trim().is_empty()) {
            return Err(ValidationFailure::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationFailure::InvalidEmail);
        }
        Ok(())
    }
}

/// Localized labels used in the mail body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailLabels {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Builds `mailto:<recipient>?subject=..&body=..` for a submission.
pub fn compose_mailto(
    recipient: &str,
    subject_prefix: &str,
    fields: &ContactFields,
    labels: &MailLabels,
) -> Result<String> {
    let subject = format!("{subject_prefix} - {}", fields.subject);
    let body = format!(
        "{}: {}\n{}: {}\n{}: {}\n\n{}:\n{}",
        labels.name,
        fields.name,
        labels.email,
        fields.email,
        labels.subject,
        fields.subject,
        labels.message,
        fields.message,
    );
    let url = format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    );
    if url.len() > MAX_MAILTO_LEN {
        return Err(Error::Submission(format!(
            "mail-compose URL is {} characters, limit is {MAX_MAILTO_LEN}",
            url.len()
        )));
    }
    Ok(url)
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    /// Form and submit button exist on the page.
    present: bool,
    /// The attachment field exists on the page.
    has_file_upload: bool,
    busy: bool,
    pending: Option<TimerHandle>,
    draft: Option<ContactFields>,
    file_upload_visible: bool,
    submit_delay: Duration,
    recipient: String,
    subject_prefix: String,
    cv_subject: String,
}

impl ContactForm {
    #[must_use]
    pub fn new(
        present: bool,
        has_file_upload: bool,
        submit_delay: Duration,
        recipient: String,
        subject_prefix: String,
    ) -> Self {
        Self {
            present,
            has_file_upload,
            busy: false,
            pending: None,
            draft: None,
            file_upload_visible: false,
            submit_delay,
            recipient,
            subject_prefix,
            cv_subject: crate::config::defaults::CV_SUBJECT.to_string(),
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn file_upload_visible(&self) -> bool {
        self.file_upload_visible
    }

    /// Shows the attachment field for job applications only.
    pub fn subject_changed(&mut self, subject: &str, sync: &mut ViewSync) {
        if !self.has_file_upload {
            return;
        }
        let visible = subject == self.cv_subject;
        self.file_upload_visible = visible;
        sync.push(ViewUpdate::FileUploadVisible(visible));
        if !visible {
            sync.push(ViewUpdate::FileInputCleared);
        }
    }

    /// Validates and starts a submission.
    ///
    /// Returns `Ok(false)` when the form is missing or a submission is
    /// already running.
    pub fn submit<T: From<Timer>>(
        &mut self,
        fields: ContactFields,
        timers: &mut TimerQueue<T>,
        sync: &mut ViewSync,
    ) -> Result<bool> {
        if !self.present || self.busy {
            return Ok(false);
        }
        fields.validate()?;

        self.busy = true;
        sync.push(ViewUpdate::SubmitBusy(true));
        self.pending = Some(timers.schedule(self.submit_delay, Timer::Submit.into()));
        self.draft = Some(fields);
        tracing::debug!("contact submission started");
        Ok(true)
    }

    /// Finishes the running submission. The button is restored whatever the
    /// outcome.
    pub fn complete(&mut self, labels: &MailLabels, sync: &mut ViewSync) -> Result<()> {
        self.pending = None;
        let outcome = self
            .draft
            .take()
            .ok_or_else(|| Error::Submission("no submission in progress".into()))
            .and_then(|fields| {
                compose_mailto(&self.recipient, &self.subject_prefix, &fields, labels)
            });

        if let Ok(url) = &outcome {
            tracing::info!(recipient = %self.recipient, "handing message to mail client");
            sync.push(ViewUpdate::OpenUrl(url.clone()));
            sync.push(ViewUpdate::FormReset);
            // The reset puts the subject back to its placeholder.
            self.subject_changed("", sync);
        }

        self.busy = false;
        sync.push(ViewUpdate::SubmitBusy(false));
        outcome.map(|_| ())
    }

    /// Drops a running submission without completing it and restores the
    /// submit button.
    pub fn cancel<T>(&mut self, timers: &mut TimerQueue<T>, sync: &mut ViewSync) {
        if let Some(handle) = self.pending.take() {
            timers.cancel(handle);
        }
        self.draft = None;
        if self.busy {
            self.busy = false;
            sync.push(ViewUpdate::SubmitBusy(false));
        }
    }
}
