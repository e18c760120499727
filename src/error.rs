// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// A page element the operation needs was never supplied by the host.
    #[error("Missing target: {0}")]
    MissingTarget(String),

    #[error("Validation Error: {0}")]
    Validation(#[from] ValidationFailure),

    /// Something went wrong after validation passed, while preparing the
    /// message hand-off.
    #[error("Submission Error: {0}")]
    Submission(String),
}

/// Reasons a contact form submission is rejected before anything happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("required fields are empty")]
    MissingFields,

    #[error("email address is malformed")]
    InvalidEmail,
}

impl ValidationFailure {
    /// Returns the i18n message key shown to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationFailure::MissingFields => "notification-form-incomplete",
            ValidationFailure::InvalidEmail => "notification-form-invalid-email",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
