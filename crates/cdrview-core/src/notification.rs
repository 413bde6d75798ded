//! User-facing notifications.
//!
//! Every load and export outcome the user should hear about is turned into a
//! [`Notification`]; the presentation layer decides how to show it. Loader
//! errors are converted in `cdrview-formats`, export outcomes here.

use crate::export::ExportError;
use chrono::{DateTime, Local};
use std::path::Path;

/// Severity of a notification, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARN"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// A message for the user, with a short title and the time it was raised.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub at: DateTime<Local>,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
            at: Local::now(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, message)
    }

    /// Successful export to `path`.
    pub fn saved(path: &Path) -> Self {
        Self::info("Success", format!("Results saved to {}", path.display()))
    }
}

impl From<&ExportError> for Notification {
    fn from(err: &ExportError) -> Self {
        match err {
            ExportError::NoResults => {
                Notification::warning("No Results", "There are no results to save")
            }
            ExportError::Io { source, .. } => {
                Notification::error("Error", format!("Error saving file: {source}"))
            }
        }
    }
}
