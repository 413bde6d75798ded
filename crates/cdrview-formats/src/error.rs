//! Load error taxonomy.

use cdrview_core::Notification;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Grammar family a [`LoadError::Parse`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseFormat {
    /// Comma- or tab-separated text.
    Delimited,
    Json,
    Xml,
}

impl std::fmt::Display for ParseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseFormat::Delimited => write!(f, "delimited text"),
            ParseFormat::Json => write!(f, "JSON"),
            ParseFormat::Xml => write!(f, "XML"),
        }
    }
}

/// Why a file could not be loaded. A failed load never yields a partial table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path does not resolve to a readable file.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file has no content at all.
    #[error("no data in file: {}", path.display())]
    EmptyInput { path: PathBuf },

    /// The content violates the format's grammar.
    #[error("error parsing {format} file {}: {detail}", path.display())]
    Parse {
        path: PathBuf,
        format: ParseFormat,
        detail: String,
    },

    /// The file name does not end in a recognised extension.
    #[error("unsupported file format: {} (expected .csv, .txt, .json or .xml)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::FileNotFound { path, .. }
            | LoadError::EmptyInput { path }
            | LoadError::Parse { path, .. }
            | LoadError::UnsupportedFormat { path } => path,
        }
    }
}

impl From<&LoadError> for Notification {
    fn from(err: &LoadError) -> Self {
        let message = match err {
            LoadError::FileNotFound { path, .. } => format!("File not found: {}", path.display()),
            LoadError::EmptyInput { .. } => "No data in file".to_string(),
            LoadError::Parse { format: ParseFormat::Delimited, .. } => {
                "Error parsing delimited text file".to_string()
            }
            LoadError::Parse { format: ParseFormat::Json, .. } => {
                "Error decoding JSON file".to_string()
            }
            LoadError::Parse { format: ParseFormat::Xml, .. } => {
                "Error parsing XML file".to_string()
            }
            LoadError::UnsupportedFormat { .. } => {
                "Unsupported file format. Please use CSV, TXT, XML, or JSON.".to_string()
            }
        };
        Notification::error("Error", message)
    }
}
