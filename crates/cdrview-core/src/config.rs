//! Configuration types for cdrview.
//!
//! [`Config::load`] reads `~/.config/cdrview/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
theme            = "default"
column_width     = 18
show_row_numbers = true

[export]
default_extension = "txt"
default_file_name = "cdr_results"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/cdrview/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Theme loaded at startup (`default`, `gruvbox_dark`, `meadow`).
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Fixed display width of every result column, in cells.
    #[serde(default = "default_column_width")]
    pub column_width: u16,
    #[serde(default = "default_show_row_numbers")]
    pub show_row_numbers: bool,
}

fn default_theme() -> String { "default".to_string() }
fn default_column_width() -> u16 { 18 }
fn default_show_row_numbers() -> bool { true }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            column_width: default_column_width(),
            show_row_numbers: default_show_row_numbers(),
        }
    }
}

/// `[export]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Appended to export paths that have no extension.
    #[serde(default = "default_extension")]
    pub default_extension: String,
    /// Target of a `save` with no path argument.
    #[serde(default = "default_file_name")]
    pub default_file_name: String,
}

fn default_extension() -> String { "txt".to_string() }
fn default_file_name() -> String { "cdr_results".to_string() }

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_extension: default_extension(),
            default_file_name: default_file_name(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/cdrview/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "config: wrote defaults");
        }

        Self::from_sources(Some(path))
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self::from_sources(None).expect("built-in default config must be valid TOML")
    }

    /// Parse the defaults layered under the TOML string `src`.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    fn from_sources(user: Option<PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(path) = user {
            builder = builder.add_source(config::File::from(path.as_path()).required(false));
        }
        builder.build()?.try_deserialize().map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("cdrview")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
