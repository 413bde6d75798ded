//! Colour theme for the cdrview TUI.
//!
//! Themes are defined as TOML files and embedded in the binary via
//! [`include_str!`] so the application works without any files on disk.
//! Resolve one by name with [`Theme::by_name`] (the `[ui] theme` config key or
//! the `:theme` command) and pass it through the application as a shared
//! reference.

use cdrview_core::Severity;
use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");
const MEADOW_THEME_SRC: &str = include_str!("themes/meadow.toml");

/// Names accepted by [`Theme::by_name`], for usage messages.
pub const THEME_NAMES: &[&str] = &["default", "gruvbox_dark", "meadow"];

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawTitle {
    text: RawStyle,
    path: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTable {
    header: RawStyle,
    row: RawStyle,
    row_alt: RawStyle,
    cursor: RawStyle,
    not_available: RawStyle,
    no_data: RawStyle,
    row_number: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    command_bar: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawNotifications {
    info: RawStyle,
    warning: RawStyle,
    error: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    title: RawTitle,
    table: RawTable,
    borders: RawBorders,
    notifications: RawNotifications,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme.
///
/// All styles are pre-resolved ratatui [`Style`] values — no allocation at
/// render time.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Application name in the title bar.
    pub title: Style,
    /// Source path shown next to the title.
    pub title_path: Style,

    /// The schema header row.
    pub table_header: Style,
    pub table_row: Style,
    /// Every other data row, for striping.
    pub table_row_alt: Style,
    /// Highlighted record under the cursor.
    pub table_cursor: Style,
    /// Cells holding the `N/A` sentinel.
    pub table_not_available: Style,
    /// The "No data to analyze" marker row.
    pub table_no_data: Style,
    pub table_row_number: Style,

    /// Border style for the currently focused pane.
    pub border_focused: Style,
    /// Border style for the command bar pane
    pub border_command_bar: Style,
    /// Border style for unfocused panes.
    pub border_unfocused: Style,

    pub notify_info: Style,
    pub notify_warning: Style,
    pub notify_error: Style,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. Every embedded theme is
    /// parsed by the unit tests below, so this cannot happen in a tested
    /// build.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Resolve an embedded theme by name, case-insensitively.
    ///
    /// Returns `None` for unknown names.
    pub fn by_name(name: &str) -> Option<Self> {
        let src = match name.to_ascii_lowercase().as_str() {
            "default" => DEFAULT_THEME_SRC,
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => GRUVBOX_DARK_THEME_SRC,
            "meadow" | "classic" => MEADOW_THEME_SRC,
            _ => return None,
        };
        match Self::from_toml_str(src) {
            Ok(theme) => Some(theme),
            Err(err) => {
                tracing::warn!(theme = name, error = %err, "embedded theme failed to parse");
                None
            }
        }
    }

    /// Parse a theme from a TOML string.
    ///
    /// Unknown keys are ignored so user themes stay forward-compatible.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            title: raw.title.text.into_style(),
            title_path: raw.title.path.into_style(),
            table_header: raw.table.header.into_style(),
            table_row: raw.table.row.into_style(),
            table_row_alt: raw.table.row_alt.into_style(),
            table_cursor: raw.table.cursor.into_style(),
            table_not_available: raw.table.not_available.into_style(),
            table_no_data: raw.table.no_data.into_style(),
            table_row_number: raw.table.row_number.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            notify_info: raw.notifications.info.into_style(),
            notify_warning: raw.notifications.warning.into_style(),
            notify_error: raw.notifications.error.into_style(),
        })
    }

    /// Style for a notification of the given severity.
    pub fn severity_style(&self, severity: Severity) -> Style {
        match severity {
            Severity::Info => self.notify_info,
            Severity::Warning => self.notify_warning,
            Severity::Error => self.notify_error,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
