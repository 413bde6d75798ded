// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::{
    app::AppState,
    theme::{Theme, THEME_NAMES},
};
use std::path::PathBuf;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the app
    Quit,
    // Display help
    Help,
    // Change theme
    Theme(String),
    // Load, normalise and display a CDR file
    Open(PathBuf),
    // Re-run the pipeline on the last opened file
    Reload,
    // Export the current results, to the configured default name when no path is given
    Save(Option<PathBuf>),
    // Drop the current results
    Clear,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    /// Paths are taken verbatim after the first run of whitespace, so they
    /// may themselves contain spaces.
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" | "quit!" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "open" | "o" | "e" | "edit" => {
                if rest.is_empty() {
                    Err("usage: open <path>".to_string())
                } else {
                    Ok(Command::Open(PathBuf::from(rest)))
                }
            }
            "reload" => Ok(Command::Reload),
            "save" | "w" | "write" => {
                Ok(Command::Save((!rest.is_empty()).then(|| PathBuf::from(rest))))
            }
            "clear" => Ok(Command::Clear),
            "theme" => {
                if rest.is_empty() {
                    Err(format!("usage: theme <{}>", THEME_NAMES.join("|")))
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => match Theme::by_name(&name) {
            Some(theme) => {
                tracing::debug!(theme = %name, "theme switched");
                s.theme = theme;
            }
            None => s.command_bar.error = Some(format!("unknown theme: {name}")),
        },
        Command::Open(path) => s.open(path),
        Command::Reload => s.reload(),
        Command::Save(path) => s.save(path),
        Command::Clear => s.clear(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
