//! cdrview TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use cdrview_core::config::Config;
use std::path::PathBuf;
use theme::Theme;

/// Start the TUI, opening `initial` first when given.
pub fn run(initial: Option<PathBuf>) -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config: falling back to defaults");
        Config::defaults()
    });
    let theme = Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.ui.theme, "unknown theme, using default");
        Theme::load_default()
    });

    let mut app = App::new(config, theme);
    if let Some(path) = initial {
        app.open(path);
    }
    app.run()
}
