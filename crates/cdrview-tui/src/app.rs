//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        notice::NoticePopup,
        result_table::{ResultTableState, ResultTableView},
        status_bar::StatusBar,
        title_bar::TitleBar,
    },
};
use cdrview_core::{config::Config, export, Notification, ResultTable};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, path::PathBuf, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    /// The table on screen. `None` until a file is opened, and after `clear`.
    pub results: Option<ResultTable>,
    /// Path of the last file opened, for `reload`.
    pub source: Option<PathBuf>,
    pub table: ResultTableState,
    pub focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    /// Modal notification awaiting dismissal.
    pub notice: Option<Notification>,
    /// Most recent notification, echoed in the status bar.
    pub latest: Option<Notification>,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

impl AppState {
    pub fn new(config: Config, theme: Theme) -> Self {
        Self {
            results: None,
            source: None,
            table: ResultTableState::default(),
            focus: Focus::Table,
            theme,
            config,
            show_help: false,
            notice: None,
            latest: None,
            command_bar: CommandBarState::default(),
            quit: false,
        }
    }

    /// Run the load pipeline on `path` and replace the current results.
    ///
    /// A failed load still replaces the table, with the no-data table, and
    /// raises the error as a notification.
    pub fn open(&mut self, path: PathBuf) {
        tracing::debug!(path = %path.display(), "opening file");
        let outcome = cdrview_formats::open(&path);
        self.results = Some(outcome.table);
        self.table.reset();
        self.source = Some(path);
        if let Some(n) = outcome.notification {
            self.notify(n);
        }
    }

    /// Re-run the pipeline on the last opened file.
    pub fn reload(&mut self) {
        match self.source.clone() {
            Some(path) => self.open(path),
            None => self.notify(Notification::warning("Reload", "No file has been opened yet")),
        }
    }

    /// Export the current results. Without a path, the configured default
    /// file name is used.
    pub fn save(&mut self, path: Option<PathBuf>) {
        let path = path.unwrap_or_else(|| PathBuf::from(&self.config.export.default_file_name));
        let result = export::write(
            self.results.as_ref(),
            &path,
            &self.config.export.default_extension,
        );
        match result {
            Ok(written) => self.notify(Notification::saved(&written)),
            Err(err) => self.notify(Notification::from(&err)),
        }
    }

    /// Drop the current results. The source path is kept so `reload` works.
    pub fn clear(&mut self) {
        tracing::debug!("results cleared");
        self.results = None;
        self.table.reset();
    }

    fn notify(&mut self, notification: Notification) {
        tracing::debug!(
            severity = %notification.severity,
            message = %notification.message,
            "notification raised"
        );
        self.latest = Some(notification.clone());
        self.notice = Some(notification);
    }

    fn data_rows(&self) -> usize {
        self.results.as_ref().map_or(0, |t| t.records().len())
    }

    /// Apply one semantic event.
    pub fn handle(&mut self, event: AppEvent) {
        // Notification popup is modal; only dismiss keys act.
        if self.notice.is_some() {
            if matches!(event, AppEvent::Enter | AppEvent::Escape | AppEvent::Char(' ')) {
                tracing::debug!("notification dismissed");
                self.notice = None;
            }
            return;
        }

        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if self.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    self.command_bar.clear();
                    self.focus = Focus::Table;
                }
                AppEvent::Quit => self.quit = true,
                AppEvent::Enter => {
                    let input = self.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            self.command_bar.clear();
                            self.focus = Focus::Table;
                            execute_command(self, cmd);
                            // Commands that fail to apply leave the bar open with the error.
                            if self.command_bar.error.is_some() {
                                self.focus = Focus::Command;
                            }
                        }
                        Err(msg) if msg.is_empty() => {
                            self.command_bar.clear();
                            self.focus = Focus::Table;
                        }
                        Err(msg) => {
                            self.command_bar.error = Some(msg);
                        }
                    }
                }
                other => self.command_bar.handle(&other),
            }
            return;
        }

        match event {
            AppEvent::Char('?') => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }
            AppEvent::Char(':') => self.enter_command_mode(""),
            AppEvent::Char('o') => self.enter_command_mode("open "),
            AppEvent::Char('s') => self.enter_command_mode("save "),
            AppEvent::Char('c') => self.clear(),
            AppEvent::Char('r') => self.reload(),
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }
            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}
            other => {
                let rows = self.data_rows();
                self.table.handle(&other, rows);
            }
        }
    }

    fn enter_command_mode(&mut self, prefill: &str) {
        tracing::debug!(prefill, "entering command mode");
        self.command_bar.prefill(prefill);
        self.focus = Focus::Command;
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(config: Config, theme: Theme) -> Self {
        App {
            state: AppState::new(config, theme),
        }
    }

    /// Open `path` before the event loop starts.
    pub fn open(&mut self, path: PathBuf) {
        self.state.open(path);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when the command bar is focused
                        let app_event = if self.state.focus == Focus::Command {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.state.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.state.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line title bar | table | 1-line status bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(TitleBar::new(state.source.as_deref(), &state.theme), vert[0]);
    frame.render_widget(
        ResultTableView::new(
            state.results.as_ref(),
            &state.table,
            state.focus == Focus::Table,
            &state.theme,
        )
        .column_width(state.config.ui.column_width)
        .show_row_numbers(state.config.ui.show_row_numbers),
        vert[1],
    );
    frame.render_widget(
        StatusBar::new(state.latest.as_ref(), state.results.as_ref(), &state.theme),
        vert[2],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    if let Some(ref notice) = state.notice {
        frame.render_widget(NoticePopup::new(notice, &state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
