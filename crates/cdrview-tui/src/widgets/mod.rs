//! Ratatui widgets for the cdrview TUI.

pub mod command_bar;
pub mod help;
pub mod notice;
pub mod result_table;
pub mod status_bar;
pub mod title_bar;
