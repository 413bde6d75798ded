//! Status bar widget — bottom row echoing the latest notification and a
//! summary of the loaded table.

use crate::theme::Theme;
use cdrview_core::{Notification, ResultTable};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    latest: Option<&'a Notification>,
    results: Option<&'a ResultTable>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(
        latest: Option<&'a Notification>,
        results: Option<&'a ResultTable>,
        theme: &'a Theme,
    ) -> Self {
        Self { latest, results, theme }
    }
}

/// Right-hand summary text for the current results.
pub fn summary(results: Option<&ResultTable>) -> String {
    match results {
        None => "no results".to_string(),
        Some(ResultTable::NoData) => "no data".to_string(),
        Some(ResultTable::Data(rows)) if rows.len() == 1 => "1 record".to_string(),
        Some(ResultTable::Data(rows)) => format!("{} records", rows.len()),
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().add_modifier(Modifier::DIM);
        let line = match self.latest {
            Some(n) => Line::from(vec![
                Span::styled(format!(" [{}] ", n.at.format("%H:%M:%S")), dim),
                Span::styled(
                    format!("{} ", n.severity),
                    self.theme.severity_style(n.severity),
                ),
                Span::raw(n.message.as_str()),
            ]),
            None => Line::from(Span::styled(" ready", dim)),
        };
        buf.set_line(area.x, area.y, &line, area.width);

        let right = format!(" {} ", summary(self.results));
        let x = area.right().saturating_sub(right.len() as u16);
        buf.set_string(x, area.y, right, dim);
    }
}
