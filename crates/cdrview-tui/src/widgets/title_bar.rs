//! Title bar widget — the 1-line strip at the top of the screen.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use std::path::Path;

const TITLE: &str = " CDR Analysis Tool ";

/// Application name, the file the current results came from, and
/// keybinding hints right-aligned in the same row.
pub struct TitleBar<'a> {
    source: Option<&'a Path>,
    theme: &'a Theme,
}

impl<'a> TitleBar<'a> {
    pub fn new(source: Option<&'a Path>, theme: &'a Theme) -> Self {
        Self { source, theme }
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(TITLE, self.theme.title)];
        if let Some(path) = self.source {
            spans.push(Span::styled(format!(" {} ", path.display()), self.theme.title_path));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        // Keybinding hints at the right edge
        let hint = " o:open  s:save  c:clear  ?:help  q:quit ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
