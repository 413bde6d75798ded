//! Notification popup — modal box shown after a load failure, a save, or a
//! save with nothing to save. Dismissed with `Enter` or `Escape`.

use super::help::centered_rect;
use crate::theme::Theme;
use cdrview_core::Notification;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

pub struct NoticePopup<'a> {
    notification: &'a Notification,
    theme: &'a Theme,
}

impl<'a> NoticePopup<'a> {
    pub fn new(notification: &'a Notification, theme: &'a Theme) -> Self {
        Self { notification, theme }
    }
}

impl Widget for NoticePopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.theme.severity_style(self.notification.severity);
        let width = (self.notification.message.chars().count() as u16 + 6).clamp(36, 76);
        // Two border rows, blank line, hint.
        let body_width = width.saturating_sub(4).max(1) as usize;
        let body_lines = self.notification.message.chars().count().div_ceil(body_width) as u16;
        let popup = centered_rect(width, body_lines + 4, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(format!(" {} ", self.notification.title))
            .title_style(style)
            .border_style(style);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let text = vec![
            Line::from(self.notification.message.as_str()),
            Line::default(),
            Line::from(Span::styled(
                "Enter / Esc to dismiss",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .render(Rect { x: inner.x + 1, width: inner.width.saturating_sub(2), ..inner }, buf);
    }
}
