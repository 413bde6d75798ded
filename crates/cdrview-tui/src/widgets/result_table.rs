//! Result table widget — the scrollable pane showing the normalised CDRs.
//!
//! # Navigation
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one record (scrolls view if needed) |
//! | `↓` / `j` | Move cursor down one record |
//! | `PageUp` / `Ctrl+u` | Move up one page |
//! | `PageDown` / `Ctrl+d` | Move down one page |
//! | `g` / `G` | First / last record |
//! | `←` / `h`, `→` / `l` | Scroll columns left / right |
//!
//! # Scroll semantics
//!
//! `cursor` and `offset` index the data rows only; the header row is always
//! drawn. The cursor is kept within the visible window; moving it past the
//! edge auto-scrolls. `column_offset` is the first schema column drawn.

use std::cell::Cell as StdCell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use cdrview_core::{
    NormalizedRow, ResultTable, COLUMN_COUNT, NOT_AVAILABLE, NO_DATA_MARKER, OUTPUT_SCHEMA,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Table, Widget,
    },
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ResultTableState {
    /// Index into the data rows of the highlighted record.
    pub cursor: usize,
    /// First data row drawn.
    pub offset: usize,
    /// First schema column drawn.
    pub column_offset: usize,
    /// Cached from the last render so `handle()` can page by screenfuls.
    last_height: StdCell<usize>,
}

impl Default for ResultTableState {
    fn default() -> Self {
        Self {
            cursor: 0,
            offset: 0,
            column_offset: 0,
            last_height: StdCell::new(20),
        }
    }
}

impl ResultTableState {
    /// Back to the first record and column. Call whenever the table is replaced.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.offset = 0;
        self.column_offset = 0;
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Handle a navigation event for a table of `rows` data rows.
    pub fn handle(&mut self, event: &AppEvent, rows: usize) {
        match event {
            AppEvent::Nav(Direction::Left) => {
                self.column_offset = self.column_offset.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Right) => {
                self.column_offset = (self.column_offset + 1).min(COLUMN_COUNT - 1);
            }
            _ if rows == 0 => return,
            AppEvent::Nav(Direction::Up) => self.cursor = self.cursor.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => self.cursor = (self.cursor + 1).min(rows - 1),
            AppEvent::ScrollUp => self.cursor = self.cursor.saturating_sub(self.height()),
            AppEvent::ScrollDown => self.cursor = (self.cursor + self.height()).min(rows - 1),
            AppEvent::ScrollToTop => self.cursor = 0,
            AppEvent::ScrollToBottom => self.cursor = rows - 1,
            _ => return,
        }

        self.cursor = self.cursor.min(rows.saturating_sub(1));
        self.follow_cursor();
        tracing::debug!(
            cursor = self.cursor,
            offset = self.offset,
            column_offset = self.column_offset,
            "table: moved"
        );
    }

    /// Shift `offset` so the cursor row is inside the window.
    fn follow_cursor(&mut self) {
        let height = self.height();
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultTableView<'a> {
    results: Option<&'a ResultTable>,
    state: &'a ResultTableState,
    focused: bool,
    theme: &'a Theme,
    column_width: u16,
    show_row_numbers: bool,
}

impl<'a> ResultTableView<'a> {
    pub fn new(
        results: Option<&'a ResultTable>,
        state: &'a ResultTableState,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            results,
            state,
            focused,
            theme,
            column_width: 18,
            show_row_numbers: true,
        }
    }

    pub fn column_width(mut self, width: u16) -> Self {
        self.column_width = width.max(3);
        self
    }

    pub fn show_row_numbers(mut self, show: bool) -> Self {
        self.show_row_numbers = show;
        self
    }

    fn render_rows(&self, rows: &[NormalizedRow], inner: Rect, buf: &mut Buffer) {
        // One line goes to the header.
        let height = (inner.height as usize).saturating_sub(1);
        if height == 0 {
            return;
        }
        // Cache for handle() — safe because draw always runs before handle()
        self.state.last_height.set(height);

        let total = rows.len();
        let mut start = self.state.offset.min(total);
        if self.state.cursor >= start + height {
            start = self.state.cursor + 1 - height;
        }
        let end = (start + height).min(total);
        let first_col = self.state.column_offset.min(COLUMN_COUNT - 1);

        let number_width = total.max(1).to_string().len() as u16;
        let mut widths = Vec::with_capacity(COLUMN_COUNT + 1);
        let mut header_cells: Vec<Cell> = Vec::with_capacity(COLUMN_COUNT + 1);
        if self.show_row_numbers {
            widths.push(Constraint::Length(number_width));
            header_cells.push(Cell::from("#"));
        }
        widths.extend((first_col..COLUMN_COUNT).map(|_| Constraint::Length(self.column_width)));
        header_cells.extend(OUTPUT_SCHEMA[first_col..].iter().map(|name| Cell::from(*name)));
        let header = Row::new(header_cells).style(self.theme.table_header);

        let body: Vec<Row> = rows[start..end]
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let index = start + i;
                let mut cells: Vec<Cell> = Vec::with_capacity(COLUMN_COUNT + 1);
                if self.show_row_numbers {
                    cells.push(Cell::from(Span::styled(
                        (index + 1).to_string(),
                        self.theme.table_row_number,
                    )));
                }
                cells.extend(row.iter().skip(first_col).map(|value| {
                    if value == NOT_AVAILABLE {
                        Cell::from(Span::styled(value, self.theme.table_not_available))
                    } else {
                        Cell::from(value)
                    }
                }));

                let style = if self.focused && index == self.state.cursor {
                    self.theme.table_cursor
                } else if index % 2 == 1 {
                    self.theme.table_row_alt
                } else {
                    self.theme.table_row
                };
                Row::new(cells).style(style)
            })
            .collect();

        // Scrollbar strip sits inside the block, right of the table.
        let table_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        let table = Table::new(body, widths).header(header).column_spacing(1);
        Widget::render(table, table_area, buf);

        if total > height {
            let mut sb_state = ScrollbarState::new(total)
                .position(start)
                .viewport_content_length(height);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

impl Widget for ResultTableView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let title = match self.results {
            Some(ResultTable::Data(rows)) => format!(" Results ({} records) ", rows.len()),
            _ => " Results ".to_string(),
        };
        let block = Block::bordered().title(title).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        match self.results {
            None => {
                let dim = Style::default().add_modifier(Modifier::DIM);
                Paragraph::new(Line::from(vec![
                    Span::styled("No file loaded. Press ", dim),
                    Span::styled("o", Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(" to open a CSV, TXT, XML or JSON file.", dim),
                ]))
                .render(inner, buf);
            }
            Some(ResultTable::NoData) => {
                Paragraph::new(Span::styled(NO_DATA_MARKER, self.theme.table_no_data))
                    .render(inner, buf);
            }
            Some(ResultTable::Data(rows)) => self.render_rows(rows, inner, buf),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
