//! Frame composition.
//!
//! [`compose`] turns a [`View`] into a [`Screen`]: a list of styled lines and
//! the caret position. The screen is built in full before anything is
//! written, and the runtime hands it to ratatui which flushes it to the
//! terminal in a single write.

use std::mem;
use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;
use crate::lines::LineStore;
use crate::matching::MatchIndex;

/// Marker drawn in front of the selected row.
pub const SELECTED_MARKER: &str = "> ";
/// Marker drawn in front of every other row.
pub const UNSELECTED_MARKER: &str = "  ";
/// Rows that never show results: the header line and the blank bottom row.
const RESERVED_ROWS: u16 = 2;

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub prompt: &'a str,
    pub query: &'a str,
    pub lines: &'a LineStore,
    pub matches: &'a MatchIndex,
    pub cursor: usize,
    pub size: Size,
}

/// A fully composed frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    lines: Vec<Line<'static>>,
    cursor: Position,
}

impl Screen {
    /// Header first, then one entry per visible result.
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Where the terminal caret goes: just after the query on the header.
    pub fn cursor(&self) -> Position {
        self.cursor
    }
}

impl Widget for &Screen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (row, line) in (area.top()..area.bottom()).zip(&self.lines) {
            buf.set_line(area.x, row, line, area.width);
        }
    }
}

/// Number of result rows that fit on a terminal `height` rows tall.
pub fn result_rows(height: u16) -> usize {
    usize::from(height.saturating_sub(RESERVED_ROWS))
}

/// Range of match ranks to draw. The window starts at the top and scrolls
/// just far enough to keep the cursor on its last row.
pub fn visible_range(cursor: usize, len: usize, rows: usize) -> Range<usize> {
    let start = if cursor >= rows {
        cursor + 1 - rows
    } else {
        0
    };
    let start = start.min(len);
    start..len.min(start + rows)
}

pub fn compose(view: &View<'_>, theme: &Theme) -> Screen {
    let width = usize::from(view.size.width);
    let text_width = width.saturating_sub(SELECTED_MARKER.width());

    let mut lines = Vec::with_capacity(result_rows(view.size.height) + 1);
    lines.push(Line::from(vec![
        Span::styled(view.prompt.to_string(), theme.prompt),
        Span::raw(display_text(view.query)),
    ]));

    let range = visible_range(view.cursor, view.matches.len(), result_rows(view.size.height));
    for rank in range {
        let Some(entry) = view.matches.get(rank) else {
            break;
        };
        let text = view.lines.get(entry.line).unwrap_or_default();
        let selected = rank == view.cursor;

        let mut spans = vec![if selected {
            Span::styled(SELECTED_MARKER, theme.marker)
        } else {
            Span::raw(UNSELECTED_MARKER)
        }];
        let (base, emphasis) = if selected {
            (theme.selected, theme.selected_highlight)
        } else {
            (Style::default(), theme.highlight)
        };
        spans.extend(highlight_spans(
            text,
            &entry.positions,
            text_width,
            base,
            emphasis,
        ));
        lines.push(Line::from(spans));
    }

    let caret = view.prompt.width() + display_text(view.query).width();
    let max_x = view.size.width.saturating_sub(1);
    let x = u16::try_from(caret).unwrap_or(u16::MAX).min(max_x);

    Screen {
        lines,
        cursor: Position::new(x, 0),
    }
}

/// Split `text` into runs of plain and emphasised spans, emphasising every
/// character whose offset appears in `positions` (ascending). Stops before
/// the text would exceed `max_width` columns.
fn highlight_spans(
    text: &str,
    positions: &[usize],
    max_width: usize,
    base: Style,
    emphasis: Style,
) -> Vec<Span<'static>> {
    let mut next = positions.iter().copied().peekable();
    let mut spans = Vec::new();
    let mut buffer = String::new();
    let mut highlighted = false;
    let mut used = 0;

    for (offset, ch) in text.chars().enumerate() {
        let ch = displayable(ch);
        let width = ch.width().unwrap_or(0);
        if used + width > max_width {
            break;
        }
        used += width;

        while next.peek().is_some_and(|&pos| pos < offset) {
            next.next();
        }
        let emphasise = next.peek() == Some(&offset);

        if emphasise != highlighted && !buffer.is_empty() {
            let style = if highlighted { emphasis } else { base };
            spans.push(Span::styled(mem::take(&mut buffer), style));
        }
        highlighted = emphasise;
        buffer.push(ch);
    }

    if !buffer.is_empty() {
        let style = if highlighted { emphasis } else { base };
        spans.push(Span::styled(buffer, style));
    }

    spans
}

/// Control characters (tabs included) are drawn as a single space so they
/// cannot move the terminal cursor mid-frame.
fn displayable(ch: char) -> char {
    if ch.is_control() { ' ' } else { ch }
}

fn display_text(text: &str) -> String {
    text.chars().map(displayable).collect()
}
