use crate::theme::{notes::PLACEHOLDER_STYLE, notes::WARNING_STYLE, LABEL_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::{HorizontalAlignment, Position, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

static PLACEHOLDER: &str = "Type here";

/// The editable notes text plus a cursor.
///
/// `cursor` is a byte offset into `text` and always lies on a char boundary.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct NotesEditor {
    text: String,
    cursor: usize,
}

impl NotesEditor {
    /// Start editing `text` with the cursor at its end
    pub(crate) fn new(text: String) -> NotesEditor {
        let cursor = text.len();
        NotesEditor { text, cursor }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    // All editing methods return `true` iff the text changed

    pub(crate) fn handle_input(&mut self, input: EditInput) -> bool {
        match input {
            EditInput::Char(ch) => {
                self.text.insert(self.cursor, ch);
                self.cursor += ch.len_utf8();
                true
            }
            EditInput::Newline => self.handle_input(EditInput::Char('\n')),
            EditInput::Backspace => match self.prev_boundary() {
                Some(prev) => {
                    self.text.replace_range(prev..self.cursor, "");
                    self.cursor = prev;
                    true
                }
                None => false,
            },
            EditInput::Delete => match self.next_boundary() {
                Some(next) => {
                    self.text.replace_range(self.cursor..next, "");
                    true
                }
                None => false,
            },
            EditInput::Left => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor = prev;
                }
                false
            }
            EditInput::Right => {
                if let Some(next) = self.next_boundary() {
                    self.cursor = next;
                }
                false
            }
            EditInput::Up => {
                if let Some(prev_end) = self.line_start().checked_sub(1) {
                    let col = self.column();
                    let prev_start = self.text[..prev_end].rfind('\n').map_or(0, |i| i + 1);
                    self.cursor = advance(&self.text, prev_start, prev_end, col);
                }
                false
            }
            EditInput::Down => {
                let end = self.line_end();
                if end < self.text.len() {
                    let col = self.column();
                    let next_start = end + 1;
                    let next_end = self.text[next_start..]
                        .find('\n')
                        .map_or(self.text.len(), |i| next_start + i);
                    self.cursor = advance(&self.text, next_start, next_end, col);
                }
                false
            }
            EditInput::Home => {
                self.cursor = self.line_start();
                false
            }
            EditInput::End => {
                self.cursor = self.line_end();
                false
            }
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
    }

    fn line_start(&self) -> usize {
        self.text[..self.cursor].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self) -> usize {
        self.text[self.cursor..]
            .find('\n')
            .map_or(self.text.len(), |i| self.cursor + i)
    }

    fn column(&self) -> usize {
        self.text[self.line_start()..self.cursor].chars().count()
    }

    /// Split the text into screen rows at most `width` columns wide, returned
    /// as byte ranges.  A wide char that doesn't fit at the end of a row
    /// moves to the next one.
    fn visual_rows(&self, width: usize) -> Vec<(usize, usize)> {
        let width = width.max(1);
        let mut rows = Vec::new();
        let mut line_start = 0;
        for line in self.text.split('\n') {
            let mut start = line_start;
            let mut used = 0;
            for (i, ch) in line.char_indices() {
                let w = char_width(ch);
                if used > 0 && used + w > width {
                    rows.push((start, line_start + i));
                    start = line_start + i;
                    used = 0;
                }
                used += w;
            }
            rows.push((start, line_start + line.len()));
            line_start += line.len() + 1;
        }
        rows
    }

    /// Screen row and column of the cursor among `visual_rows(width)`.
    ///
    /// A cursor just past a completely filled row is placed at the start of
    /// the row below, which may be one past the last row.
    fn cursor_cell(&self, rows: &[(usize, usize)], width: usize) -> (usize, usize) {
        // A cursor on a soft wrap point belongs to the later row
        let row = rows
            .iter()
            .rposition(|&(start, end)| start <= self.cursor && self.cursor <= end)
            .unwrap_or(0);
        let start = rows.get(row).map_or(0, |&(start, _)| start);
        let col = self.text[start..self.cursor]
            .chars()
            .map(char_width)
            .sum::<usize>();
        if col >= width.max(1) {
            (row + 1, 0)
        } else {
            (row, col)
        }
    }
}

/// Number of terminal columns taken up by `ch`
fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Move at most `col` chars forwards from `start` without passing `end`
fn advance(text: &str, start: usize, end: usize, col: usize) -> usize {
    text[start..end]
        .char_indices()
        .nth(col)
        .map_or(end, |(i, _)| start + i)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EditInput {
    Char(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// The bordered notes panel.  `warning` is shown in the bottom border.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NotesPanel<'a> {
    editor: &'a NotesEditor,
    warning: Option<&'a str>,
}

impl<'a> NotesPanel<'a> {
    pub(crate) fn new(editor: &'a NotesEditor, warning: Option<&'a str>) -> NotesPanel<'a> {
        NotesPanel { editor, warning }
    }

    fn block(&self) -> Block<'a> {
        let block = Block::bordered()
            .title(" Notes ")
            .title_alignment(HorizontalAlignment::Center)
            .style(LABEL_STYLE);
        match self.warning {
            Some(msg) => block.title_bottom(Line::styled(format!(" {msg} "), WARNING_STYLE)),
            None => block,
        }
    }

    /// First visual row shown, chosen so that the cursor row is on screen
    fn scroll(cursor_row: usize, height: u16) -> usize {
        cursor_row.saturating_sub(usize::from(height.saturating_sub(1)))
    }

    /// Where the terminal cursor should be drawn when the panel is rendered
    /// in `area`
    pub(crate) fn cursor_position(&self, area: Rect) -> Option<Position> {
        let inner = self.block().inner(area);
        if inner.is_empty() {
            return None;
        }
        let width = usize::from(inner.width);
        let rows = self.editor.visual_rows(width);
        let (row, col) = self.editor.cursor_cell(&rows, width);
        let row = row - Self::scroll(row, inner.height);
        Some(Position {
            x: inner.x + u16::try_from(col).unwrap_or(0),
            y: inner.y + u16::try_from(row).unwrap_or(0),
        })
    }
}

impl Widget for NotesPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }
        let text = if self.editor.text.is_empty() {
            Text::from(Line::from(Span::styled(PLACEHOLDER, PLACEHOLDER_STYLE)))
        } else {
            let width = usize::from(inner.width);
            let rows = self.editor.visual_rows(width);
            let (cursor_row, _) = self.editor.cursor_cell(&rows, width);
            let top = Self::scroll(cursor_row, inner.height);
            rows.into_iter()
                .skip(top)
                .take(usize::from(inner.height))
                .map(|(start, end)| Line::raw(&self.editor.text[start..end]))
                .collect::<Text<'_>>()
        };
        Paragraph::new(text).style(LABEL_STYLE).render(inner, buf);
    }
}
