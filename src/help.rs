use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

static TEXT: &[&str] = &[
    "Typing edits the notes, which are saved",
    "as you type.  The notes panel is shown",
    "once the window is over 400×400 pixels.",
    "",
    "ARROWS          Move the cursor",
    "HOME, END       Start/end of line",
    "F1              Show this help",
    "ESC, CTRL-C     Quit",
    "",
    "Press the Any Key to dismiss.",
];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Widget for Help {
    /// Draws the key list in a bordered box centered in `area`, cut down to
    /// fit if `area` is too small
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = TEXT.iter().copied().map(Line::raw).collect::<Text<'_>>();
        let box_width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let box_height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let [column] = Layout::horizontal([box_width])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::vertical([box_height])
            .flex(Flex::Center)
            .areas(column);
        Clear.render(popup, buf);
        Paragraph::new(text)
            .block(Block::bordered().title(Line::raw(" Commands ").centered()))
            .style(self.0)
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::HELP_STYLE;
    use ratatui::buffer::Cell;

    #[test]
    fn help_is_centered() {
        let area = Rect::new(0, 0, 45, 12);
        let mut buffer = Buffer::empty(area);
        Help(HELP_STYLE).render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "  ┌────────────── Commands ───────────────┐  ",
            "  │Typing edits the notes, which are saved│  ",
            "  │as you type.  The notes panel is shown │  ",
            "  │once the window is over 400×400 pixels.│  ",
            "  │                                       │  ",
            "  │ARROWS          Move the cursor        │  ",
            "  │HOME, END       Start/end of line      │  ",
            "  │F1              Show this help         │  ",
            "  │ESC, CTRL-C     Quit                   │  ",
            "  │                                       │  ",
            "  │Press the Any Key to dismiss.          │  ",
            "  └───────────────────────────────────────┘  ",
        ]);
        expected.set_style(Rect::new(2, 0, 41, 12), HELP_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn help_is_clipped_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buffer = Buffer::filled(area, Cell::new("x"));
        Help(HELP_STYLE).render(area, &mut buffer);
        assert_eq!(buffer[(0, 0)].symbol(), "┌");
        assert_eq!(buffer[(19, 4)].symbol(), "┘");
        assert_eq!(buffer[(1, 1)].symbol(), "T");
        assert_eq!(Some(buffer[(10, 2)].bg), HELP_STYLE.bg);
    }
}
