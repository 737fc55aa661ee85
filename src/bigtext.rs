use crate::theme::BIG_LABEL_STYLE;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Width of a glyph in font pixels
const GLYPH_WIDTH: u16 = 3;

/// Height of a glyph in font pixels
const GLYPH_HEIGHT: u16 = 5;

/// Each multiple of this many points adds one cell to the edge of a font
/// pixel
const POINTS_PER_STEP: u16 = 25;

const FILL: char = '█';

#[rustfmt::skip]
static DIGITS: [[&str; 5]; 10] = [
    ["###", "# #", "# #", "# #", "###"],
    [" # ", "## ", " # ", " # ", "###"],
    ["###", "  #", "###", "#  ", "###"],
    ["###", "  #", "###", "  #", "###"],
    ["# #", "# #", "###", "  #", "  #"],
    ["###", "#  ", "###", "  #", "###"],
    ["###", "#  ", "###", "# #", "###"],
    ["###", "  #", "  #", "  #", "  #"],
    ["###", "# #", "###", "# #", "###"],
    ["###", "# #", "###", "  #", "###"],
];

#[rustfmt::skip]
static LETTERS: [[&str; 5]; 26] = [
    ["###", "# #", "###", "# #", "# #"], // A
    ["## ", "# #", "## ", "# #", "## "],
    ["###", "#  ", "#  ", "#  ", "###"],
    ["## ", "# #", "# #", "# #", "## "],
    ["###", "#  ", "## ", "#  ", "###"],
    ["###", "#  ", "## ", "#  ", "#  "],
    ["###", "#  ", "# #", "# #", "###"],
    ["# #", "# #", "###", "# #", "# #"],
    ["###", " # ", " # ", " # ", "###"],
    ["  #", "  #", "  #", "# #", "###"],
    ["# #", "# #", "## ", "# #", "# #"],
    ["#  ", "#  ", "#  ", "#  ", "###"],
    ["# #", "###", "###", "# #", "# #"], // M
    ["## ", "# #", "# #", "# #", "# #"],
    ["###", "# #", "# #", "# #", "###"],
    ["###", "# #", "###", "#  ", "#  "],
    ["###", "# #", "# #", "###", "  #"],
    ["## ", "# #", "## ", "# #", "# #"],
    ["###", "#  ", "###", "  #", "###"],
    ["###", " # ", " # ", " # ", " # "],
    ["# #", "# #", "# #", "# #", "###"],
    ["# #", "# #", "# #", "# #", " # "],
    ["# #", "# #", "###", "###", "# #"],
    ["# #", "# #", " # ", "# #", "# #"],
    ["# #", "# #", " # ", " # ", " # "],
    ["###", "  #", " # ", "#  ", "###"], // Z
];

static SPACE: [&str; 5] = ["   "; 5];

fn glyph(ch: char) -> Option<&'static [&'static str; 5]> {
    let ch = ch.to_ascii_uppercase();
    match ch {
        '0'..='9' => DIGITS.get(usize::from(u8::try_from(ch).ok()? - b'0')),
        'A'..='Z' => LETTERS.get(usize::from(u8::try_from(ch).ok()? - b'A')),
        ' ' => Some(&SPACE),
        _ => None,
    }
}

/// Where a label's text sits within its area
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Placement {
    Top,
    Center,
    Bottom,
}

/// A calendar label drawn in block glyphs sized from a point size.
///
/// The glyphs are magnified as far as the point size asks for, or less if
/// that would not fit the area.  If even unmagnified glyphs don't fit, the
/// text is drawn as ordinary bold text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct BigLabel<'a> {
    text: &'a str,
    point_size: u16,
    placement: Placement,
}

impl<'a> BigLabel<'a> {
    pub(crate) fn new(text: &'a str, point_size: u16, placement: Placement) -> BigLabel<'a> {
        BigLabel {
            text,
            point_size,
            placement,
        }
    }

    fn requested_scale(&self) -> u16 {
        (self.point_size / POINTS_PER_STEP).max(1)
    }

    /// Cells taken up by the text at magnification `scale`
    fn size_at(&self, scale: u16) -> (u16, u16) {
        let chars = u16::try_from(self.text.chars().count()).unwrap_or(u16::MAX);
        let width = chars
            .saturating_mul(GLYPH_WIDTH + 1)
            .saturating_sub(1)
            .saturating_mul(scale);
        (width, GLYPH_HEIGHT.saturating_mul(scale))
    }

    /// The magnification the label will be drawn at in `area`, or `None` if
    /// it will be drawn as plain text
    pub(crate) fn fitted_scale(&self, area: Rect) -> Option<u16> {
        if self.text.is_empty() || self.text.chars().any(|ch| glyph(ch).is_none()) {
            return None;
        }
        (1..=self.requested_scale()).rev().find(|&scale| {
            let (width, height) = self.size_at(scale);
            width <= area.width && height <= area.height
        })
    }

    fn place(&self, area: Rect, width: u16, height: u16) -> Rect {
        let x = area.x + (area.width.saturating_sub(width) / 2);
        let y = match self.placement {
            Placement::Top => area.y,
            Placement::Center => area.y + (area.height.saturating_sub(height) / 2),
            Placement::Bottom => area.y + area.height.saturating_sub(height),
        };
        Rect {
            x,
            y,
            width: width.min(area.width),
            height: height.min(area.height),
        }
    }

    fn render_glyphs(&self, area: Rect, buf: &mut Buffer, scale: u16) {
        let (width, height) = self.size_at(scale);
        let target = self.place(area, width, height);
        buf.set_style(target, BIG_LABEL_STYLE);
        let mut left = target.x;
        for ch in self.text.chars() {
            let Some(rows) = glyph(ch) else {
                continue;
            };
            for (row, bits) in std::iter::zip(0u16.., rows) {
                for (col, bit) in std::iter::zip(0u16.., bits.chars()) {
                    if bit == '#' {
                        let px = Rect {
                            x: left + col * scale,
                            y: target.y + row * scale,
                            width: scale,
                            height: scale,
                        };
                        fill(px, buf);
                    }
                }
            }
            left += (GLYPH_WIDTH + 1) * scale;
        }
    }
}

fn fill(area: Rect, buf: &mut Buffer) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(FILL);
            }
        }
    }
}

impl Widget for BigLabel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        if let Some(scale) = self.fitted_scale(area) {
            self.render_glyphs(area, buf, scale);
        } else {
            let line = Line::styled(self.text, BIG_LABEL_STYLE);
            let width = u16::try_from(line.width()).unwrap_or(u16::MAX);
            let target = self.place(area, width, 1);
            Paragraph::new(line).render(target, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_follows_point_size() {
        let area = Rect::new(0, 0, 200, 100);
        for (points, scale) in [(25, 1), (40, 1), (49, 1), (50, 2), (135, 5), (160, 6)] {
            let label = BigLabel::new("Jan", points, Placement::Center);
            assert_eq!(label.fitted_scale(area), Some(scale), "{points} points");
        }
    }

    #[test]
    fn scale_shrinks_to_fit() {
        // "05" is 7 cells wide and 5 tall per unit of scale
        let label = BigLabel::new("05", 160, Placement::Center);
        assert_eq!(label.fitted_scale(Rect::new(0, 0, 28, 40)), Some(4));
        assert_eq!(label.fitted_scale(Rect::new(0, 0, 100, 14)), Some(2));
        assert_eq!(label.fitted_scale(Rect::new(0, 0, 7, 5)), Some(1));
        assert_eq!(label.fitted_scale(Rect::new(0, 0, 6, 5)), None);
    }

    #[test]
    fn unknown_chars_are_plain() {
        let label = BigLabel::new("Mär", 150, Placement::Center);
        assert_eq!(label.fitted_scale(Rect::new(0, 0, 200, 100)), None);
        assert_eq!(
            BigLabel::new("", 150, Placement::Center).fitted_scale(Rect::new(0, 0, 200, 100)),
            None
        );
    }

    #[test]
    fn render_bottom_aligned() {
        let area = Rect::new(0, 0, 9, 6);
        let mut buffer = Buffer::empty(area);
        BigLabel::new("05", 50, Placement::Bottom).render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "         ",
            " ███ ███ ",
            " █ █ █   ",
            " █ █ ███ ",
            " █ █   █ ",
            " ███ ███ ",
        ]);
        expected.set_style(Rect::new(1, 1, 7, 5), BIG_LABEL_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn render_doubled() {
        let area = Rect::new(0, 0, 6, 10);
        let mut buffer = Buffer::empty(area);
        BigLabel::new("7", 50, Placement::Top).render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "██████",
            "██████",
            "    ██",
            "    ██",
            "    ██",
            "    ██",
            "    ██",
            "    ██",
            "    ██",
            "    ██",
        ]);
        expected.set_style(area, BIG_LABEL_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn render_plain_fallback() {
        let area = Rect::new(0, 0, 12, 3);
        let mut buffer = Buffer::empty(area);
        BigLabel::new("Wednesday", 25, Placement::Top).render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Wednesday  ",
            "            ",
            "            ",
        ]);
        expected.set_style(Rect::new(1, 0, 9, 1), BIG_LABEL_STYLE);
        assert_eq!(buffer, expected);
    }
}
