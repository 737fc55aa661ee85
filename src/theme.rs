use ratatui::style::{Color, Modifier, Style};

/// Background colours from the top of the window to the bottom, evenly
/// spaced
const GRADIENT_STOPS: [(u8, u8, u8); 6] = [
    (254, 119, 213),
    (255, 130, 204),
    (255, 147, 182),
    (255, 140, 151),
    (255, 134, 129),
    (255, 136, 115),
];

pub(crate) const LABEL_STYLE: Style = Style::new().fg(Color::White);

pub(crate) const BIG_LABEL_STYLE: Style = LABEL_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const HELP_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) mod notes {
    use super::*;

    pub(crate) const PLACEHOLDER_STYLE: Style = Style::new().fg(Color::DarkGray);

    pub(crate) const WARNING_STYLE: Style = Style::new()
        .fg(Color::Yellow)
        .bg(Color::Black)
        .add_modifier(Modifier::BOLD);
}

/// Background colour of row `y` of a window `height` rows tall
pub(crate) fn gradient_color(y: u16, height: u16) -> Color {
    const SCALE: u32 = 1000;
    let last_row = u32::from(height.saturating_sub(1)).max(1);
    let segments = u32::try_from(GRADIENT_STOPS.len() - 1).unwrap_or(1);
    let pos = u32::from(y).min(last_row) * segments * SCALE / last_row;
    let seg = usize::try_from(pos / SCALE).unwrap_or(0);
    let frac = pos % SCALE;
    let Some(&(r0, g0, b0)) = GRADIENT_STOPS.get(seg) else {
        return Color::Rgb(255, 136, 115);
    };
    let (r1, g1, b1) = GRADIENT_STOPS.get(seg + 1).copied().unwrap_or((r0, g0, b0));
    let mix = |a: u8, b: u8| {
        let v = (u32::from(a) * (SCALE - frac) + u32::from(b) * frac) / SCALE;
        u8::try_from(v).unwrap_or(u8::MAX)
    };
    Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}
