use std::ops::Index;

/// Window sides must both exceed this many pixels for the notes panel to be
/// shown
const NOTES_MIN_SIDE: i32 = 400;

/// Nominal pixel size of a terminal cell, used when the terminal does not
/// report its pixel dimensions
const CELL_WIDTH_PX: i32 = 8;
const CELL_HEIGHT_PX: i32 = 16;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum LabelId {
    Month,
    DayOfMonth,
    Weekday,
}

impl LabelId {
    pub(crate) const ALL: [LabelId; 3] = [LabelId::Month, LabelId::DayOfMonth, LabelId::Weekday];

    pub(crate) fn profile(self) -> FontSizeProfile {
        match self {
            LabelId::Month => FontSizeProfile { min: 40, max: 150 },
            LabelId::DayOfMonth => FontSizeProfile { min: 50, max: 160 },
            LabelId::Weekday => FontSizeProfile { min: 25, max: 135 },
        }
    }

    fn index0(self) -> usize {
        match self {
            LabelId::Month => 0,
            LabelId::DayOfMonth => 1,
            LabelId::Weekday => 2,
        }
    }
}

/// Inclusive bounds on a label's point size
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FontSizeProfile {
    pub(crate) min: u16,
    pub(crate) max: u16,
}

impl FontSizeProfile {
    /// Point size for a window `width` pixels wide: 3% of the width, rounded
    /// down and clamped to the profile
    pub(crate) fn size_for_width(self, width: i32) -> u16 {
        let raw = (i64::from(width) * 3).div_euclid(100);
        let clamped = raw.clamp(i64::from(self.min), i64::from(self.max));
        u16::try_from(clamped).unwrap_or(self.max)
    }
}

/// Point size of each calendar label
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FontSizes([u16; 3]);

impl FontSizes {
    pub(crate) fn for_width(width: i32) -> FontSizes {
        FontSizes(LabelId::ALL.map(|label| label.profile().size_for_width(width)))
    }
}

impl Default for FontSizes {
    fn default() -> FontSizes {
        FontSizes(LabelId::ALL.map(|label| label.profile().min))
    }
}

impl Index<LabelId> for FontSizes {
    type Output = u16;

    fn index(&self, label: LabelId) -> &u16 {
        &self.0[label.index0()]
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct WindowDimensions {
    pub(crate) width: i32,
    pub(crate) height: i32,
}

impl WindowDimensions {
    pub(crate) fn new(width: i32, height: i32) -> WindowDimensions {
        WindowDimensions { width, height }
    }

    /// Window size in pixels as reported by the terminal, or estimated from
    /// the cell grid if the terminal reports zero pixels
    pub(crate) fn from_terminal(columns: u16, rows: u16, width_px: u16, height_px: u16) -> Self {
        let width = if width_px == 0 {
            i32::from(columns) * CELL_WIDTH_PX
        } else {
            i32::from(width_px)
        };
        let height = if height_px == 0 {
            i32::from(rows) * CELL_HEIGHT_PX
        } else {
            i32::from(height_px)
        };
        WindowDimensions::new(width, height)
    }

    pub(crate) fn notes_visible(self) -> bool {
        self.width > NOTES_MIN_SIDE && self.height > NOTES_MIN_SIDE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_visibility_boundary() {
        assert!(WindowDimensions::new(401, 401).notes_visible());
        assert!(!WindowDimensions::new(400, 401).notes_visible());
        assert!(!WindowDimensions::new(401, 400).notes_visible());
        assert!(!WindowDimensions::new(0, 0).notes_visible());
        assert!(!WindowDimensions::new(-500, 900).notes_visible());
        assert!(WindowDimensions::new(1920, 1080).notes_visible());
    }

    #[test]
    fn day_of_month_stays_in_range() {
        for width in (-2000..20000).step_by(7) {
            let size = FontSizes::for_width(width)[LabelId::DayOfMonth];
            let expected = ((width * 3).div_euclid(100)).clamp(50, 160);
            assert_eq!(i32::from(size), expected, "width = {width}");
            assert!((50..=160).contains(&size));
        }
    }

    #[test]
    fn narrow_window_clamps_up() {
        let sizes = FontSizes::for_width(1000);
        assert_eq!(sizes[LabelId::Month], 40);
        assert_eq!(sizes[LabelId::DayOfMonth], 50);
        assert_eq!(sizes[LabelId::Weekday], 30);
    }

    #[test]
    fn wide_window_clamps_down() {
        let sizes = FontSizes::for_width(6000);
        assert_eq!(sizes[LabelId::Month], 150);
        assert_eq!(sizes[LabelId::DayOfMonth], 160);
        assert_eq!(sizes[LabelId::Weekday], 135);
    }

    #[test]
    fn mid_range_rounds_down() {
        // 3% of 2999 is 89.97
        let sizes = FontSizes::for_width(2999);
        assert_eq!(sizes[LabelId::Month], 89);
        assert_eq!(sizes[LabelId::DayOfMonth], 89);
        assert_eq!(sizes[LabelId::Weekday], 89);
    }

    #[test]
    fn degenerate_widths_use_minimums() {
        assert_eq!(FontSizes::for_width(0), FontSizes::default());
        assert_eq!(FontSizes::for_width(-40), FontSizes::default());
        assert_eq!(FontSizes::for_width(i32::MIN), FontSizes::default());
        assert_eq!(FontSizes::for_width(i32::MAX), FontSizes::for_width(6000));
    }

    #[test]
    fn pixel_size_falls_back_to_cells() {
        assert_eq!(
            WindowDimensions::from_terminal(80, 24, 0, 0),
            WindowDimensions::new(640, 384)
        );
        assert_eq!(
            WindowDimensions::from_terminal(80, 24, 1200, 900),
            WindowDimensions::new(1200, 900)
        );
    }
}
