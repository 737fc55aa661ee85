use time::{Date, Month, OffsetDateTime, UtcOffset, Weekday};

/// Three-letter weekday abbreviations and the names they expand to
static WEEKDAY_NAMES: [(&str, &str); 7] = [
    ("Mon", "Monday"),
    ("Tue", "Tuesday"),
    ("Wed", "Wednesday"),
    ("Thu", "Thursday"),
    ("Fri", "Friday"),
    ("Sat", "Saturday"),
    ("Sun", "Sunday"),
];

pub(crate) trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// The system clock, shifted to a local UTC offset that was determined once
/// at startup.
///
/// `time` refuses to look up the local offset once the process has more
/// than one thread, so it has to be captured before logging spawns its
/// writer thread.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct LocalClock {
    offset: UtcOffset,
}

impl LocalClock {
    pub(crate) fn new(offset: UtcOffset) -> LocalClock {
        LocalClock { offset }
    }
}

impl Clock for LocalClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}

/// The three strings shown by the calendar labels
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DisplayState {
    pub(crate) month: String,
    pub(crate) weekday: String,
    pub(crate) day_of_month: String,
}

impl DisplayState {
    pub(crate) fn for_date(date: Date) -> DisplayState {
        let weekday = full_weekday_name(weekday_abbrev(date.weekday()))
            .unwrap_or_default()
            .to_owned();
        DisplayState {
            month: month_abbrev(date.month()).to_owned(),
            weekday,
            day_of_month: format!("{:02}", date.day()),
        }
    }

    pub(crate) fn now<C: Clock>(clock: &C) -> DisplayState {
        DisplayState::for_date(clock.now().date())
    }
}

/// Expand a three-letter weekday abbreviation (e.g., "Wed") to its full name
pub(crate) fn full_weekday_name(abbrev: &str) -> Option<&'static str> {
    WEEKDAY_NAMES
        .iter()
        .find(|&&(ab, _)| ab == abbrev)
        .map(|&(_, name)| name)
}

fn weekday_abbrev(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
