//! Recurrence options: the structured side of the text conversion.

use std::fmt;

use super::Date;

/// Recurrence frequency (RFC 5545 §3.3.10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Yearly,
    Monthly,
    Weekly,
    Daily,
    Hourly,
    Minutely,
    Secondly,
}

impl Frequency {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yearly => "YEARLY",
            Self::Monthly => "MONTHLY",
            Self::Weekly => "WEEKLY",
            Self::Daily => "DAILY",
            Self::Hourly => "HOURLY",
            Self::Minutely => "MINUTELY",
            Self::Secondly => "SECONDLY",
        }
    }

    /// Parses a frequency from its canonical name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "YEARLY" => Self::Yearly,
            "MONTHLY" => Self::Monthly,
            "WEEKLY" => Self::Weekly,
            "DAILY" => Self::Daily,
            "HOURLY" => Self::Hourly,
            "MINUTELY" => Self::Minutely,
            "SECONDLY" => Self::Secondly,
            _ => return None,
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Day of the week, indexed from Monday (0) to Sunday (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Monday through Friday.
    pub const WORKDAYS: [Self; 5] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Returns the two-letter abbreviation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "MO",
            Self::Tuesday => "TU",
            Self::Wednesday => "WE",
            Self::Thursday => "TH",
            Self::Friday => "FR",
            Self::Saturday => "SA",
            Self::Sunday => "SU",
        }
    }

    /// Parses a weekday from a two-letter abbreviation (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "MO" => Self::Monday,
            "TU" => Self::Tuesday,
            "WE" => Self::Wednesday,
            "TH" => Self::Thursday,
            "FR" => Self::Friday,
            "SA" => Self::Saturday,
            "SU" => Self::Sunday,
            _ => return None,
        })
    }

    /// Returns the day index, Monday = 0.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the weekday with the given index, Monday = 0.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        Some(match index {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            6 => Self::Sunday,
            _ => return None,
        })
    }

    /// Returns all weekdays in index order (Monday through Sunday).
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weekday with optional occurrence number.
///
/// Used in BYDAY rule part. Examples:
/// - `MO` - every Monday
/// - `+1MO` - first Monday of the month/year
/// - `-1FR` - last Friday of the month/year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdayNum {
    /// Optional occurrence number (-53 to 53, excluding 0).
    pub ordinal: Option<i8>,
    /// The day of the week.
    pub weekday: Weekday,
}

impl WeekdayNum {
    /// Creates a weekday occurrence without an ordinal.
    #[must_use]
    pub const fn every(weekday: Weekday) -> Self {
        Self {
            ordinal: None,
            weekday,
        }
    }

    /// Creates a weekday occurrence with an ordinal.
    ///
    /// ## Panics
    ///
    /// Panics if ordinal is 0 or outside the range -53..=53.
    #[must_use]
    pub fn nth(ordinal: i8, weekday: Weekday) -> Self {
        assert!(ordinal != 0 && (-53..=53).contains(&ordinal));
        Self {
            ordinal: Some(ordinal),
            weekday,
        }
    }

    /// Ordering key: plain days first, then by day index, then by position.
    fn sort_key(self) -> (bool, usize, i8) {
        (
            self.ordinal.is_some(),
            self.weekday.index(),
            self.ordinal.unwrap_or(0),
        )
    }
}

impl fmt::Display for WeekdayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.ordinal {
            write!(f, "{n:+}")?;
        }
        write!(f, "{}", self.weekday)
    }
}

/// Recurrence options (RFC 5545 §3.3.10, restricted to the parts the text
/// grammar can talk about).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    /// Recurrence frequency (required).
    pub freq: Option<Frequency>,

    /// Recurrence interval (default: 1).
    pub interval: Option<u32>,

    /// Inclusive end date (mutually exclusive with count).
    pub until: Option<Date>,

    /// Number of occurrences (mutually exclusive with until).
    pub count: Option<u32>,

    /// By-second list (0-60, 60 for leap second).
    pub by_second: Vec<u8>,

    /// By-minute list (0-59).
    pub by_minute: Vec<u8>,

    /// By-hour list (0-23).
    pub by_hour: Vec<u8>,

    /// By-day list with optional occurrence numbers.
    pub by_weekday: Vec<WeekdayNum>,

    /// By-monthday list (-31 to 31, excluding 0).
    pub by_monthday: Vec<i8>,
}

impl Options {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with the given frequency.
    #[must_use]
    pub fn with_freq(freq: Frequency) -> Self {
        Self {
            freq: Some(freq),
            ..Self::default()
        }
    }

    /// Creates a yearly recurrence.
    #[must_use]
    pub fn yearly() -> Self {
        Self::with_freq(Frequency::Yearly)
    }

    /// Creates a monthly recurrence.
    #[must_use]
    pub fn monthly() -> Self {
        Self::with_freq(Frequency::Monthly)
    }

    /// Creates a weekly recurrence.
    #[must_use]
    pub fn weekly() -> Self {
        Self::with_freq(Frequency::Weekly)
    }

    /// Creates a daily recurrence.
    #[must_use]
    pub fn daily() -> Self {
        Self::with_freq(Frequency::Daily)
    }

    /// Creates an hourly recurrence.
    #[must_use]
    pub fn hourly() -> Self {
        Self::with_freq(Frequency::Hourly)
    }

    /// Creates a minutely recurrence.
    #[must_use]
    pub fn minutely() -> Self {
        Self::with_freq(Frequency::Minutely)
    }

    /// Creates a secondly recurrence.
    #[must_use]
    pub fn secondly() -> Self {
        Self::with_freq(Frequency::Secondly)
    }

    /// Sets the interval.
    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets the count.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self.until = None; // Mutually exclusive
        self
    }

    /// Sets the until date.
    #[must_use]
    pub fn with_until(mut self, date: Date) -> Self {
        self.until = Some(date);
        self.count = None; // Mutually exclusive
        self
    }

    /// Sets the by-day list.
    #[must_use]
    pub fn with_by_weekday(mut self, days: Vec<WeekdayNum>) -> Self {
        self.by_weekday = days;
        self
    }

    /// Sets the by-monthday list.
    #[must_use]
    pub fn with_by_monthday(mut self, days: Vec<i8>) -> Self {
        self.by_monthday = days;
        self
    }

    /// Sets the by-hour list.
    #[must_use]
    pub fn with_by_hour(mut self, hours: Vec<u8>) -> Self {
        self.by_hour = hours;
        self
    }

    /// Returns the interval, defaulting to 1.
    #[must_use]
    pub fn effective_interval(&self) -> u32 {
        self.interval.unwrap_or(1)
    }

    /// Returns the comparison form of these options.
    ///
    /// Lists are deduplicated and put in canonical order, and an explicit
    /// interval of 1 becomes `None`. Two option values that describe the same
    /// rule compare equal once normalized.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        if out.interval == Some(1) {
            out.interval = None;
        }
        out.by_weekday.sort_by_key(|day| day.sort_key());
        out.by_weekday.dedup();
        out.by_monthday.sort_unstable();
        out.by_monthday.dedup();
        for list in [&mut out.by_hour, &mut out.by_minute, &mut out.by_second] {
            list.sort_unstable();
            list.dedup();
        }
        out
    }
}
