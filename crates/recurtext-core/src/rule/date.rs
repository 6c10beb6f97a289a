//! Calendar DATE value used as the inclusive end of a recurrence.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::{CoreError, CoreResult};

/// A calendar date without time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    /// Year (e.g., 2012).
    pub year: u16,
    /// Month (1-12).
    pub month: u8,
    /// Day of month (1-31).
    pub day: u8,
}

impl Date {
    /// Creates a new date without checking it.
    #[must_use]
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a date, rejecting days that do not exist in the given month.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidDate` if the date is not on the calendar.
    pub fn try_new(year: u16, month: u8, day: u8) -> CoreResult<Self> {
        let date = Self { year, month, day };
        if date.is_valid() {
            Ok(date)
        } else {
            Err(CoreError::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02} is not a calendar date"
            )))
        }
    }

    /// Returns true if the date exists on the proleptic Gregorian calendar.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.to_naive().is_some()
    }

    /// Converts to a `chrono` date.
    #[must_use]
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = CoreError;

    fn try_from(value: NaiveDate) -> CoreResult<Self> {
        let year = u16::try_from(value.year())
            .map_err(|e| CoreError::InvalidDate(format!("year {}: {e}", value.year())))?;
        // month() and day() are at most 12 and 31
        let month = u8::try_from(value.month())
            .map_err(|e| CoreError::InvalidDate(format!("month: {e}")))?;
        let day =
            u8::try_from(value.day()).map_err(|e| CoreError::InvalidDate(format!("day: {e}")))?;
        Ok(Self { year, month, day })
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_basic_format() {
        assert_eq!(Date::new(2012, 11, 10).to_string(), "20121110");
    }

    #[test]
    fn try_new_rejects_impossible_day() {
        assert!(Date::try_new(2023, 2, 29).is_err());
        assert!(Date::try_new(2024, 2, 29).is_ok());
        assert!(Date::try_new(2024, 13, 1).is_err());
    }

    #[test]
    fn converts_from_chrono() {
        let naive = NaiveDate::from_ymd_opt(2026, 1, 23).unwrap();
        let date = Date::try_from(naive).unwrap();
        assert_eq!(date, Date::new(2026, 1, 23));
        assert_eq!(date.to_naive(), Some(naive));
    }
}
