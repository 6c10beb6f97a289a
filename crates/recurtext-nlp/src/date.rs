//! Hooks for rendering and reading the until date.

use recurtext_core::rule::Date;

use crate::language::{DateOrder, Language};

/// Renders an until date.
///
/// Receives the year, the profile's name for the month and the day of month.
pub trait DateFormatter: Send + Sync {
    fn format(&self, year: u16, month: &str, day: u8) -> String;
}

impl<F> DateFormatter for F
where
    F: Fn(u16, &str, u8) -> String + Send + Sync,
{
    fn format(&self, year: u16, month: &str, day: u8) -> String {
        self(year, month, day)
    }
}

/// Layout used when no formatter is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultDateFormat(pub DateOrder);

impl DateFormatter for DefaultDateFormat {
    fn format(&self, year: u16, month: &str, day: u8) -> String {
        match self.0 {
            DateOrder::MonthDayYear => format!("{month} {day}, {year}"),
            DateOrder::DayMonthYear => format!("{day} {month} {year}"),
        }
    }
}

/// Reads an until date from free text, the inverse of a custom
/// `DateFormatter`.
///
/// The parser hands over everything after the until keyword; returning
/// `None` rejects the sentence.
pub trait DateParser: Send + Sync {
    fn parse_date(&self, text: &str, language: &Language) -> Option<Date>;
}

impl<F> DateParser for F
where
    F: Fn(&str, &Language) -> Option<Date> + Send + Sync,
{
    fn parse_date(&self, text: &str, language: &Language) -> Option<Date> {
        self(text, language)
    }
}

/// Finds the month whose localized name is `name`, ignoring case.
#[must_use]
pub fn month_by_name(language: &Language, name: &str) -> Option<u8> {
    let name = name.to_lowercase();
    (1..=12).find(|&month| {
        language
            .month_name(month)
            .is_some_and(|candidate| candidate.to_lowercase() == name)
    })
}
