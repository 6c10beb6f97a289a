//! Options to sentence.
//!
//! The sentence is built clause by clause: frequency, weekdays, positions,
//! hours, until, count. Every word comes from the profile; this module only
//! decides which terms appear and in what order.

use std::fmt;

use recurtext_core::rule::{Date, Frequency, Options, Weekday, WeekdayNum};
use thiserror::Error;

use crate::date::{DateFormatter, DefaultDateFormat};
use crate::language::{Language, Term};

const MAX_MONTHDAY: u8 = 31;
const MAX_WEEK_POSITION: u8 = 53;
const MAX_HOUR: u8 = 23;

/// Options the generator refuses to render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("options have no frequency")]
    MissingFrequency,

    #[error("options set both a count and an until date")]
    CountUntilConflict,

    #[error("until date {0} is not a calendar date")]
    InvalidUntil(Date),

    #[error("{field} {value} is out of range")]
    OutOfRange { field: &'static str, value: i64 },
}

pub type TextResult<T> = Result<T, TextError>;

/// Whether every selector in the options has a sentence form.
///
/// Minute and second selectors do not; sentences for such options end with
/// the profile's approximate marker.
#[must_use]
pub fn is_fully_convertible(options: &Options) -> bool {
    options.by_minute.is_empty() && options.by_second.is_empty()
}

/// Sentence generator bound to a language profile.
#[derive(Clone, Copy)]
pub struct ToText<'l> {
    language: &'l Language,
    date_formatter: Option<&'l dyn DateFormatter>,
}

impl fmt::Debug for ToText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToText")
            .field("language", &self.language.code())
            .field("date_formatter", &self.date_formatter.is_some())
            .finish()
    }
}

impl<'l> ToText<'l> {
    #[must_use]
    pub fn new(language: &'l Language) -> Self {
        Self {
            language,
            date_formatter: None,
        }
    }

    /// Renders until dates with a custom formatter instead of the profile's
    /// default layout.
    #[must_use]
    pub fn with_date_formatter(mut self, date_formatter: &'l dyn DateFormatter) -> Self {
        self.date_formatter = Some(date_formatter);
        self
    }

    /// Renders options as a sentence.
    ///
    /// ## Errors
    /// Returns an error if the options have no frequency, set both a count
    /// and an until date, carry an until date that is not on the calendar, or
    /// hold an interval, count, monthday, position or hour with no sentence
    /// form.
    #[tracing::instrument(skip(self, options), fields(language = self.language.code(), rule = %options))]
    pub fn render(&self, options: &Options) -> TextResult<String> {
        let Some(freq) = options.freq else {
            tracing::warn!("Options have no frequency");
            return Err(TextError::MissingFrequency);
        };
        if options.count.is_some() && options.until.is_some() {
            tracing::warn!("Options set both count and until");
            return Err(TextError::CountUntilConflict);
        }
        check_ranges(options).inspect_err(|err| tracing::warn!(%err, "Options out of range"))?;

        let mut words = Words::new(self.language);
        let interval = options.effective_interval();

        let plain = plain_weekdays(&options.by_weekday);
        let weekday_clause = self.frequency(&mut words, freq, interval, &plain);
        self.positions(&mut words, options, weekday_clause);

        if !options.by_hour.is_empty() {
            let mut hours = options.by_hour.clone();
            hours.sort_unstable();
            hours.dedup();
            let hours: Vec<String> = hours.iter().map(ToString::to_string).collect();
            words.term(Term::At);
            words.list(&hours);
        }

        if let Some(date) = options.until {
            words.term(Term::Until);
            words.push(self.date(date)?);
        }

        if let Some(count) = options.count {
            words.term(Term::For);
            words.push(count.to_string());
            words.counted(Term::Time, count);
        }

        if !is_fully_convertible(options) {
            words.term(Term::Approximate);
        }

        let text = words.finish();
        tracing::debug!(%text, "Rendered sentence");
        Ok(text)
    }

    /// Frequency clause and plain weekday clause. Returns whether a weekday
    /// list was written.
    fn frequency(
        &self,
        words: &mut Words<'_>,
        freq: Frequency,
        interval: u32,
        plain: &[Weekday],
    ) -> bool {
        words.term(Term::Every);
        if interval > 1 {
            words.push(interval.to_string());
        }

        if plain.len() == Weekday::all().len() {
            words.counted(Term::Day, interval);
            return false;
        }

        if plain == Weekday::WORKDAYS.as_slice() {
            if interval == 1 {
                words.counted(Term::Weekday, 1);
            } else {
                words.counted(unit(freq), interval);
                words.term(Term::On);
                words.counted(Term::Weekday, 2);
            }
            return false;
        }

        words.counted(unit(freq), interval);
        if plain.is_empty() {
            return false;
        }

        let names: Vec<&str> = plain
            .iter()
            .map(|day| self.language.day_name(*day))
            .collect();
        words.term(Term::On);
        words.push(names.join(", "));
        true
    }

    /// Monthdays and positioned weekdays.
    fn positions(&self, words: &mut Words<'_>, options: &Options, after_weekdays: bool) {
        let mut monthdays = options.by_monthday.clone();
        monthdays.sort_unstable();
        monthdays.dedup();

        let mut positioned: Vec<(i8, Weekday)> = options
            .by_weekday
            .iter()
            .filter_map(|day| day.ordinal.map(|n| (n, day.weekday)))
            .collect();
        positioned.sort_unstable_by_key(|(n, day)| (day.index(), *n));
        positioned.dedup();

        if monthdays.is_empty() && positioned.is_empty() {
            return;
        }

        let items: Vec<String> = monthdays
            .iter()
            .map(|n| self.ordinal(*n))
            .chain(positioned.iter().map(|(n, day)| {
                format!("{} {}", self.ordinal(*n), self.language.day_name(*day))
            }))
            .collect();

        if after_weekdays {
            words.term(Term::And);
        }
        words.term(Term::OnThe);
        words.list(&items);
    }

    /// `3rd`, `last`, `2nd last`.
    fn ordinal(&self, n: i8) -> String {
        if n == -1 {
            return self.language.text(Term::Last, 1);
        }

        let abs = u32::from(n.unsigned_abs());
        let ordinal = format!(
            "{abs}{}",
            self.language.text(Term::ordinal_suffix(abs), 1)
        );
        if n < 0 {
            format!("{ordinal} {}", self.language.text(Term::Last, 1))
        } else {
            ordinal
        }
    }

    fn date(&self, date: Date) -> TextResult<String> {
        let month = self
            .language
            .month_name(date.month)
            .filter(|_| date.is_valid())
            .ok_or(TextError::InvalidUntil(date))?;

        Ok(match self.date_formatter {
            Some(formatter) => formatter.format(date.year, month, date.day),
            None => DefaultDateFormat(self.language.date_order()).format(date.year, month, date.day),
        })
    }
}

/// Values the parser could not read back: zero interval or count, monthday 0
/// or past 31, position 0 or past 53, hour past 23.
fn check_ranges(options: &Options) -> TextResult<()> {
    let out_of_range = |field: &'static str, value: i64| TextError::OutOfRange { field, value };

    if let Some(interval) = options.interval.filter(|n| *n == 0) {
        return Err(out_of_range("interval", i64::from(interval)));
    }
    if let Some(count) = options.count.filter(|n| *n == 0) {
        return Err(out_of_range("count", i64::from(count)));
    }
    if let Some(day) = options
        .by_monthday
        .iter()
        .find(|n| **n == 0 || n.unsigned_abs() > MAX_MONTHDAY)
    {
        return Err(out_of_range("monthday", i64::from(*day)));
    }
    if let Some(n) = options
        .by_weekday
        .iter()
        .filter_map(|day| day.ordinal)
        .find(|n| *n == 0 || n.unsigned_abs() > MAX_WEEK_POSITION)
    {
        return Err(out_of_range("position", i64::from(n)));
    }
    if let Some(hour) = options.by_hour.iter().find(|n| **n > MAX_HOUR) {
        return Err(out_of_range("hour", i64::from(*hour)));
    }
    Ok(())
}

const fn unit(freq: Frequency) -> Term {
    match freq {
        Frequency::Yearly => Term::Year,
        Frequency::Monthly => Term::Month,
        Frequency::Weekly => Term::Week,
        Frequency::Daily => Term::Day,
        Frequency::Hourly => Term::Hour,
        Frequency::Minutely => Term::Minute,
        Frequency::Secondly => Term::Second,
    }
}

/// Weekdays without a position, in day-index order.
fn plain_weekdays(by_weekday: &[WeekdayNum]) -> Vec<Weekday> {
    let mut days: Vec<Weekday> = by_weekday
        .iter()
        .filter(|day| day.ordinal.is_none())
        .map(|day| day.weekday)
        .collect();
    days.sort_unstable();
    days.dedup();
    days
}

/// Sentence under construction.
struct Words<'l> {
    language: &'l Language,
    parts: Vec<String>,
}

impl<'l> Words<'l> {
    fn new(language: &'l Language) -> Self {
        Self {
            language,
            parts: Vec::new(),
        }
    }

    fn push(&mut self, part: String) {
        self.parts.push(part);
    }

    fn term(&mut self, term: Term) {
        self.counted(term, 1);
    }

    fn counted(&mut self, term: Term, count: u32) {
        let text = self.language.text(term, count);
        self.parts.push(text);
    }

    /// `a`, `a and b`, `a, b and c`.
    fn list(&mut self, items: &[String]) {
        let text = match items {
            [] => return,
            [one] => one.clone(),
            [init @ .., last] => format!(
                "{} {} {last}",
                init.join(", "),
                self.language.text(Term::And, 1)
            ),
        };
        self.parts.push(text);
    }

    fn finish(self) -> String {
        self.parts.join(" ")
    }
}
