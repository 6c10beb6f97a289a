//! Recursive-descent parser for recurrence sentences.
//!
//! Grammar, with clauses after the frequency in any order and optionally
//! separated by commas:
//!
//! ```text
//! sentence  = frequency { [","] clause }
//! frequency = every [number] (unit | weekdays | weekday {"," weekday})
//! clause    = on | at | until | count
//! on        = ("on" ["the"] | "the") item { ("," | "on" | "the") item }
//! item      = weekday | weekdays | number | ordinal [weekday | day]
//! ordinal   = (nth | first | second | third) ["last"] | "last"
//! at        = "at" number {"," number}
//! until     = "until" date
//! count     = "for" number ["times"]
//! ```

use std::fmt;

use recurtext_core::rule::{Date, Frequency, Options, Weekday, WeekdayNum};

use super::error::{Clause, ParseError, ParseErrorKind, ParseResult};
use crate::date::DateParser;
use crate::language::{DateOrder, Language, Symbol};
use crate::lexer::{Lexer, Token};

const MAX_MONTHDAY: u8 = 31;
const MAX_WEEK_POSITION: u8 = 53;
const MAX_HOUR: u32 = 23;

/// Sentence parser bound to a language profile.
#[derive(Clone, Copy)]
pub struct Parser<'l> {
    language: &'l Language,
    date_parser: Option<&'l dyn DateParser>,
}

impl fmt::Debug for Parser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("language", &self.language.code())
            .field("date_parser", &self.date_parser.is_some())
            .finish()
    }
}

impl<'l> Parser<'l> {
    #[must_use]
    pub fn new(language: &'l Language) -> Self {
        Self {
            language,
            date_parser: None,
        }
    }

    /// Reads until dates with a custom parser instead of the profile's
    /// default date grammar.
    #[must_use]
    pub fn with_date_parser(mut self, date_parser: &'l dyn DateParser) -> Self {
        self.date_parser = Some(date_parser);
        self
    }

    /// Parses a sentence into recurrence options.
    ///
    /// ## Errors
    /// Returns a tokenization error for unrecognized text, a grammar error for
    /// tokens out of place, and a semantic error for values out of range, an
    /// invalid until date, or both a count and an until date.
    #[tracing::instrument(skip(self), fields(language = self.language.code()))]
    pub fn parse(&self, text: &str) -> ParseResult<Options> {
        let result = SentenceParser::new(text, self.language, self.date_parser)
            .and_then(SentenceParser::sentence);

        match &result {
            Ok(options) => tracing::debug!(%options, "Parsed sentence"),
            Err(err) => tracing::warn!(%err, "Could not parse sentence"),
        }

        result
    }
}

struct SentenceParser<'a> {
    lexer: Lexer<'a>,
    current: Option<Token<'a>>,
    language: &'a Language,
    date_parser: Option<&'a dyn DateParser>,
    input_len: usize,
    options: Options,
}

impl<'a> SentenceParser<'a> {
    fn new(
        text: &'a str,
        language: &'a Language,
        date_parser: Option<&'a dyn DateParser>,
    ) -> ParseResult<Self> {
        let mut lexer = Lexer::new(text, language);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            language,
            date_parser,
            input_len: text.len(),
            options: Options::new(),
        })
    }

    fn sentence(mut self) -> ParseResult<Options> {
        self.frequency()?;

        loop {
            while self.accept(Symbol::Comma)? {}
            match self.symbol() {
                None => break,
                Some(Symbol::On | Symbol::The) => self.on_clause()?,
                Some(Symbol::At) => self.at_clause()?,
                Some(Symbol::Until) => self.until_clause()?,
                Some(Symbol::For) => self.count_clause()?,
                Some(_) => return Err(self.unexpected()),
            }
        }

        Ok(self.options)
    }

    // Token stream

    fn symbol(&self) -> Option<Symbol> {
        self.current.map(|token| token.symbol)
    }

    /// Symbol of the token after the current one, without consuming anything.
    fn peek_next(&self) -> Option<Symbol> {
        self.lexer
            .clone()
            .next_token()
            .ok()
            .flatten()
            .map(|token| token.symbol)
    }

    fn advance(&mut self) -> ParseResult<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn accept(&mut self, symbol: Symbol) -> ParseResult<bool> {
        if self.symbol() == Some(symbol) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn unexpected(&self) -> ParseError {
        match self.current {
            Some(token) => ParseError::new(ParseErrorKind::UnexpectedToken, token.offset)
                .with_context(format!("found '{}'", token.text)),
            None => ParseError::new(ParseErrorKind::UnexpectedEnd, self.input_len),
        }
    }

    /// Consumes a number token.
    fn number(&mut self, clause: Clause) -> ParseResult<(u32, Token<'a>)> {
        match self.current {
            Some(token) if token.symbol == Symbol::Number => {
                self.advance()?;
                Ok((token.value.unwrap_or_default(), token))
            }
            _ => Err(self.unexpected().in_clause(clause)),
        }
    }

    // Clauses

    fn frequency(&mut self) -> ParseResult<()> {
        if !self.accept(Symbol::Every)? {
            return Err(self.unexpected().in_clause(Clause::Frequency));
        }

        if self.symbol() == Some(Symbol::Number) {
            let (interval, token) = self.number(Clause::Frequency)?;
            if interval == 0 {
                return Err(out_of_range(token, Clause::Frequency)
                    .with_context("interval must be at least 1"));
            }
            self.options.interval = Some(interval);
        }

        let unit = self.symbol();
        let freq = match unit {
            Some(Symbol::Second | Symbol::Seconds) => Frequency::Secondly,
            Some(Symbol::Minutes) => Frequency::Minutely,
            Some(Symbol::Hours) => Frequency::Hourly,
            Some(Symbol::Days) => Frequency::Daily,
            Some(Symbol::Weeks) => Frequency::Weekly,
            Some(Symbol::Months) => Frequency::Monthly,
            Some(Symbol::Years) => Frequency::Yearly,
            Some(Symbol::Weekdays) => {
                self.push_workdays();
                Frequency::Weekly
            }
            Some(Symbol::Weekday(day)) => {
                push_unique(&mut self.options.by_weekday, WeekdayNum::every(day));
                Frequency::Weekly
            }
            _ => return Err(self.unexpected().in_clause(Clause::Frequency)),
        };
        self.advance()?;
        self.options.freq = Some(freq);

        // every monday, wednesday and friday
        if matches!(unit, Some(Symbol::Weekday(_))) {
            while self.symbol() == Some(Symbol::Comma)
                && matches!(self.peek_next(), Some(Symbol::Weekday(_)))
            {
                self.advance()?;
                if let Some(Symbol::Weekday(day)) = self.symbol() {
                    push_unique(&mut self.options.by_weekday, WeekdayNum::every(day));
                }
                self.advance()?;
            }
        }

        tracing::debug!(?freq, interval = ?self.options.interval, "Frequency clause");
        Ok(())
    }

    fn on_clause(&mut self) -> ParseResult<()> {
        self.accept(Symbol::On)?;
        self.accept(Symbol::The)?;
        self.on_item()?;

        loop {
            let mut marker = false;
            while let Some(symbol @ (Symbol::Comma | Symbol::On | Symbol::The)) = self.symbol() {
                marker |= symbol != Symbol::Comma;
                self.advance()?;
            }
            if starts_item(self.symbol()) {
                self.on_item()?;
            } else if marker {
                return Err(self.unexpected().in_clause(Clause::WeekdayList));
            } else {
                break;
            }
        }

        tracing::debug!(
            weekdays = self.options.by_weekday.len(),
            monthdays = self.options.by_monthday.len(),
            hours = self.options.by_hour.len(),
            "On clause"
        );
        Ok(())
    }

    fn on_item(&mut self) -> ParseResult<()> {
        let Some(token) = self.current.filter(|token| starts_item(Some(token.symbol))) else {
            return Err(self.unexpected().in_clause(Clause::WeekdayList));
        };

        match token.symbol {
            Symbol::Weekday(day) => {
                self.advance()?;
                push_unique(&mut self.options.by_weekday, WeekdayNum::every(day));
            }
            Symbol::Weekdays => {
                self.advance()?;
                self.push_workdays();
            }
            Symbol::Number => {
                self.advance()?;
                self.push_hour(token)?;
            }
            _ => self.position()?,
        }
        Ok(())
    }

    /// An ordinal followed by a weekday, or an ordinal day of the month.
    fn position(&mut self) -> ParseResult<()> {
        let Some(start) = self.current else {
            return Err(self.unexpected().in_clause(Clause::Position));
        };

        let ordinal = match start.symbol {
            Symbol::Last => -1,
            Symbol::First => 1,
            Symbol::Second => 2,
            Symbol::Third => 3,
            Symbol::Nth => i64::from(start.value.unwrap_or_default()),
            _ => return Err(self.unexpected().in_clause(Clause::Position)),
        };
        self.advance()?;

        // "2nd last": counted from the end
        let ordinal = if start.symbol != Symbol::Last && self.accept(Symbol::Last)? {
            -ordinal
        } else {
            ordinal
        };

        if let Some(Symbol::Weekday(day)) = self.symbol() {
            self.advance()?;
            let ordinal = signed_ordinal(ordinal, MAX_WEEK_POSITION, start)?;
            push_unique(
                &mut self.options.by_weekday,
                WeekdayNum::nth(ordinal, day),
            );
        } else {
            self.accept(Symbol::Days)?;
            let ordinal = signed_ordinal(ordinal, MAX_MONTHDAY, start)?;
            push_unique(&mut self.options.by_monthday, ordinal);
        }
        Ok(())
    }

    fn at_clause(&mut self) -> ParseResult<()> {
        self.advance()?;

        let (_, token) = self.number(Clause::Hours)?;
        self.push_hour(token)?;
        while self.symbol() == Some(Symbol::Comma) && self.peek_next() == Some(Symbol::Number) {
            self.advance()?;
            let (_, token) = self.number(Clause::Hours)?;
            self.push_hour(token)?;
        }

        tracing::debug!(hours = ?self.options.by_hour, "At clause");
        Ok(())
    }

    fn until_clause(&mut self) -> ParseResult<()> {
        let Some(keyword) = self.current else {
            return Err(self.unexpected().in_clause(Clause::Until));
        };
        if self.options.count.is_some() {
            return Err(conflict(keyword, Clause::Until));
        }

        let date = match self.date_parser {
            Some(date_parser) => {
                let text = self.lexer.remainder();
                let position = self.input_len - text.len();
                let date = date_parser
                    .parse_date(text, self.language)
                    .filter(Date::is_valid)
                    .ok_or_else(|| {
                        ParseError::new(ParseErrorKind::InvalidDate, position)
                            .in_clause(Clause::Until)
                            .with_context(format!("could not read '{text}'"))
                    })?;
                self.lexer.finish();
                self.current = None;
                date
            }
            None => {
                self.advance()?;
                self.default_date()?
            }
        };

        tracing::debug!(%date, "Until clause");
        self.options.until = Some(date);
        Ok(())
    }

    /// `<Month> <Day> [,] <Year>` or `<Day> <Month> [,] <Year>`.
    fn default_date(&mut self) -> ParseResult<Date> {
        let start = self.current.map_or(self.input_len, |token| token.offset);

        let (month, day) = match self.language.date_order() {
            DateOrder::MonthDayYear => {
                let month = self.month()?;
                let (day, _) = self.number(Clause::Until)?;
                (month, day)
            }
            DateOrder::DayMonthYear => {
                let (day, _) = self.number(Clause::Until)?;
                let month = self.month()?;
                (month, day)
            }
        };
        self.accept(Symbol::Comma)?;
        let (year, _) = self.number(Clause::Until)?;

        let invalid = || ParseError::new(ParseErrorKind::InvalidDate, start).in_clause(Clause::Until);
        let year = u16::try_from(year).map_err(|_err| invalid())?;
        let day = u8::try_from(day).map_err(|_err| invalid())?;
        Date::try_new(year, month, day).map_err(|err| invalid().with_context(err.to_string()))
    }

    fn month(&mut self) -> ParseResult<u8> {
        match self.symbol() {
            Some(Symbol::Month(month)) => {
                self.advance()?;
                Ok(month)
            }
            _ => Err(self.unexpected().in_clause(Clause::Until)),
        }
    }

    fn count_clause(&mut self) -> ParseResult<()> {
        let Some(keyword) = self.current else {
            return Err(self.unexpected().in_clause(Clause::Count));
        };
        if self.options.until.is_some() {
            return Err(conflict(keyword, Clause::Count));
        }
        self.advance()?;

        let (count, token) = self.number(Clause::Count)?;
        if count == 0 {
            return Err(out_of_range(token, Clause::Count).with_context("count must be at least 1"));
        }
        self.accept(Symbol::Times)?;

        tracing::debug!(count, "Count clause");
        self.options.count = Some(count);
        Ok(())
    }

    // Accumulation

    fn push_workdays(&mut self) {
        for day in Weekday::WORKDAYS {
            push_unique(&mut self.options.by_weekday, WeekdayNum::every(day));
        }
    }

    fn push_hour(&mut self, token: Token<'_>) -> ParseResult<()> {
        let hour = token
            .value
            .filter(|hour| *hour <= MAX_HOUR)
            .and_then(|hour| u8::try_from(hour).ok())
            .ok_or_else(|| {
                out_of_range(token, Clause::Hours)
                    .with_context(format!("hour {} is not between 0 and {MAX_HOUR}", token.text))
            })?;
        push_unique(&mut self.options.by_hour, hour);
        Ok(())
    }
}

const fn starts_item(symbol: Option<Symbol>) -> bool {
    matches!(
        symbol,
        Some(
            Symbol::Weekday(_)
                | Symbol::Weekdays
                | Symbol::Number
                | Symbol::Nth
                | Symbol::First
                | Symbol::Second
                | Symbol::Third
                | Symbol::Last
        )
    )
}

/// Checks a signed position: nonzero and at most `max` either way.
fn signed_ordinal(ordinal: i64, max: u8, token: Token<'_>) -> ParseResult<i8> {
    i8::try_from(ordinal)
        .ok()
        .filter(|n| *n != 0 && n.unsigned_abs() <= max)
        .ok_or_else(|| {
            out_of_range(token, Clause::Position)
                .with_context(format!("position {ordinal} is not between 1 and {max}"))
        })
}

fn push_unique<T: PartialEq>(list: &mut Vec<T>, item: T) {
    if !list.contains(&item) {
        list.push(item);
    }
}

fn out_of_range(token: Token<'_>, clause: Clause) -> ParseError {
    ParseError::new(ParseErrorKind::OutOfRange, token.offset).in_clause(clause)
}

fn conflict(token: Token<'_>, clause: Clause) -> ParseError {
    ParseError::new(ParseErrorKind::CountUntilConflict, token.offset)
        .in_clause(clause)
        .with_context("a rule ends either after a count or at a date")
}
