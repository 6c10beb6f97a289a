//! Language profiles.
//!
//! A `Language` is the data both directions of the conversion run on: the
//! token rules the lexer matches, the dictionary the generator renders from,
//! and the day and month names. Adding a language means building a new
//! profile, never adding control flow.

mod en;
mod es;

use std::collections::HashMap;
use std::fmt;

use recurtext_core::config::Settings;
use recurtext_core::rule::Weekday;
use regex::{Regex, RegexBuilder};
use thiserror::Error;

pub use en::english;
pub use es::spanish;

use crate::NlpError;

/// Errors raised while building a profile.
#[derive(Error, Debug)]
pub enum LanguageError {
    #[error("invalid pattern for {symbol:?}: {source}")]
    InvalidPattern {
        symbol: Symbol,
        #[source]
        source: regex::Error,
    },
}

/// Grammar category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Matched and discarded.
    Skip,
    Number,
    /// Ordinal written with digits (`3rd`, `3º`); value is the number.
    Nth,
    Every,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weekdays,
    Weeks,
    Months,
    Years,
    On,
    The,
    At,
    First,
    Second,
    Third,
    Last,
    For,
    Times,
    Until,
    /// List separator: comma or conjunction.
    Comma,
    Weekday(Weekday),
    /// Month name, 1-12.
    Month(u8),
}

/// One lexer rule: a pattern recognizing the spellings of a symbol.
#[derive(Debug, Clone)]
pub struct TokenRule {
    pub symbol: Symbol,
    pub pattern: Regex,
    /// Fixed value for spelled-out numbers.
    pub value: Option<u32>,
}

/// Vocabulary the generator asks the profile for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    Every,
    Second,
    Minute,
    Hour,
    Day,
    Weekday,
    Week,
    Month,
    Year,
    Time,
    On,
    OnThe,
    At,
    And,
    Until,
    For,
    Last,
    St,
    Nd,
    Rd,
    Th,
    Approximate,
}

impl Term {
    /// Canonical dictionary key of the singular form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Every => "every",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Weekday => "weekday",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Time => "time",
            Self::On => "on",
            Self::OnThe => "on the",
            Self::At => "at",
            Self::And => "and",
            Self::Until => "until",
            Self::For => "for",
            Self::Last => "last",
            Self::St => "st",
            Self::Nd => "nd",
            Self::Rd => "rd",
            Self::Th => "th",
            Self::Approximate => "(~ approximate)",
        }
    }

    /// Canonical dictionary key of the plural form, for countable terms.
    #[must_use]
    pub const fn plural(self) -> Option<&'static str> {
        Some(match self {
            Self::Second => "seconds",
            Self::Minute => "minutes",
            Self::Hour => "hours",
            Self::Day => "days",
            Self::Weekday => "weekdays",
            Self::Week => "weeks",
            Self::Month => "months",
            Self::Year => "years",
            Self::Time => "times",
            _ => return None,
        })
    }

    /// Suffix term for an ordinal number: 1st, 2nd, 3rd, 4th, 11th, 21st...
    #[must_use]
    pub const fn ordinal_suffix(n: u32) -> Self {
        if matches!(n % 100, 11..=13) {
            return Self::Th;
        }
        match n % 10 {
            1 => Self::St,
            2 => Self::Nd,
            3 => Self::Rd,
            _ => Self::Th,
        }
    }
}

/// Canonical term name to localized word.
#[derive(Debug, Clone, Default)]
pub struct Dictionary(HashMap<String, String>);

impl Dictionary {
    /// Looks up a canonical key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, word: impl Into<String>) {
        self.0.insert(key.into(), word.into());
    }
}

/// Inflection strategy: renders a term for a count.
///
/// Returning `None` defers to the plain dictionary entry.
pub trait GetText: Send + Sync {
    fn get_text(&self, term: Term, count: u32, dictionary: &Dictionary) -> Option<String>;
}

impl<F> GetText for F
where
    F: Fn(Term, u32, &Dictionary) -> Option<String> + Send + Sync,
{
    fn get_text(&self, term: Term, count: u32, dictionary: &Dictionary) -> Option<String> {
        self(term, count, dictionary)
    }
}

/// Singular/plural selection over the dictionary's plural keys.
#[derive(Debug, Clone, Copy)]
pub struct PluralForms {
    is_plural: fn(u32) -> bool,
}

impl PluralForms {
    #[must_use]
    pub const fn new(is_plural: fn(u32) -> bool) -> Self {
        Self { is_plural }
    }

    /// Every count other than one takes the plural.
    #[must_use]
    pub const fn one_other() -> Self {
        Self::new(not_one)
    }
}

const fn not_one(n: u32) -> bool {
    n != 1
}

impl GetText for PluralForms {
    fn get_text(&self, term: Term, count: u32, dictionary: &Dictionary) -> Option<String> {
        let key = match term.plural() {
            Some(plural) if (self.is_plural)(count) => plural,
            _ => term.as_str(),
        };
        dictionary.get(key).map(str::to_owned)
    }
}

/// Field order of the default date layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateOrder {
    /// `<Month> <Day>, <Year>`
    #[default]
    MonthDayYear,
    /// `<Day> <Month> <Year>`
    DayMonthYear,
}

/// An immutable language profile.
pub struct Language {
    code: String,
    day_names: [String; 7],
    month_names: [String; 12],
    rules: Vec<TokenRule>,
    dictionary: Dictionary,
    get_text: Option<Box<dyn GetText>>,
    date_order: DateOrder,
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Language")
            .field("code", &self.code)
            .field("rules", &self.rules.len())
            .field("get_text", &self.get_text.is_some())
            .finish_non_exhaustive()
    }
}

impl Language {
    /// Starts a profile for the given language code.
    #[must_use]
    pub fn builder(code: impl Into<String>) -> LanguageBuilder {
        LanguageBuilder {
            code: code.into(),
            day_names: Default::default(),
            month_names: Default::default(),
            rules: Vec::new(),
            dictionary: Dictionary::default(),
            get_text: None,
            date_order: DateOrder::default(),
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Localized name of a weekday.
    #[must_use]
    pub fn day_name(&self, weekday: Weekday) -> &str {
        &self.day_names[weekday.index()]
    }

    /// Localized name of a month, 1-12. Out-of-range months yield `None`.
    #[must_use]
    pub fn month_name(&self, month: u8) -> Option<&str> {
        let index = usize::from(month).checked_sub(1)?;
        self.month_names.get(index).map(String::as_str)
    }

    /// Lexer rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[TokenRule] {
        &self.rules
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub fn date_order(&self) -> DateOrder {
        self.date_order
    }

    /// Renders a term for a count.
    ///
    /// The inflection strategy wins when it has an answer; otherwise the
    /// singular dictionary entry is used, and the canonical name when the
    /// dictionary has none.
    #[must_use]
    pub fn text(&self, term: Term, count: u32) -> String {
        if let Some(get_text) = &self.get_text
            && let Some(text) = get_text.get_text(term, count, &self.dictionary)
        {
            return text;
        }
        self.dictionary
            .get(term.as_str())
            .unwrap_or(term.as_str())
            .to_owned()
    }
}

/// Builder for `Language`.
pub struct LanguageBuilder {
    code: String,
    day_names: [String; 7],
    month_names: [String; 12],
    rules: Vec<(Symbol, String, Option<u32>)>,
    dictionary: Dictionary,
    get_text: Option<Box<dyn GetText>>,
    date_order: DateOrder,
}

impl LanguageBuilder {
    /// Weekday names, Monday first.
    #[must_use]
    pub fn day_names(mut self, names: [&str; 7]) -> Self {
        self.day_names = names.map(str::to_owned);
        self
    }

    /// Month names, January first.
    #[must_use]
    pub fn month_names(mut self, names: [&str; 12]) -> Self {
        self.month_names = names.map(str::to_owned);
        self
    }

    /// Adds a lexer rule. The pattern is anchored at the current position and
    /// matched case-insensitively; rules added earlier win ties.
    #[must_use]
    pub fn token(mut self, symbol: Symbol, pattern: &str) -> Self {
        self.rules.push((symbol, pattern.to_owned(), None));
        self
    }

    /// Adds a spelled-out number.
    #[must_use]
    pub fn number_word(mut self, value: u32, pattern: &str) -> Self {
        self.rules
            .push((Symbol::Number, pattern.to_owned(), Some(value)));
        self
    }

    /// Adds a dictionary entry under a canonical key.
    #[must_use]
    pub fn word(mut self, key: &str, word: &str) -> Self {
        self.dictionary.insert(key, word);
        self
    }

    #[must_use]
    pub fn get_text(mut self, get_text: impl GetText + 'static) -> Self {
        self.get_text = Some(Box::new(get_text));
        self
    }

    #[must_use]
    pub fn date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Compiles the rules.
    ///
    /// ## Errors
    /// Returns `LanguageError::InvalidPattern` for the first pattern that does
    /// not compile.
    pub fn build(self) -> Result<Language, LanguageError> {
        let rules = self
            .rules
            .into_iter()
            .map(|(symbol, pattern, value)| {
                RegexBuilder::new(&format!("^(?:{pattern})"))
                    .case_insensitive(true)
                    .build()
                    .map(|pattern| TokenRule {
                        symbol,
                        pattern,
                        value,
                    })
                    .map_err(|source| LanguageError::InvalidPattern { symbol, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(code = %self.code, rules = rules.len(), "Built language profile");

        Ok(Language {
            code: self.code,
            day_names: self.day_names,
            month_names: self.month_names,
            rules,
            dictionary: self.dictionary,
            get_text: self.get_text,
            date_order: self.date_order,
        })
    }
}

/// Looks up a built-in profile by code or English name.
#[must_use]
pub fn builtin(code: &str) -> Option<&'static Language> {
    match code.to_lowercase().as_str() {
        "en" | "english" => Some(english()),
        "es" | "spanish" | "español" => Some(spanish()),
        _ => None,
    }
}

/// Resolves the configured default profile.
///
/// ## Errors
/// Returns `NlpError::UnknownLanguage` if no built-in profile has that code.
pub fn from_settings(settings: &Settings) -> Result<&'static Language, NlpError> {
    let code = settings.language.default.trim();
    builtin(code).ok_or_else(|| NlpError::UnknownLanguage(code.to_owned()))
}

#[cfg(test)]
mod tests {
    use recurtext_core::config::{LanguageConfig, LoggingConfig};

    use super::*;

    fn bare() -> Language {
        Language::builder("xx")
            .word("day", "tag")
            .word("days", "tage")
            .build()
            .unwrap()
    }

    #[test]
    fn text_without_get_text_does_not_inflect() {
        let language = bare();
        assert_eq!(language.text(Term::Day, 1), "tag");
        assert_eq!(language.text(Term::Day, 3), "tag");
    }

    #[test]
    fn text_falls_back_to_canonical_name() {
        assert_eq!(bare().text(Term::Week, 1), "week");
    }

    #[test]
    fn plural_forms_pick_plural_key() {
        let language = Language::builder("xx")
            .word("day", "tag")
            .word("days", "tage")
            .get_text(PluralForms::one_other())
            .build()
            .unwrap();
        assert_eq!(language.text(Term::Day, 1), "tag");
        assert_eq!(language.text(Term::Day, 2), "tage");
        // No plural entry for "on": singular lookup
        assert_eq!(language.text(Term::On, 2), "on");
    }

    #[test]
    fn closure_get_text_overrides_dictionary() {
        let language = Language::builder("xx")
            .word("day", "tag")
            .get_text(|term: Term, count: u32, _: &Dictionary| {
                (term == Term::Day).then(|| format!("{count} tag(e)"))
            })
            .build()
            .unwrap();
        assert_eq!(language.text(Term::Day, 2), "2 tag(e)");
        assert_eq!(language.text(Term::Every, 1), "every");
    }

    #[test]
    fn ordinal_suffixes() {
        assert_eq!(Term::ordinal_suffix(1), Term::St);
        assert_eq!(Term::ordinal_suffix(11), Term::Th);
        assert_eq!(Term::ordinal_suffix(22), Term::Nd);
        assert_eq!(Term::ordinal_suffix(23), Term::Rd);
        assert_eq!(Term::ordinal_suffix(13), Term::Th);
        assert_eq!(Term::ordinal_suffix(32), Term::Nd);
        assert_eq!(Term::ordinal_suffix(41), Term::St);
        assert_eq!(Term::ordinal_suffix(42), Term::Nd);
        assert_eq!(Term::ordinal_suffix(53), Term::Rd);
        assert_eq!(Term::ordinal_suffix(111), Term::Th);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let result = Language::builder("xx").token(Symbol::Every, "(").build();
        assert!(matches!(
            result,
            Err(LanguageError::InvalidPattern {
                symbol: Symbol::Every,
                ..
            })
        ));
    }

    #[test]
    fn builtin_lookup() {
        assert_eq!(builtin("ES").map(Language::code), Some("es"));
        assert_eq!(builtin("english").map(Language::code), Some("en"));
        assert!(builtin("fr").is_none());
    }

    #[test]
    fn month_name_bounds() {
        let language = spanish();
        assert_eq!(language.month_name(11), Some("noviembre"));
        assert_eq!(language.month_name(0), None);
        assert_eq!(language.month_name(13), None);
    }

    #[test]
    fn settings_select_profile() {
        let mut settings = Settings {
            language: LanguageConfig {
                default: "es".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        };
        assert_eq!(from_settings(&settings).unwrap().code(), "es");

        settings.language.default = "tlh".to_string();
        assert!(matches!(
            from_settings(&settings),
            Err(NlpError::UnknownLanguage(code)) if code == "tlh"
        ));
    }
}
