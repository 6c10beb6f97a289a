//! English profile.

use std::sync::OnceLock;

use recurtext_core::rule::Weekday;

use super::{DateOrder, Language, PluralForms, Symbol};

/// Returns the shared English profile.
///
/// ## Panics
///
/// Panics if a built-in pattern fails to compile.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "built-in patterns are constants exercised by the profile tests"
)]
pub fn english() -> &'static Language {
    static ENGLISH: OnceLock<Language> = OnceLock::new();
    ENGLISH.get_or_init(|| build().expect("English profile patterns compile"))
}

fn build() -> Result<Language, super::LanguageError> {
    Language::builder("en")
        .day_names([
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ])
        .month_names([
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ])
        .token(Symbol::Skip, r"\.")
        .token(Symbol::Number, r"[0-9]+\b")
        .token(Symbol::Nth, r"([0-9]+)(?:st|nd|rd|th)\b")
        .number_word(1, r"one\b")
        .number_word(2, r"two\b")
        .number_word(3, r"three\b")
        .number_word(4, r"four\b")
        .number_word(5, r"five\b")
        .number_word(6, r"six\b")
        .number_word(7, r"seven\b")
        .number_word(8, r"eight\b")
        .number_word(9, r"nine\b")
        .number_word(10, r"ten\b")
        .token(Symbol::Every, r"every\b")
        // "second" is the ordinal unless pluralized
        .token(Symbol::Second, r"second\b")
        .token(Symbol::Seconds, r"seconds?\b")
        .token(Symbol::Minutes, r"minutes?\b")
        .token(Symbol::Hours, r"hours?\b")
        .token(Symbol::Days, r"days?\b")
        .token(Symbol::Weekdays, r"weekdays?\b")
        .token(Symbol::Weeks, r"weeks?\b")
        .token(Symbol::Months, r"months?\b")
        .token(Symbol::Years, r"years?\b")
        .token(Symbol::On, r"(?:on|in)\b")
        .token(Symbol::The, r"the\b")
        .token(Symbol::At, r"at\b")
        .token(Symbol::First, r"first\b")
        .token(Symbol::Third, r"third\b")
        .token(Symbol::Last, r"last\b")
        .token(Symbol::For, r"for\b")
        .token(Symbol::Times, r"times?\b")
        .token(Symbol::Until, r"(?:un)?til\b")
        .token(Symbol::Comma, r"(?:,\s*|(?:and|or)\b\s*)+")
        .token(Symbol::Weekday(Weekday::Monday), r"mo(?:n(?:days?)?)?\b")
        .token(Symbol::Weekday(Weekday::Tuesday), r"tu(?:e(?:s(?:days?)?)?)?\b")
        .token(
            Symbol::Weekday(Weekday::Wednesday),
            r"we(?:d(?:nesdays?)?)?\b",
        )
        .token(
            Symbol::Weekday(Weekday::Thursday),
            r"th(?:u(?:r(?:s(?:days?)?)?)?)?\b",
        )
        .token(Symbol::Weekday(Weekday::Friday), r"fr(?:i(?:days?)?)?\b")
        .token(Symbol::Weekday(Weekday::Saturday), r"sa(?:t(?:urdays?)?)?\b")
        .token(Symbol::Weekday(Weekday::Sunday), r"su(?:n(?:days?)?)?\b")
        .token(Symbol::Month(1), r"jan(?:uary)?\b")
        .token(Symbol::Month(2), r"feb(?:ruary)?\b")
        .token(Symbol::Month(3), r"mar(?:ch)?\b")
        .token(Symbol::Month(4), r"apr(?:il)?\b")
        .token(Symbol::Month(5), r"may\b")
        .token(Symbol::Month(6), r"june?\b")
        .token(Symbol::Month(7), r"july?\b")
        .token(Symbol::Month(8), r"aug(?:ust)?\b")
        .token(Symbol::Month(9), r"sep(?:t(?:ember)?)?\b")
        .token(Symbol::Month(10), r"oct(?:ober)?\b")
        .token(Symbol::Month(11), r"nov(?:ember)?\b")
        .token(Symbol::Month(12), r"dec(?:ember)?\b")
        .word("every", "every")
        .word("second", "second")
        .word("seconds", "seconds")
        .word("minute", "minute")
        .word("minutes", "minutes")
        .word("hour", "hour")
        .word("hours", "hours")
        .word("day", "day")
        .word("days", "days")
        .word("weekday", "weekday")
        .word("weekdays", "weekdays")
        .word("week", "week")
        .word("weeks", "weeks")
        .word("month", "month")
        .word("months", "months")
        .word("year", "year")
        .word("years", "years")
        .word("time", "time")
        .word("times", "times")
        .word("on", "on")
        .word("on the", "on the")
        .word("at", "at")
        .word("and", "and")
        .word("until", "until")
        .word("for", "for")
        .word("last", "last")
        .word("st", "st")
        .word("nd", "nd")
        .word("rd", "rd")
        .word("th", "th")
        .word("(~ approximate)", "(~ approximate)")
        .get_text(PluralForms::one_other())
        .date_order(DateOrder::MonthDayYear)
        .build()
}
