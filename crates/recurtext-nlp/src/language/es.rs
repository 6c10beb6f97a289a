//! Spanish profile.

use std::sync::OnceLock;

use recurtext_core::rule::Weekday;

use super::{DateOrder, Language, PluralForms, Symbol};

/// Returns the shared Spanish profile.
///
/// ## Panics
///
/// Panics if a built-in pattern fails to compile.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "built-in patterns are constants exercised by the profile tests"
)]
pub fn spanish() -> &'static Language {
    static SPANISH: OnceLock<Language> = OnceLock::new();
    SPANISH.get_or_init(|| build().expect("Spanish profile patterns compile"))
}

fn build() -> Result<Language, super::LanguageError> {
    Language::builder("es")
        .day_names([
            "lunes",
            "martes",
            "miércoles",
            "jueves",
            "viernes",
            "sábado",
            "domingo",
        ])
        .month_names([
            "enero",
            "febrero",
            "marzo",
            "abril",
            "mayo",
            "junio",
            "julio",
            "agosto",
            "septiembre",
            "octubre",
            "noviembre",
            "diciembre",
        ])
        .token(Symbol::Skip, r"\.")
        .token(Symbol::Number, r"[0-9]+\b")
        .token(
            Symbol::Nth,
            r"([0-9]+)\s*(?:º|ª|°)|([0-9]+)(?:er|ro|do|to|vo|no|mo)\b",
        )
        .number_word(1, r"un[oa]\b")
        .number_word(2, r"dos\b")
        .number_word(3, r"tres\b")
        .number_word(4, r"cuatro\b")
        .number_word(5, r"cinco\b")
        .number_word(6, r"seis\b")
        .number_word(7, r"siete\b")
        .number_word(8, r"ocho\b")
        .number_word(9, r"nueve\b")
        .number_word(10, r"diez\b")
        .token(Symbol::Every, r"cada\b")
        // "segundo" is the ordinal unless pluralized
        .token(Symbol::Second, r"segund[oa]\b")
        .token(Symbol::Seconds, r"segundos?\b")
        .token(Symbol::Minutes, r"minutos?\b")
        .token(Symbol::Hours, r"horas?\b")
        .token(Symbol::Days, r"d[íi]as?\b")
        .token(
            Symbol::Weekdays,
            r"d[íi]as?\s+(?:de\s+semana|laborables?|h[áa]biles)\b",
        )
        .token(Symbol::Weeks, r"semanas?\b")
        .token(Symbol::Months, r"mes(?:es)?\b")
        .token(Symbol::Years, r"a[ñn]os?\b")
        .token(Symbol::On, r"(?:en|los|las)\b")
        .token(Symbol::The, r"(?:el|la)\b")
        .token(Symbol::At, r"a\s+las\b")
        .token(Symbol::First, r"primer[oa]?\b")
        .token(Symbol::Third, r"tercer[oa]?\b")
        .token(Symbol::Last, r"[úu]ltim[oa]\b")
        .token(Symbol::For, r"(?:por|durante)\b")
        .token(Symbol::Times, r"ve(?:z|ces)\b")
        .token(Symbol::Until, r"hasta\b")
        .token(Symbol::Comma, r"(?:,\s*|(?:y|o)\b\s*)+")
        .token(Symbol::Weekday(Weekday::Monday), r"lun(?:es)?\b")
        // bare "mar" ties with March; the weekday is listed first and wins
        .token(Symbol::Weekday(Weekday::Tuesday), r"mar(?:tes)?\b")
        .token(
            Symbol::Weekday(Weekday::Wednesday),
            r"mi[ée](?:r(?:coles)?)?\b",
        )
        .token(Symbol::Weekday(Weekday::Thursday), r"jue(?:ves)?\b")
        .token(Symbol::Weekday(Weekday::Friday), r"vie(?:rnes)?\b")
        .token(Symbol::Weekday(Weekday::Saturday), r"s[áa]b(?:ados?)?\b")
        .token(Symbol::Weekday(Weekday::Sunday), r"dom(?:ingos?)?\b")
        .token(Symbol::Month(1), r"ene(?:ro)?\b")
        .token(Symbol::Month(2), r"feb(?:rero)?\b")
        .token(Symbol::Month(3), r"mar(?:zo)?\b")
        .token(Symbol::Month(4), r"abr(?:il)?\b")
        .token(Symbol::Month(5), r"may(?:o)?\b")
        .token(Symbol::Month(6), r"jun(?:io)?\b")
        .token(Symbol::Month(7), r"jul(?:io)?\b")
        .token(Symbol::Month(8), r"ago(?:sto)?\b")
        .token(Symbol::Month(9), r"sep(?:tiembre)?\b|setiembre\b")
        .token(Symbol::Month(10), r"oct(?:ubre)?\b")
        .token(Symbol::Month(11), r"nov(?:iembre)?\b")
        .token(Symbol::Month(12), r"dic(?:iembre)?\b")
        .word("every", "cada")
        .word("second", "segundo")
        .word("seconds", "segundos")
        .word("minute", "minuto")
        .word("minutes", "minutos")
        .word("hour", "hora")
        .word("hours", "horas")
        .word("day", "día")
        .word("days", "días")
        .word("weekday", "día de semana")
        .word("weekdays", "días de semana")
        .word("week", "semana")
        .word("weeks", "semanas")
        .word("month", "mes")
        .word("months", "meses")
        .word("year", "año")
        .word("years", "años")
        .word("time", "vez")
        .word("times", "veces")
        .word("on", "los")
        .word("on the", "en el")
        .word("at", "los")
        .word("and", "y")
        .word("until", "hasta")
        .word("for", "por")
        .word("last", "último")
        .word("st", "º")
        .word("nd", "º")
        .word("rd", "º")
        .word("th", "º")
        .word("(~ approximate)", "(~ aproximado)")
        .get_text(PluralForms::one_other())
        .date_order(DateOrder::MonthDayYear)
        .build()
}
