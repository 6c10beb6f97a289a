//! recurtext - integration test support.
//!
//! Reference corpora shared by the integration suites: sentences paired with
//! the canonical rule they stand for. Both directions must hold for every
//! pair, comparing sentences case-insensitively and rules after
//! normalization.

use recurtext_core::error::CoreResult;
use recurtext_core::rule::{Options, parse_rrule};

/// A sentence and the canonical rule it stands for.
#[derive(Debug, Clone, Copy)]
pub struct CorpusCase {
    pub text: &'static str,
    pub rule: &'static str,
}

const fn case(text: &'static str, rule: &'static str) -> CorpusCase {
    CorpusCase { text, rule }
}

/// Spanish reference corpus.
pub const SPANISH: &[CorpusCase] = &[
    case("Cada día", "RRULE:FREQ=DAILY"),
    case("Cada día los 10, 12 y 17", "RRULE:FREQ=DAILY;BYHOUR=10,12,17"),
    case("Cada semana", "RRULE:FREQ=WEEKLY"),
    case("Cada hora", "RRULE:FREQ=HOURLY"),
    case("Cada 4 horas", "RRULE:INTERVAL=4;FREQ=HOURLY"),
    case("Cada semana los martes", "RRULE:FREQ=WEEKLY;BYDAY=TU"),
    case(
        "Cada semana los lunes, miércoles",
        "RRULE:FREQ=WEEKLY;BYDAY=MO,WE",
    ),
    case("Cada día de semana", "RRULE:FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR"),
    case("Cada 2 semanas", "RRULE:INTERVAL=2;FREQ=WEEKLY"),
    case("Cada mes", "RRULE:FREQ=MONTHLY"),
    case("Cada 6 meses", "RRULE:INTERVAL=6;FREQ=MONTHLY"),
    case("Cada año", "RRULE:FREQ=YEARLY"),
    case("Cada año en el 1º viernes", "RRULE:FREQ=YEARLY;BYDAY=+1FR"),
    case("Cada año en el 13º viernes", "RRULE:FREQ=YEARLY;BYDAY=+13FR"),
    case("Cada mes en el 4º", "RRULE:FREQ=MONTHLY;BYMONTHDAY=4"),
    case("Cada mes en el 4º último", "RRULE:FREQ=MONTHLY;BYMONTHDAY=-4"),
    case("Cada mes en el 3º martes", "RRULE:FREQ=MONTHLY;BYDAY=+3TU"),
    case(
        "Cada mes en el 3º último martes",
        "RRULE:FREQ=MONTHLY;BYDAY=-3TU",
    ),
    case("Cada mes en el último lunes", "RRULE:FREQ=MONTHLY;BYDAY=-1MO"),
    case(
        "Cada mes en el 2º último viernes",
        "RRULE:FREQ=MONTHLY;BYDAY=-2FR",
    ),
    case("Cada semana por 20 veces", "RRULE:FREQ=WEEKLY;COUNT=20"),
];

/// English reference corpus.
pub const ENGLISH: &[CorpusCase] = &[
    case("Every day", "RRULE:FREQ=DAILY"),
    case("Every day at 10, 12 and 17", "RRULE:FREQ=DAILY;BYHOUR=10,12,17"),
    case("Every week", "RRULE:FREQ=WEEKLY"),
    case("Every hour", "RRULE:FREQ=HOURLY"),
    case("Every 4 hours", "RRULE:INTERVAL=4;FREQ=HOURLY"),
    case("Every minute", "RRULE:FREQ=MINUTELY"),
    case("Every 30 seconds", "RRULE:INTERVAL=30;FREQ=SECONDLY"),
    case("Every week on Tuesday", "RRULE:FREQ=WEEKLY;BYDAY=TU"),
    case(
        "Every week on Monday, Wednesday",
        "RRULE:FREQ=WEEKLY;BYDAY=MO,WE",
    ),
    case("Every weekday", "RRULE:FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR"),
    case(
        "Every 2 weeks on weekdays",
        "RRULE:INTERVAL=2;FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR",
    ),
    case("Every 2 weeks", "RRULE:INTERVAL=2;FREQ=WEEKLY"),
    case("Every month", "RRULE:FREQ=MONTHLY"),
    case("Every 6 months", "RRULE:INTERVAL=6;FREQ=MONTHLY"),
    case("Every year", "RRULE:FREQ=YEARLY"),
    case("Every year on the 1st Friday", "RRULE:FREQ=YEARLY;BYDAY=+1FR"),
    case("Every year on the 13th Friday", "RRULE:FREQ=YEARLY;BYDAY=+13FR"),
    case("Every month on the 4th", "RRULE:FREQ=MONTHLY;BYMONTHDAY=4"),
    case("Every month on the 4th last", "RRULE:FREQ=MONTHLY;BYMONTHDAY=-4"),
    case("Every month on the 3rd Tuesday", "RRULE:FREQ=MONTHLY;BYDAY=+3TU"),
    case(
        "Every month on the 3rd last Tuesday",
        "RRULE:FREQ=MONTHLY;BYDAY=-3TU",
    ),
    case("Every month on the last Monday", "RRULE:FREQ=MONTHLY;BYDAY=-1MO"),
    case(
        "Every month on the 2nd last Friday",
        "RRULE:FREQ=MONTHLY;BYDAY=-2FR",
    ),
    case(
        "Every month on the last, 1st and 15th",
        "RRULE:FREQ=MONTHLY;BYMONTHDAY=1,15,-1",
    ),
    case("Every week for 20 times", "RRULE:FREQ=WEEKLY;COUNT=20"),
    case(
        "Every week until January 1, 2007",
        "RRULE:FREQ=WEEKLY;UNTIL=20070101",
    ),
];

/// Decodes a canonical rule into its comparison form.
///
/// ## Errors
/// Returns the codec error if the rule does not decode.
pub fn normalized_rule(rule: &str) -> CoreResult<Options> {
    Ok(parse_rrule(rule)?.normalized())
}
