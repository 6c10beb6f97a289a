use recurtext_core::rule::{Date, Options, Weekday, WeekdayNum};
use recurtext_nlp::parse::{Clause, ErrorCategory, ParseErrorKind};
use recurtext_nlp::{english, generate, parse};
use recurtext_test::ENGLISH;

use super::helpers::{assert_parses, assert_renders};

#[test_log::test]
fn from_text() {
    for case in ENGLISH {
        assert_parses(case, english());
    }
}

#[test_log::test]
fn to_text() {
    for case in ENGLISH {
        assert_renders(case, english());
    }
}

#[test]
fn alternative_spellings() {
    let expected = Options::weekly().with_by_weekday(vec![
        WeekdayNum::every(Weekday::Monday),
        WeekdayNum::every(Weekday::Friday),
    ]);
    for text in [
        "every week on monday and friday",
        "Every week on Mon, Fri.",
        "every week on mondays or fridays",
        "every monday and friday",
        "every week on monday, on friday",
    ] {
        assert_eq!(parse(text, english()).unwrap().normalized(), expected, "{text}");
    }
}

#[test]
fn until_without_comma() {
    assert_eq!(
        parse("every day until jan 1 2007", english()).unwrap(),
        Options::daily().with_until(Date::new(2007, 1, 1))
    );
}

#[test]
fn approximate_marker() {
    let mut options = Options::hourly();
    options.by_minute = vec![0, 30];
    assert_eq!(
        generate(&options, english(), None).unwrap(),
        "every hour (~ approximate)"
    );
}

#[test]
fn error_taxonomy() {
    let err = parse("every blue moon", english()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Tokenization);
    assert_eq!(err.position, 6);

    let err = parse("every week on", english()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Grammar);
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEnd);
    assert_eq!(err.clause, Some(Clause::WeekdayList));

    let err = parse("every day at 25", english()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Semantic);
    assert_eq!(err.clause, Some(Clause::Hours));
}
