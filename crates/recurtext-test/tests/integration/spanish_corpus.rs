use recurtext_core::rule::{Date, Options, Weekday, WeekdayNum, parse_rrule};
use recurtext_nlp::{Parser, ToText, generate, parse, spanish};
use recurtext_test::SPANISH;

use super::helpers::{assert_parses, assert_renders};

#[test_log::test]
fn from_text() {
    for case in SPANISH {
        assert_parses(case, spanish());
    }
}

#[test_log::test]
fn to_text() {
    for case in SPANISH {
        assert_renders(case, spanish());
    }
}

#[test]
fn parse_text_yields_options() {
    let options = parse("Cada día", spanish()).unwrap();
    assert_eq!(options, Options::daily());
    assert_eq!(options.effective_interval(), 1);

    let options = parse("Cada semana los martes", spanish()).unwrap();
    assert_eq!(
        options,
        Options::weekly().with_by_weekday(vec![WeekdayNum::every(Weekday::Tuesday)])
    );
}

#[test]
fn single_weekday_index() {
    let options = Options::weekly().with_by_weekday(vec![WeekdayNum::every(
        Weekday::from_index(0).unwrap(),
    )]);
    assert_eq!(
        generate(&options, spanish(), None).unwrap(),
        "cada semana los lunes"
    );
    assert_eq!(options.to_string(), "FREQ=WEEKLY;BYDAY=MO");
}

#[test]
fn sorts_monthdays() {
    let options = Options::weekly().with_by_monthday(vec![3, 10, 17, 24]);
    assert_eq!(
        generate(&options, spanish(), None).unwrap(),
        "cada semana en el 3º, 10º, 17º y 24º"
    );
}

#[test]
fn every_day_of_the_week() {
    let options = Options::weekly().with_by_weekday(
        Weekday::all().into_iter().map(WeekdayNum::every).collect(),
    );
    assert_eq!(generate(&options, spanish(), None).unwrap(), "cada día");
}

#[test]
fn some_days() {
    let options = parse_rrule("FREQ=WEEKLY;BYDAY=MO,WE,FR").unwrap();
    assert_eq!(
        generate(&options, spanish(), None).unwrap(),
        "cada semana los lunes, miércoles, viernes"
    );

    let options = parse_rrule("FREQ=WEEKLY;INTERVAL=1;BYDAY=MO,TU").unwrap();
    assert_eq!(
        generate(&options, spanish(), None).unwrap(),
        "cada semana los lunes, martes"
    );
}

#[test]
fn minutes_and_weeks_pluralize() {
    let to_text = ToText::new(spanish());
    assert_eq!(to_text.render(&Options::minutely()).unwrap(), "cada minuto");
    assert_eq!(
        to_text.render(&Options::minutely().with_interval(2)).unwrap(),
        "cada 2 minutos"
    );
    assert_eq!(
        to_text.render(&Options::weekly().with_interval(1)).unwrap(),
        "cada semana"
    );
    assert_eq!(
        to_text.render(&Options::weekly().with_interval(2)).unwrap(),
        "cada 2 semanas"
    );
}

#[test]
fn until_default_format() {
    let options = Options::weekly().with_until(Date::new(2012, 11, 10));
    assert_eq!(
        generate(&options, spanish(), None).unwrap(),
        "cada semana hasta noviembre 10, 2012"
    );
}

#[test]
fn until_custom_format() {
    let options = Options::weekly().with_until(Date::new(2012, 11, 10));
    let formatter = |year: u16, month: &str, day: u8| format!("{day} de {month} del {year}");
    let text = generate(&options, spanish(), Some(&formatter)).unwrap();
    assert_eq!(text, "cada semana hasta 10 de noviembre del 2012");

    // The matching reader brings the sentence back
    let reader = |text: &str, language: &recurtext_nlp::Language| -> Option<Date> {
        let mut words = text
            .split_whitespace()
            .filter(|word| !matches!(*word, "de" | "del"));
        let day = words.next()?.parse().ok()?;
        let month = recurtext_nlp::date::month_by_name(language, words.next()?)?;
        let year = words.next()?.parse().ok()?;
        Some(Date::new(year, month, day))
    };
    let parsed = Parser::new(spanish())
        .with_date_parser(&reader)
        .parse(&text)
        .unwrap();
    assert_eq!(parsed, options);
}

#[test]
fn spelled_out_numbers() {
    assert_eq!(
        parse("cada tres meses", spanish()).unwrap(),
        Options::monthly().with_interval(3)
    );
    assert_eq!(
        parse("cada mes en el segundo martes", spanish()).unwrap(),
        Options::monthly().with_by_weekday(vec![WeekdayNum::nth(2, Weekday::Tuesday)])
    );
}
