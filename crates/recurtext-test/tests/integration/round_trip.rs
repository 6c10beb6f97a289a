use recurtext_core::rule::{Date, Frequency, Options, Weekday, WeekdayNum, parse_rrule};
use recurtext_nlp::language::Term;
use recurtext_nlp::{Language, english, generate, spanish};

use super::helpers::round_trip;

const FREQUENCIES: [(Frequency, Term); 7] = [
    (Frequency::Yearly, Term::Year),
    (Frequency::Monthly, Term::Month),
    (Frequency::Weekly, Term::Week),
    (Frequency::Daily, Term::Day),
    (Frequency::Hourly, Term::Hour),
    (Frequency::Minutely, Term::Minute),
    (Frequency::Secondly, Term::Second),
];

fn languages() -> [&'static Language; 2] {
    [english(), spanish()]
}

#[test]
fn singular_for_one_plural_otherwise() {
    for language in languages() {
        let every = language.text(Term::Every, 1);
        for (freq, unit) in FREQUENCIES {
            let singular = generate(&Options::with_freq(freq), language, None).unwrap();
            assert_eq!(singular, format!("{every} {}", language.text(unit, 1)));

            for interval in [2, 5, 12] {
                let options = Options::with_freq(freq).with_interval(interval);
                let plural = generate(&options, language, None).unwrap();
                assert_eq!(
                    plural,
                    format!("{every} {interval} {}", language.text(unit, interval))
                );
                assert_ne!(language.text(unit, interval), language.text(unit, 1));
            }
        }
    }
}

#[test]
fn seven_days_collapse_and_stay_collapsed() {
    let all_days: Vec<WeekdayNum> = Weekday::all()
        .into_iter()
        .rev()
        .map(WeekdayNum::every)
        .collect();

    for language in languages() {
        let every_day = format!(
            "{} {}",
            language.text(Term::Every, 1),
            language.text(Term::Day, 1)
        );
        for (freq, _) in FREQUENCIES {
            let options = Options::with_freq(freq).with_by_weekday(all_days.clone());
            assert_eq!(generate(&options, language, None).unwrap(), every_day);

            let back = round_trip(&options, language);
            assert!(back.by_weekday.is_empty());
            assert_eq!(back.freq, Some(Frequency::Daily));
        }
    }
}

#[test]
fn positions_survive_round_trip() {
    for language in languages() {
        for n in (-31..=31).filter(|n| *n != 0) {
            let monthday = Options::monthly().with_by_monthday(vec![n]);
            assert_eq!(round_trip(&monthday, language), monthday, "monthday {n}");

            let weekday = Options::yearly().with_by_weekday(vec![WeekdayNum::nth(n, Weekday::Friday)]);
            assert_eq!(round_trip(&weekday, language), weekday, "weekday {n}");
        }
    }
}

#[test]
fn lists_render_in_canonical_order() {
    let shuffled = Options::monthly()
        .with_by_weekday(vec![
            WeekdayNum::every(Weekday::Sunday),
            WeekdayNum::every(Weekday::Monday),
            WeekdayNum::every(Weekday::Thursday),
        ])
        .with_by_monthday(vec![20, -2, 5])
        .with_by_hour(vec![18, 6]);
    let sorted = shuffled.normalized();

    for language in languages() {
        assert_eq!(
            generate(&shuffled, language, None).unwrap(),
            generate(&sorted, language, None).unwrap()
        );
    }
    assert_eq!(
        generate(&shuffled, english(), None).unwrap(),
        "every month on Monday, Thursday, Sunday and on the 2nd last, 5th and 20th at 6 and 18"
    );
}

#[test_log::test]
fn modeled_rules_round_trip() {
    let rules = [
        "FREQ=DAILY;INTERVAL=3;BYHOUR=8,20",
        "FREQ=WEEKLY;BYDAY=TU,TH;COUNT=10",
        "FREQ=WEEKLY;INTERVAL=2;BYDAY=SA,SU;UNTIL=20301231",
        "FREQ=MONTHLY;BYDAY=MO,+2WE;BYMONTHDAY=1",
        "FREQ=MONTHLY;BYDAY=-1FR,+1MO",
        "FREQ=YEARLY;BYMONTHDAY=-1;COUNT=1",
        "FREQ=HOURLY;INTERVAL=6;UNTIL=20240229",
    ];

    for language in languages() {
        for rule in rules {
            let options = parse_rrule(rule).unwrap().normalized();
            assert_eq!(round_trip(&options, language), options, "{rule}");
        }
    }
}

#[test]
fn until_dates_round_trip_in_both_languages() {
    let options = Options::daily().with_until(Date::new(2031, 3, 9));
    for language in languages() {
        assert_eq!(round_trip(&options, language), options);
    }
}
