//! Canonical RECUR text for `Options` (RFC 5545 §3.3.10).

use std::fmt;
use std::str::FromStr;

use super::{Date, Frequency, Options, Weekday, WeekdayNum};
use crate::error::{CoreError, CoreResult};

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if let Some(ref freq) = self.freq {
            parts.push(format!("FREQ={freq}"));
        }

        if let Some(interval) = self.interval
            && interval != 1
        {
            parts.push(format!("INTERVAL={interval}"));
        }

        if let Some(ref until) = self.until {
            parts.push(format!("UNTIL={until}"));
        }

        if let Some(count) = self.count {
            parts.push(format!("COUNT={count}"));
        }

        push_list(&mut parts, "BYSECOND", &self.by_second);
        push_list(&mut parts, "BYMINUTE", &self.by_minute);
        push_list(&mut parts, "BYHOUR", &self.by_hour);
        push_list(&mut parts, "BYDAY", &self.by_weekday);
        push_list(&mut parts, "BYMONTHDAY", &self.by_monthday);

        write!(f, "{}", parts.join(";"))
    }
}

fn push_list<T: ToString>(parts: &mut Vec<String>, name: &str, values: &[T]) {
    if !values.is_empty() {
        let s: Vec<_> = values.iter().map(ToString::to_string).collect();
        parts.push(format!("{name}={}", s.join(",")));
    }
}

impl FromStr for Options {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        parse_rrule(s)
    }
}

/// Parses a RECUR (RRULE) value, with or without the `RRULE:` prefix.
///
/// Rule parts the options model does not carry (`WKST`, `BYMONTH`, ...) are
/// skipped.
///
/// ## Errors
/// Returns an error if a part is malformed, a value is out of range, or both
/// `COUNT` and `UNTIL` are present.
pub fn parse_rrule(s: &str) -> CoreResult<Options> {
    let s = s.trim();
    let body = s
        .get(..6)
        .filter(|prefix| prefix.eq_ignore_ascii_case("RRULE:"))
        .map_or(s, |_| &s[6..]);

    let mut options = Options::new();

    for part in body.split(';').filter(|p| !p.is_empty()) {
        let (key, value) = part
            .split_once('=')
            .ok_or_else(|| CoreError::ParseError(format!("rule part without '=': {part}")))?;

        parse_rrule_part(&mut options, key, value)?;
    }

    if options.freq.is_none() {
        return Err(CoreError::ParseError("missing FREQ".to_string()));
    }

    Ok(options)
}

/// Parses a single RRULE key-value pair.
fn parse_rrule_part(options: &mut Options, key: &str, value: &str) -> CoreResult<()> {
    match key.to_ascii_uppercase().as_str() {
        "FREQ" => {
            options.freq = Some(
                Frequency::parse(value)
                    .ok_or_else(|| CoreError::ParseError(format!("invalid FREQ: {value}")))?,
            );
        }
        "INTERVAL" => {
            let interval: u32 = parse_number(key, value)?;
            if interval == 0 {
                return Err(CoreError::ValidationError(
                    "INTERVAL must be positive".to_string(),
                ));
            }
            options.interval = Some(interval);
        }
        "COUNT" => {
            if options.until.is_some() {
                return Err(until_count_conflict());
            }
            options.count = Some(parse_number(key, value)?);
        }
        "UNTIL" => {
            if options.count.is_some() {
                return Err(until_count_conflict());
            }
            options.until = Some(parse_until(value)?);
        }
        "BYSECOND" => options.by_second = parse_list(key, value)?,
        "BYMINUTE" => options.by_minute = parse_list(key, value)?,
        "BYHOUR" => options.by_hour = parse_list(key, value)?,
        "BYDAY" => {
            options.by_weekday = value
                .split(',')
                .map(|v| parse_weekday_num(v.trim()))
                .collect::<CoreResult<_>>()?;
        }
        "BYMONTHDAY" => {
            let days: Vec<i8> = parse_list(key, value)?;
            if let Some(day) = days.iter().find(|d| **d == 0 || !(-31..=31).contains(*d)) {
                return Err(CoreError::ValidationError(format!(
                    "BYMONTHDAY out of range: {day}"
                )));
            }
            options.by_monthday = days;
        }
        _ => {
            tracing::debug!(part = %key, "Skipping rule part outside the options model");
        }
    }
    Ok(())
}

fn until_count_conflict() -> CoreError {
    CoreError::ValidationError("UNTIL and COUNT are mutually exclusive".to_string())
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> CoreResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_err| CoreError::ParseError(format!("invalid {key} value: {value}")))
}

/// Parses a comma-separated list of numbers.
fn parse_list<T: FromStr>(key: &str, value: &str) -> CoreResult<Vec<T>> {
    value.split(',').map(|v| parse_number(key, v)).collect()
}

/// Parses UNTIL as DATE (`YYYYMMDD`) or DATE-TIME (`YYYYMMDDTHHMMSS[Z]`).
fn parse_until(value: &str) -> CoreResult<Date> {
    let date_part = value.split_once('T').map_or(value, |(date, _time)| date);
    if date_part.len() != 8 || !date_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::ParseError(format!("invalid UNTIL: {value}")));
    }

    let year = parse_number("UNTIL", &date_part[0..4])?;
    let month = parse_number("UNTIL", &date_part[4..6])?;
    let day = parse_number("UNTIL", &date_part[6..8])?;

    Date::try_new(year, month, day)
}

/// Parses a single weekday with optional ordinal (e.g., "MO", "+1MO", "-1FR").
fn parse_weekday_num(s: &str) -> CoreResult<WeekdayNum> {
    let split = s
        .len()
        .checked_sub(2)
        .filter(|i| s.is_char_boundary(*i))
        .ok_or_else(|| CoreError::ParseError(format!("invalid BYDAY entry: {s}")))?;

    let (ordinal_str, weekday_str) = s.split_at(split);

    let weekday = Weekday::parse(weekday_str)
        .ok_or_else(|| CoreError::ParseError(format!("invalid weekday: {weekday_str}")))?;

    let ordinal = if ordinal_str.is_empty() {
        None
    } else {
        let n: i8 = parse_number("BYDAY", ordinal_str)?;
        if n == 0 || !(-53..=53).contains(&n) {
            return Err(CoreError::ValidationError(format!(
                "BYDAY ordinal out of range: {n}"
            )));
        }
        Some(n)
    };

    Ok(WeekdayNum { ordinal, weekday })
}
