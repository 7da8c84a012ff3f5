//! Temporal literal parsing
//!
//! Grammar of the payload of `@"..."` and of the string forms accepted by
//! the `date`, `time`, `date and time` and `duration` built-ins:
//!
//! ```text
//! date      := '-'? YYYY+ '-' MM '-' DD
//! time      := hh ':' mm (':' ss ('.' fraction)?)? ('Z' | ('+'|'-') hh ':' mm)? ('@' zone)?
//! date-time := date 'T' time
//! duration  := '-'? 'P' (n 'Y')? (n 'M')? (n 'W')? (n 'D')? ('T' (n 'H')? (n 'M')? (n ('.' n)? 'S')?)?
//! ```
//!
//! A duration with only `Y`/`M` designators is a years-months duration, one
//! with only day and time designators is a days-time duration, and mixing the
//! two families is rejected.

use crate::{FeelDate, FeelDateTime, FeelTime, Value};
use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, preceded};
use winnow::prelude::*;
use winnow::token::{one_of, rest, take_while};

/// Parse any temporal literal payload, `Null` when it is not valid
pub fn parse_temporal(raw: &str) -> Value {
    let text = raw.trim();
    if let Some(value) = parse_duration(text) {
        return value;
    }
    if let Some(dt) = parse_date_time(text) {
        return Value::DateTime(dt);
    }
    if let Some(date) = parse_date(text) {
        return Value::Date(date);
    }
    if let Some(time) = parse_time(text) {
        return Value::Time(time);
    }
    log::debug!("invalid temporal literal {:?}", raw);
    Value::Null
}

/// Run a parser over the whole input
fn complete<O>(text: &str, mut parser: impl FnMut(&mut &str) -> ModalResult<O>) -> Option<O> {
    let mut input = text;
    let output = parser(&mut input).ok()?;
    input.is_empty().then_some(output)
}

pub fn parse_date(text: &str) -> Option<FeelDate> {
    complete(text, date)
}

pub fn parse_time(text: &str) -> Option<FeelTime> {
    complete(text, time)
}

pub fn parse_date_time(text: &str) -> Option<FeelDateTime> {
    complete(text, |input: &mut &str| {
        let d = date.parse_next(input)?;
        'T'.parse_next(input)?;
        let t = time.parse_next(input)?;
        Ok(FeelDateTime::new(d, t))
    })
}

/// Parse an ISO-8601 duration into whichever duration kind it denotes
pub fn parse_duration(text: &str) -> Option<Value> {
    complete(text, duration).flatten()
}

fn number<T: std::str::FromStr>(input: &mut &str) -> ModalResult<T> {
    digit1.verify_map(|s: &str| s.parse().ok()).parse_next(input)
}

fn fixed2(input: &mut &str) -> ModalResult<u8> {
    take_while(2, |c: char| c.is_ascii_digit())
        .verify_map(|s: &str| s.parse().ok())
        .parse_next(input)
}

fn date(input: &mut &str) -> ModalResult<FeelDate> {
    let negative = opt('-').parse_next(input)?.is_some();
    let year: i32 = take_while(4.., |c: char| c.is_ascii_digit())
        .verify_map(|s: &str| s.parse().ok())
        .parse_next(input)?;
    '-'.parse_next(input)?;
    let month = fixed2.parse_next(input)?;
    '-'.parse_next(input)?;
    let day = fixed2.parse_next(input)?;
    let year = if negative { -year } else { year };
    FeelDate::new(year, month, day).ok_or_else(backtrack)
}

fn fraction(input: &mut &str) -> ModalResult<u32> {
    preceded('.', digit1)
        .map(|digits: &str| {
            let mut padded: String = digits.chars().take(9).collect();
            while padded.len() < 9 {
                padded.push('0');
            }
            padded.parse().unwrap_or(0)
        })
        .parse_next(input)
}

/// Offset in seconds: `Z` or `±hh:mm`
fn offset(input: &mut &str) -> ModalResult<i32> {
    alt((
        'Z'.value(0),
        (one_of(['+', '-']), fixed2, ':', fixed2).map(|(sign, h, _, m): (char, u8, char, u8)| {
            let secs = i32::from(h) * 3600 + i32::from(m) * 60;
            if sign == '-' { -secs } else { secs }
        }),
    ))
    .parse_next(input)
}

fn time(input: &mut &str) -> ModalResult<FeelTime> {
    let hour = fixed2.parse_next(input)?;
    ':'.parse_next(input)?;
    let minute = fixed2.parse_next(input)?;
    let second = opt(preceded(':', fixed2)).parse_next(input)?.unwrap_or(0);
    let nanos = opt(fraction).parse_next(input)?.unwrap_or(0);
    let mut t = FeelTime::new(hour, minute, second, nanos).ok_or_else(backtrack)?;
    if let Some(secs) = opt(offset).parse_next(input)? {
        t = t.with_offset(secs).ok_or_else(backtrack)?;
    }
    if let Some(zone) = opt(preceded('@', rest)).parse_next(input)? {
        if zone.is_empty() {
            return Err(backtrack());
        }
        t = t.with_zone(zone);
    }
    Ok(t)
}

/// Designators in canonical order; `M` appears twice, split by `T`
const DATE_DESIGNATORS: [char; 4] = ['Y', 'M', 'W', 'D'];
const TIME_DESIGNATORS: [char; 3] = ['H', 'M', 'S'];

fn duration(input: &mut &str) -> ModalResult<Option<Value>> {
    let negative = opt('-').parse_next(input)?.is_some();
    'P'.parse_next(input)?;

    let mut date_parts: [Option<i64>; 4] = [None; 4];
    let mut last = None;
    while let Some((n, d)) = opt((number::<i64>, one_of(DATE_DESIGNATORS))).parse_next(input)? {
        let index = DATE_DESIGNATORS.iter().position(|c| *c == d).unwrap_or(0);
        if last.is_some_and(|l| index <= l) {
            return Err(backtrack());
        }
        last = Some(index);
        date_parts[index] = Some(n);
    }

    let mut time_parts: [Option<f64>; 3] = [None; 3];
    if opt('T').parse_next(input)?.is_some() {
        let mut last = None;
        loop {
            let Some(n) = opt(decimal).parse_next(input)? else {
                break;
            };
            let d = one_of(TIME_DESIGNATORS).parse_next(input)?;
            let index = TIME_DESIGNATORS.iter().position(|c| *c == d).unwrap_or(0);
            // only seconds may carry a fraction
            if last.is_some_and(|l| index <= l) || (n.fract() != 0.0 && d != 'S') {
                return Err(backtrack());
            }
            last = Some(index);
            time_parts[index] = Some(n);
        }
        if time_parts.iter().all(Option::is_none) {
            return Err(backtrack());
        }
    }

    let [years, months, weeks, days] = date_parts;
    let year_month = years.is_some() || months.is_some();
    let day_time = weeks.is_some() || days.is_some() || time_parts.iter().any(Option::is_some);
    let sign = if negative { -1 } else { 1 };

    Ok(match (year_month, day_time) {
        (true, false) => years
            .unwrap_or(0)
            .checked_mul(12)
            .and_then(|m| m.checked_add(months.unwrap_or(0)))
            .map(|m| Value::year_month_duration(sign * m)),
        (false, true) => {
            let [hours, minutes, seconds] = time_parts;
            // day counts are exact in f64 only up to 2^53
            let whole_days = weeks.unwrap_or(0) as f64 * 7.0 + days.unwrap_or(0) as f64;
            let total = whole_days * 86_400.0
                + hours.unwrap_or(0.0) * 3600.0
                + minutes.unwrap_or(0.0) * 60.0
                + seconds.unwrap_or(0.0);
            Some(Value::day_time_duration(sign as f64 * total))
        }
        _ => None,
    })
}

fn decimal(input: &mut &str) -> ModalResult<f64> {
    (digit1, opt(preceded('.', digit1)))
        .take()
        .verify_map(|s: &str| s.parse().ok())
        .parse_next(input)
}

fn backtrack() -> winnow::error::ErrMode<winnow::error::ContextError> {
    winnow::error::ErrMode::Backtrack(winnow::error::ContextError::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("2024-03-01", "2024-03-01")]
    #[case("10:30:00", "10:30:00")]
    #[case("10:30:00.5+02:00", "10:30:00.5+02:00")]
    #[case("10:30:00Z", "10:30:00Z")]
    #[case("10:30:00@Europe/Paris", "10:30:00@Europe/Paris")]
    #[case("2024-03-01T10:30:00", "2024-03-01T10:30:00")]
    #[case("2024-03-01T23:59:59-05:00", "2024-03-01T23:59:59-05:00")]
    #[case("P1Y2M", "P1Y2M")]
    #[case("P14M", "P1Y2M")]
    #[case("-P2Y", "-P2Y")]
    #[case("P1DT2H", "P1DT2H")]
    #[case("PT90M", "PT1H30M")]
    #[case("P1W", "P7D")]
    #[case("PT1.5S", "PT1.5S")]
    #[case("-PT0.25S", "-PT0.25S")]
    fn test_parse_and_render(#[case] raw: &str, #[case] rendered: &str) {
        assert_eq!(parse_temporal(raw).to_string(), rendered);
    }

    #[rstest]
    #[case("2023-02-29")]
    #[case("2024-13-01")]
    #[case("24:00:00")]
    #[case("10:60:00")]
    #[case("P")]
    #[case("PT")]
    #[case("P1Y2D")]
    #[case("P1M1Y")]
    #[case("P1.5D")]
    #[case("10:00:00+15:00")]
    #[case("2024-03-01T")]
    #[case("hello")]
    fn test_invalid_literals(#[case] raw: &str) {
        assert!(parse_temporal(raw).is_null(), "{raw} should not parse");
    }

    #[test]
    fn test_duration_kinds() {
        assert!(matches!(parse_duration("P1Y"), Some(Value::YearMonthDuration(_))));
        assert!(matches!(parse_duration("PT1S"), Some(Value::DayTimeDuration(_))));
        assert_eq!(parse_duration("P1Y1D"), None);
    }

    #[test]
    fn test_huge_durations() {
        assert!(parse_temporal("P999999999999999999Y").is_null());
        assert!(parse_temporal("P768614336404564651Y").is_null());
        assert_eq!(
            parse_temporal("P700000000000000000Y"),
            Value::year_month_duration(8_400_000_000_000_000_000)
        );
        assert!(matches!(
            parse_temporal("P999999999999999999W"),
            Value::DayTimeDuration(_)
        ));
    }

    #[test]
    fn test_negative_year() {
        let date = parse_date("-0044-03-15").unwrap();
        assert_eq!(date.year, -44);
        assert_eq!(date.to_string(), "-0044-03-15");
    }
}
