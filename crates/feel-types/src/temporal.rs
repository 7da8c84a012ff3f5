//! FEEL temporal types and the proleptic Gregorian day-count calendar
//!
//! All date arithmetic goes through a day count relative to 1970-01-01,
//! computed with integer civil-calendar conversions. Nothing here depends on
//! a host date library's epoch or leap-second handling.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

const SECONDS_PER_DAY: i64 = 86_400;
const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_DAY: i128 = SECONDS_PER_DAY as i128 * NANOS_PER_SECOND;

// ============================================================================
// Calendar
// ============================================================================

/// Gregorian leap-year rule, extended indefinitely in both directions
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since 1970-01-01 for a civil date
pub const fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = if month <= 2 { year as i64 - 1 } else { year as i64 };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let m = month as i64;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Civil date for a count of days since 1970-01-01
///
/// `None` when the year falls outside `i32`.
pub fn civil_from_days(days: i64) -> Option<(i32, u8, u8)> {
    let z = days.checked_add(719_468)?;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    Some((i32::try_from(year).ok()?, month, day))
}

/// ISO weekday for a day count, Monday = 1 ... Sunday = 7
pub const fn iso_weekday(days: i64) -> u8 {
    // 1970-01-01 was a Thursday
    ((days + 3).rem_euclid(7) + 1) as u8
}

pub const MONTH_NAMES: [&str; 12] = [
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
];

pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

// ============================================================================
// Date
// ============================================================================

/// A calendar date without time zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeelDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl FeelDate {
    /// Create a date, `None` when the day does not exist
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn from_days(days: i64) -> Option<Self> {
        let (year, month, day) = civil_from_days(days)?;
        Some(Self { year, month, day })
    }

    /// Days since 1970-01-01
    pub fn days(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    pub fn weekday(&self) -> u8 {
        iso_weekday(self.days())
    }

    /// 1-based ordinal day within the year
    pub fn day_of_year(&self) -> u16 {
        (self.days() - days_from_civil(self.year, 1, 1) + 1) as u16
    }

    /// ISO-8601 week number
    pub fn iso_week(&self) -> u8 {
        let week = (i64::from(self.day_of_year()) - i64::from(self.weekday()) + 10) / 7;
        if week < 1 {
            iso_weeks_in_year(self.year - 1)
        } else if week > i64::from(iso_weeks_in_year(self.year)) {
            1
        } else {
            week as u8
        }
    }

    pub fn last_day_of_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    pub fn add_days(&self, days: i64) -> Option<Self> {
        Self::from_days(self.days().checked_add(days)?)
    }

    /// Shift by whole months, clamping the day to the target month's length
    pub fn add_months(&self, months: i64) -> Option<Self> {
        let total = (i64::from(self.year) * 12 + i64::from(self.month) - 1).checked_add(months)?;
        let year = i32::try_from(total.div_euclid(12)).ok()?;
        let month = (total.rem_euclid(12) + 1) as u8;
        let day = self.day.min(days_in_month(year, month));
        Self::new(year, month, day)
    }
}

fn iso_weeks_in_year(year: i32) -> u8 {
    let jan1 = iso_weekday(days_from_civil(year, 1, 1));
    if jan1 == 4 || (jan1 == 3 && is_leap_year(year)) {
        53
    } else {
        52
    }
}

impl PartialOrd for FeelDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.days().cmp(&other.days()))
    }
}

impl fmt::Display for FeelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -i64::from(self.year), self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

// ============================================================================
// Time
// ============================================================================

/// A time of day with optional UTC offset and named zone
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeelTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
    /// Offset from UTC in seconds
    pub offset: Option<i32>,
    /// IANA zone name, kept verbatim
    pub zone: Option<String>,
}

impl FeelTime {
    pub fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 || nanosecond >= 1_000_000_000 {
            return None;
        }
        Some(Self {
            hour,
            minute,
            second,
            nanosecond,
            offset: None,
            zone: None,
        })
    }

    /// Attach an offset; offsets beyond ±14:00 are rejected
    pub fn with_offset(mut self, offset: i32) -> Option<Self> {
        if offset.abs() > 14 * 3600 {
            return None;
        }
        self.offset = Some(offset);
        Some(self)
    }

    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    pub fn midnight() -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
            nanosecond: 0,
            offset: None,
            zone: None,
        }
    }

    /// Nanoseconds since local midnight
    pub fn nanos_of_day(&self) -> i128 {
        (i128::from(self.hour) * 3600 + i128::from(self.minute) * 60 + i128::from(self.second))
            * NANOS_PER_SECOND
            + i128::from(self.nanosecond)
    }

    /// Seconds since local midnight, fraction included
    pub fn seconds_of_day(&self) -> f64 {
        self.nanos_of_day() as f64 / 1e9
    }

    /// Rebuild from nanoseconds since midnight, wrapping around the day
    fn from_nanos_of_day(nanos: i128, offset: Option<i32>, zone: Option<String>) -> Self {
        let nanos = nanos.rem_euclid(NANOS_PER_DAY);
        let secs = (nanos / NANOS_PER_SECOND) as i64;
        Self {
            hour: (secs / 3600) as u8,
            minute: (secs / 60 % 60) as u8,
            second: (secs % 60) as u8,
            nanosecond: (nanos % NANOS_PER_SECOND) as u32,
            offset,
            zone,
        }
    }

    /// Shift by a signed number of seconds, wrapping around midnight
    pub fn add_seconds(&self, seconds: f64) -> Option<Self> {
        let shift = seconds_to_nanos(seconds)?.rem_euclid(NANOS_PER_DAY);
        Some(Self::from_nanos_of_day(
            self.nanos_of_day() + shift,
            self.offset,
            self.zone.clone(),
        ))
    }

    /// UTC-normalised nanoseconds, when an offset is present
    fn utc_nanos(&self) -> i128 {
        self.nanos_of_day() - i128::from(self.offset.unwrap_or(0)) * NANOS_PER_SECOND
    }

    /// Difference in seconds; `None` when only one side has an offset
    pub fn seconds_since(&self, other: &Self) -> Option<f64> {
        if self.offset.is_some() != other.offset.is_some() {
            return None;
        }
        Some((self.utc_nanos() - other.utc_nanos()) as f64 / 1e9)
    }
}

impl PartialOrd for FeelTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.offset.is_some() != other.offset.is_some() {
            return None;
        }
        Some(self.utc_nanos().cmp(&other.utc_nanos()))
    }
}

impl fmt::Display for FeelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.nanosecond > 0 {
            let frac = format!("{:09}", self.nanosecond);
            write!(f, ".{}", frac.trim_end_matches('0'))?;
        }
        match self.offset {
            Some(0) => write!(f, "Z")?,
            Some(offset) => {
                let sign = if offset < 0 { '-' } else { '+' };
                let abs = offset.abs();
                write!(f, "{}{:02}:{:02}", sign, abs / 3600, abs / 60 % 60)?;
            }
            None => {}
        }
        if let Some(zone) = &self.zone {
            write!(f, "@{}", zone)?;
        }
        Ok(())
    }
}

// ============================================================================
// Date and time
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeelDateTime {
    pub date: FeelDate,
    pub time: FeelTime,
}

impl FeelDateTime {
    pub fn new(date: FeelDate, time: FeelTime) -> Self {
        Self { date, time }
    }

    /// Midnight at the start of a date
    pub fn from_date(date: FeelDate) -> Self {
        Self::new(date, FeelTime::midnight())
    }

    fn local_nanos(&self) -> i128 {
        i128::from(self.date.days()) * NANOS_PER_DAY + self.time.nanos_of_day()
    }

    fn utc_nanos(&self) -> i128 {
        self.local_nanos() - i128::from(self.time.offset.unwrap_or(0)) * NANOS_PER_SECOND
    }

    pub fn add_seconds(&self, seconds: f64) -> Option<Self> {
        let nanos = self.local_nanos().checked_add(seconds_to_nanos(seconds)?)?;
        let days = i64::try_from(nanos.div_euclid(NANOS_PER_DAY)).ok()?;
        let time = FeelTime::from_nanos_of_day(
            nanos.rem_euclid(NANOS_PER_DAY),
            self.time.offset,
            self.time.zone.clone(),
        );
        Some(Self::new(FeelDate::from_days(days)?, time))
    }

    pub fn add_months(&self, months: i64) -> Option<Self> {
        Some(Self::new(self.date.add_months(months)?, self.time.clone()))
    }

    /// Difference in seconds; `None` when only one side has an offset
    pub fn seconds_since(&self, other: &Self) -> Option<f64> {
        if self.time.offset.is_some() != other.time.offset.is_some() {
            return None;
        }
        Some((self.utc_nanos() - other.utc_nanos()) as f64 / 1e9)
    }
}

impl PartialOrd for FeelDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.time.offset.is_some() != other.time.offset.is_some() {
            return None;
        }
        Some(self.utc_nanos().cmp(&other.utc_nanos()))
    }
}

impl fmt::Display for FeelDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

// ============================================================================
// Durations
// ============================================================================

/// Days-and-time duration, a signed number of seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DayTimeDuration(pub f64);

impl DayTimeDuration {
    pub fn seconds(&self) -> f64 {
        self.0
    }

    pub fn from_days(days: i64) -> Self {
        Self(days as f64 * SECONDS_PER_DAY as f64)
    }

    /// Whole days, truncated toward zero
    pub fn whole_days(&self) -> i64 {
        (self.0 / SECONDS_PER_DAY as f64).trunc() as i64
    }

    /// Signed (days, hours, minutes, seconds) components
    pub fn components(&self) -> (i64, i64, i64, f64) {
        let sign = if self.0 < 0.0 { -1 } else { 1 };
        let abs = self.0.abs();
        let whole = abs.trunc() as i64;
        let frac = abs - abs.trunc();
        (
            sign * (whole / SECONDS_PER_DAY),
            sign * (whole / 3600 % 24),
            sign * (whole / 60 % 60),
            sign as f64 * ((whole % 60) as f64 + frac),
        )
    }
}

impl fmt::Display for DayTimeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            return write!(f, "PT0S");
        }
        let (days, hours, minutes, seconds) = self.components();
        if self.0 < 0.0 {
            write!(f, "-")?;
        }
        write!(f, "P")?;
        if days != 0 {
            write!(f, "{}D", days.abs())?;
        }
        if hours != 0 || minutes != 0 || seconds != 0.0 {
            write!(f, "T")?;
            if hours != 0 {
                write!(f, "{}H", hours.abs())?;
            }
            if minutes != 0 {
                write!(f, "{}M", minutes.abs())?;
            }
            if seconds != 0.0 {
                write!(f, "{}S", seconds.abs())?;
            }
        }
        Ok(())
    }
}

/// Years-and-months duration, a signed number of months
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonthDuration(pub i64);

impl YearMonthDuration {
    pub fn months(&self) -> i64 {
        self.0
    }

    pub fn years_part(&self) -> i64 {
        self.0 / 12
    }

    pub fn months_part(&self) -> i64 {
        self.0 % 12
    }

    /// Whole calendar months from `from` to `to`, adjusted for day of month
    pub fn between(from: &FeelDate, to: &FeelDate) -> Self {
        let mut months = (i64::from(to.year) - i64::from(from.year)) * 12
            + i64::from(to.month)
            - i64::from(from.month);
        if months > 0 && to.day < from.day {
            months -= 1;
        } else if months < 0 && to.day > from.day {
            months += 1;
        }
        Self(months)
    }
}

impl fmt::Display for YearMonthDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "P0M");
        }
        if self.0 < 0 {
            write!(f, "-")?;
        }
        write!(f, "P")?;
        let years = self.years_part().abs();
        let months = self.months_part().abs();
        if years != 0 {
            write!(f, "{}Y", years)?;
        }
        if months != 0 {
            write!(f, "{}M", months)?;
        }
        Ok(())
    }
}

/// `None` for shifts too large to represent
fn seconds_to_nanos(seconds: f64) -> Option<i128> {
    let nanos = (seconds * 1e9).round();
    (nanos.is_finite() && nanos.abs() < 1e36).then_some(nanos as i128)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_days_from_civil_epoch() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);
        assert_eq!(civil_from_days(11_017), Some((2000, 3, 1)));
        assert_eq!(civil_from_days(-719_468), Some((0, 3, 1)));
    }

    #[test]
    fn test_out_of_range_days() {
        assert_eq!(civil_from_days(99_999_999_999_999), None);
        assert_eq!(civil_from_days(i64::MAX), None);
        assert_eq!(civil_from_days(i64::MIN), None);
        let date = FeelDate::new(2024, 1, 1).unwrap();
        assert_eq!(date.add_days(99_999_999_999_999), None);
        assert_eq!(date.add_days(i64::MAX), None);
        assert_eq!(date.add_months(i64::MAX), None);
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert!(FeelDate::new(2023, 2, 29).is_none());
    }

    #[test]
    fn test_weekday_and_week() {
        let date = FeelDate::new(2024, 1, 1).unwrap();
        assert_eq!(date.weekday(), 1);
        assert_eq!(date.iso_week(), 1);
        // 2021-01-03 is a Sunday in week 53 of 2020
        assert_eq!(FeelDate::new(2021, 1, 3).unwrap().iso_week(), 53);
        assert_eq!(FeelDate::new(2024, 12, 31).unwrap().day_of_year(), 366);
    }

    #[test]
    fn test_add_months_clamps() {
        let jan31 = FeelDate::new(2024, 1, 31).unwrap();
        assert_eq!(jan31.add_months(1), FeelDate::new(2024, 2, 29));
        assert_eq!(jan31.add_months(-2), FeelDate::new(2023, 11, 30));
    }

    #[test]
    fn test_time_wraps() {
        let t = FeelTime::new(23, 30, 0, 0).unwrap();
        let later = t.add_seconds(3600.0).unwrap();
        assert_eq!((later.hour, later.minute), (0, 30));
        let earlier = FeelTime::new(0, 15, 0, 0).unwrap().add_seconds(-1800.0).unwrap();
        assert_eq!((earlier.hour, earlier.minute), (23, 45));
        assert_eq!(t.add_seconds(1e300), None);
    }

    #[test]
    fn test_offset_comparison() {
        let a = FeelTime::new(10, 0, 0, 0).unwrap().with_offset(3600).unwrap();
        let b = FeelTime::new(9, 0, 0, 0).unwrap().with_offset(0).unwrap();
        let local = FeelTime::new(9, 0, 0, 0).unwrap();
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
        assert_eq!(a.partial_cmp(&local), None);
    }

    #[test]
    fn test_duration_display() {
        assert_eq!(DayTimeDuration(93_600.0).to_string(), "P1DT2H");
        assert_eq!(DayTimeDuration(-90.5).to_string(), "-PT1M30.5S");
        assert_eq!(DayTimeDuration(0.0).to_string(), "PT0S");
        assert_eq!(YearMonthDuration(14).to_string(), "P1Y2M");
        assert_eq!(YearMonthDuration(-12).to_string(), "-P1Y");
        assert_eq!(YearMonthDuration(0).to_string(), "P0M");
    }

    #[test]
    fn test_months_between() {
        let from = FeelDate::new(2020, 1, 15).unwrap();
        let to = FeelDate::new(2021, 3, 14).unwrap();
        assert_eq!(YearMonthDuration::between(&from, &to), YearMonthDuration(13));
        assert_eq!(YearMonthDuration::between(&to, &from), YearMonthDuration(-13));
    }

    #[test]
    fn test_time_display() {
        let t = FeelTime::new(10, 5, 3, 250_000_000)
            .unwrap()
            .with_offset(-5 * 3600)
            .unwrap();
        assert_eq!(t.to_string(), "10:05:03.25-05:00");
        let z = FeelTime::new(8, 0, 0, 0).unwrap().with_offset(0).unwrap();
        assert_eq!(z.to_string(), "08:00:00Z");
    }
}
