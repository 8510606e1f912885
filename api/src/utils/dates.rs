//! Calendar helpers for the fixed Japan Standard Time offset used by every screen.
//!
//! Dates entered by administrators are JST calendar days; the ticketing API stores UTC instants.

use chrono::prelude::*;
use chrono::{Duration, ParseResult};

pub const JST_OFFSET_HOURS: i64 = 9;

const DATE_FORMATS: [&str; 3] = ["%Y/%m/%d", "%Y%m%d", "%Y-%m-%d"];
const TIME_FORMATS: [&str; 2] = ["%H%M", "%H:%M"];

/// Accepts `YYYY/MM/DD`, `YYYYMMDD` and `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> ParseResult<NaiveDate> {
    let value = value.trim();
    let mut result = NaiveDate::parse_from_str(value, DATE_FORMATS[0]);
    for format in &DATE_FORMATS[1..] {
        if result.is_ok() {
            break;
        }
        result = NaiveDate::parse_from_str(value, format);
    }
    result
}

/// Accepts `HHmm` and `HH:mm`.
pub fn parse_time(value: &str) -> ParseResult<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMATS[0]).or_else(|_| NaiveTime::parse_from_str(value, TIME_FORMATS[1]))
}

pub fn jst_datetime(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_utc(date.and_time(time) - Duration::hours(JST_OFFSET_HOURS), Utc)
}

/// 00:00 JST of the given day.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    jst_datetime(date, NaiveTime::from_hms(0, 0, 0))
}

/// JST calendar day of an instant.
pub fn jst_date(instant: DateTime<Utc>) -> NaiveDate {
    (instant.naive_utc() + Duration::hours(JST_OFFSET_HOURS)).date()
}

pub fn today() -> NaiveDate {
    jst_date(Utc::now())
}

pub fn format_day(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

/// Same time of day one calendar month earlier, clamped to the end of a shorter month.
pub fn one_month_before(instant: DateTime<Utc>) -> DateTime<Utc> {
    let (year, month) = if instant.month() == 1 {
        (instant.year() - 1, 12)
    } else {
        (instant.year(), instant.month() - 1)
    };
    let mut day = instant.day();
    let date = loop {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            break date;
        }
        day -= 1;
    };
    DateTime::<Utc>::from_utc(date.and_time(instant.time()), Utc)
}

// Whole minutes a chrono Duration can hold
const MAX_DURATION_MINUTES: i64 = i64::MAX / 1000 / 60;

/// `instant` moved by `minutes`, `None` when the result is not a representable instant.
pub fn checked_add_minutes(instant: DateTime<Utc>, minutes: i64) -> Option<DateTime<Utc>> {
    if !(-MAX_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&minutes) {
        return None;
    }
    instant.checked_add_signed(Duration::minutes(minutes))
}

/// 0 is Sunday.
pub fn weekday_number(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Length in minutes of an ISO 8601 duration such as `PT120M` or `P1DT2H30M`.
/// Seconds are truncated. Year and month designators are not accepted.
pub fn iso_duration_minutes(value: &str) -> Option<i64> {
    let rest = value.trim().strip_prefix('P')?;
    if rest.is_empty() {
        return None;
    }
    let mut seconds = 0i64;
    let mut in_time = false;
    let mut number = String::new();
    for c in rest.chars() {
        match c {
            'T' if !in_time && number.is_empty() => in_time = true,
            '0'..='9' | '.' => number.push(c),
            designator => {
                let amount: f64 = number.parse().ok()?;
                number.clear();
                let unit = match (in_time, designator) {
                    (false, 'W') => 7.0 * 86_400.0,
                    (false, 'D') => 86_400.0,
                    (true, 'H') => 3_600.0,
                    (true, 'M') => 60.0,
                    (true, 'S') => 1.0,
                    _ => return None,
                };
                seconds = seconds.saturating_add((amount * unit) as i64);
            }
        }
    }
    if !number.is_empty() {
        return None;
    }
    Some(seconds / 60)
}

/// Rough English rendering of a length of time, e.g. "2 hours".
pub fn humanize_minutes(minutes: i64) -> String {
    let minutes = minutes.abs();
    match minutes {
        0 => "a few seconds".to_string(),
        1 => "a minute".to_string(),
        m if m < 45 => format!("{} minutes", m),
        m if m < 90 => "an hour".to_string(),
        m if m < 22 * 60 => format!("{} hours", (m as f64 / 60.0).round() as i64),
        m if m < 36 * 60 => "a day".to_string(),
        m => format!("{} days", (m as f64 / 1440.0).round() as i64),
    }
}
