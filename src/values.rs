//! Lenient number and date parsing.
//!
//! Every parser returns `None` on malformed input; callers treat that as a
//! skip. `,` thousands separators are accepted in numbers.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("valid decimal regex"));

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid digits regex"));

pub fn has_value(s: &str) -> bool {
    !s.trim().is_empty()
}

fn strip_separators(s: &str) -> Option<String> {
    if !has_value(s) {
        return None;
    }
    Some(s.trim().replace(',', ""))
}

pub fn to_short(s: &str) -> Option<i16> {
    strip_separators(s)?.parse().ok()
}

pub fn to_int(s: &str) -> Option<i32> {
    strip_separators(s)?.parse().ok()
}

pub fn to_long(s: &str) -> Option<i64> {
    strip_separators(s)?.parse().ok()
}

/// Accepts exponents; rejects NaN and infinities.
pub fn to_double(s: &str) -> Option<f64> {
    strip_separators(s)?.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Plain decimal notation only (no exponent).
pub fn to_decimal(s: &str) -> Option<f64> {
    let s = strip_separators(s)?;
    if !DECIMAL.is_match(&s) {
        return None;
    }
    s.parse().ok()
}

pub fn is_numeric(s: &str) -> bool {
    to_decimal(s).is_some()
}

/// Parses
/// - `yyyyMMdd`
/// - `yyyyMMddHHmmss`
/// - `y/m/d`
/// - `y/m/d H:m`
/// - `y/m/d H:m:s`
///
/// In the slashed forms a component that is not a number falls back to 1
/// (date) or 0 (time). Out-of-range dates yield `None`.
pub fn to_date_time(s: &str) -> Option<NaiveDateTime> {
    if !has_value(s) {
        return None;
    }
    let s = s.trim();
    match s.split('/').count() {
        1 => compact_date_time(s),
        3 => slashed_date_time(s),
        _ => None,
    }
}

fn compact_date_time(s: &str) -> Option<NaiveDateTime> {
    if !DIGITS.is_match(s) {
        return None;
    }
    let num = |range: std::ops::Range<usize>| s[range].parse::<u32>().ok();
    match s.len() {
        8 => date(num(0..4)? as i32, num(4..6)?, num(6..8)?)?.and_hms_opt(0, 0, 0),
        14 => date(num(0..4)? as i32, num(4..6)?, num(6..8)?)?
            .and_hms_opt(num(8..10)?, num(10..12)?, num(12..14)?),
        _ => None,
    }
}

fn slashed_date_time(s: &str) -> Option<NaiveDateTime> {
    let parts: Vec<&str> = s.split(' ').collect();
    let (date_part, time_part) = match parts.as_slice() {
        [d] => (*d, None),
        [d, t] => (*d, Some(*t)),
        _ => return None,
    };

    let ymd: Vec<i32> = date_part.split('/').map(|p| to_int(p).unwrap_or(1)).collect();
    let [y, m, d] = ymd.as_slice() else {
        return None;
    };
    let day = date(*y, u32::try_from(*m).ok()?, u32::try_from(*d).ok()?)?;

    let Some(time_part) = time_part else {
        return day.and_hms_opt(0, 0, 0);
    };

    let hms: Vec<u32> = time_part
        .split(':')
        .map(|p| to_int(p).and_then(|n| u32::try_from(n).ok()).unwrap_or(0))
        .collect();
    let time = match hms.as_slice() {
        [h, mi] => NaiveTime::from_hms_opt(*h, *mi, 0)?,
        [h, mi, sec] => NaiveTime::from_hms_opt(*h, *mi, *sec)?,
        _ => return None,
    };
    Some(day.and_time(time))
}

/// Years outside 1..=9999 are rejected.
fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    if !(1..=9999).contains(&y) {
        return None;
    }
    NaiveDate::from_ymd_opt(y, m, d)
}

pub fn format_date(d: &NaiveDateTime) -> String {
    d.format("%Y/%m/%d").to_string()
}

pub fn format_date_compact(d: &NaiveDateTime) -> String {
    d.format("%Y%m%d").to_string()
}

pub fn format_time(d: &NaiveDateTime) -> String {
    d.format("%H:%M:%S").to_string()
}

pub fn format_date_time_hm(d: &NaiveDateTime) -> String {
    d.format("%Y/%m/%d %H:%M").to_string()
}

pub fn format_date_time(d: &NaiveDateTime) -> String {
    d.format("%Y/%m/%d %H:%M:%S").to_string()
}

pub fn format_date_time_compact(d: &NaiveDateTime) -> String {
    d.format("%Y%m%d%H%M%S").to_string()
}

pub fn end_of_month(d: NaiveDate) -> Option<NaiveDate> {
    d.with_day(1)?.checked_add_months(Months::new(1))?.pred_opt()
}
