//! Date utilities: parsing, period expansion, month grid geometry.
//!
//! Two fixed formats coexist: the record log and the configuration use
//! `DD-MM-YYYY`, while CLI arguments use ISO `YYYY-MM-DD`.

use chrono::{Datelike, Duration, NaiveDate};

/// Format used by the record log and the vacation/holiday config entries.
pub const STORE_DATE_FORMAT: &str = "%d-%m-%Y";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse an ISO date (`YYYY-MM-DD`) from a CLI argument.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a `DD-MM-YYYY` date as written in the record log and the config.
pub fn parse_store_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, STORE_DATE_FORMAT).ok()
}

pub fn format_store_date(d: NaiveDate) -> String {
    d.format(STORE_DATE_FORMAT).to_string()
}

/// Full weekday name ("Monday", ..., "Sunday") for the `Day` column.
pub fn weekday_name(d: NaiveDate) -> String {
    d.format("%A").to_string()
}

/// Parse a `YYYY-MM` month selector into (year, month).
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&(s.to_string() + "-01"), "%Y-%m-%d").ok()?;
    Some((d.year(), d.month()))
}

/// The Monday on or before the first day of the given month: the top-left
/// cell of the 6-week calendar grid.
pub fn grid_start(year: i32, month: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let back = first.weekday().num_days_from_monday() as i64;
    Some(first - Duration::days(back))
}

pub fn generate_from_period(p: &str) -> Result<Vec<NaiveDate>, String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(vec![d]);
    }

    // YYYY-MM
    if let Ok(dm) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok(all_days_of_month(dm.year(), dm.month()));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>() {
        return Ok(all_days_of_year(year));
    }

    Err(format!("Invalid period: {}", p))
}

pub fn generate_range(start: &str, end: &str) -> Result<Vec<NaiveDate>, String> {
    let s = generate_from_period(start)?;
    let e = generate_from_period(end)?;

    let start_date = *s.first().unwrap();
    let end_date = *e.last().unwrap();

    let mut out = Vec::new();
    let mut d = start_date;

    while d <= end_date {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    Ok(out)
}

pub fn current_month_dates() -> Result<Vec<NaiveDate>, String> {
    let today = today();
    Ok(all_days_of_month(today.year(), today.month()))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1).unwrap();

    while d.month() == month {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    let mut v = Vec::new();

    let mut d = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    while d.year() == year {
        v.push(d);
        d = d.succ_opt().unwrap();
    }

    v
}
