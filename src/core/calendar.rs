//! School-day rules: weekly off-day, regional holidays, vacation ranges.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// Decides whether attendance is expected on a given date.
///
/// A date is a school day unless it falls on the weekly off-day, is a
/// holiday, or lies inside a configured vacation range (endpoints
/// included). All checks are at day granularity.
#[derive(Debug, Clone)]
pub struct SchoolCalendar {
    weekly_off: Weekday,
    holidays: HashSet<NaiveDate>,
    vacations: Vec<(NaiveDate, NaiveDate)>,
}

impl SchoolCalendar {
    /// Build the calendar from the configuration. Vacation strings and
    /// extra holidays are `DD-MM-YYYY`; regional holidays are generated
    /// over a year window covering the vacations and the current year.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let weekly_off: Weekday = cfg
            .weekly_off
            .parse()
            .map_err(|_| AppError::InvalidWeekday(cfg.weekly_off.clone()))?;

        let mut vacations = Vec::new();
        for v in &cfg.vacations {
            let start = date::parse_store_date(&v.start)
                .ok_or_else(|| AppError::InvalidDate(v.start.clone()))?;
            let end = date::parse_store_date(&v.end)
                .ok_or_else(|| AppError::InvalidDate(v.end.clone()))?;
            if end < start {
                return Err(AppError::Config(format!(
                    "vacation range ends before it starts: {} > {}",
                    v.start, v.end
                )));
            }
            vacations.push((start, end));
        }

        let mut holidays = HashSet::new();
        for h in &cfg.extra_holidays {
            let d =
                date::parse_store_date(h).ok_or_else(|| AppError::InvalidDate(h.clone()))?;
            holidays.insert(d);
        }

        let this_year = date::today().year();
        let mut first = this_year - 1;
        let mut last = this_year + 1;
        for (start, end) in &vacations {
            first = first.min(start.year());
            last = last.max(end.year());
        }
        for year in first..=last {
            holidays.extend(regional_holidays(&cfg.holiday_region, year));
        }

        Ok(Self {
            weekly_off,
            holidays,
            vacations,
        })
    }

    pub fn is_school_day(&self, d: NaiveDate) -> bool {
        !(d.weekday() == self.weekly_off || self.holidays.contains(&d) || self.is_vacation(d))
    }

    pub fn is_vacation(&self, d: NaiveDate) -> bool {
        self.vacations
            .iter()
            .any(|(start, end)| *start <= d && d <= *end)
    }
}

/// Fixed-date national holidays for the configured region. Unrecognized
/// regions get no holidays.
fn regional_holidays(region: &str, year: i32) -> Vec<NaiveDate> {
    let days: &[(u32, u32)] = match region {
        // Republic Day, Independence Day, Gandhi Jayanti
        "IN" => &[(26, 1), (15, 8), (2, 10)],
        _ => &[],
    };

    days.iter()
        .filter_map(|&(day, month)| NaiveDate::from_ymd_opt(year, month, day))
        .collect()
}
