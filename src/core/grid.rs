//! Month grid computation for the calendar view.
//!
//! The displayed month spans 42 consecutive days (6 rows of 7) starting
//! from the Monday on or before the first of the month. Each cell carries
//! a display state the renderer maps to a visual treatment.

use crate::core::calendar::SchoolCalendar;
use crate::errors::{AppError, AppResult};
use crate::store::models::{AttendanceRecord, Status};
use crate::utils::date;
use chrono::{Duration, NaiveDate};

pub const GRID_DAYS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    Absent,
    PresentSynced,
    PresentUnsynced,
    NonSchoolDay,
    NoRecord,
}

#[derive(Debug, Clone, Copy)]
pub struct DayCell {
    pub date: NaiveDate,
    pub state: DayState,
}

/// Classify each of the 42 grid days. A recorded day is classified by its
/// record even when the rules say it was not a school day.
pub fn month_grid(
    year: i32,
    month: u32,
    records: &[AttendanceRecord],
    calendar: &SchoolCalendar,
) -> AppResult<Vec<DayCell>> {
    let start = date::grid_start(year, month)
        .ok_or_else(|| AppError::InvalidDate(format!("{}-{:02}", year, month)))?;

    let mut cells = Vec::with_capacity(GRID_DAYS);
    for i in 0..GRID_DAYS {
        let d = start + Duration::days(i as i64);
        let state = match records.iter().find(|r| r.date == d) {
            Some(r) => match (r.status, r.synced) {
                (Status::Absent, _) => DayState::Absent,
                (Status::Present, true) => DayState::PresentSynced,
                (Status::Present, false) => DayState::PresentUnsynced,
            },
            None if !calendar.is_school_day(d) => DayState::NonSchoolDay,
            None => DayState::NoRecord,
        };
        cells.push(DayCell { date: d, state });
    }

    Ok(cells)
}
