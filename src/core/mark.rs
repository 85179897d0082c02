//! Marking logic: the gate between a user action and the record log.

use crate::core::calendar::SchoolCalendar;
use crate::errors::AppResult;
use crate::store::models::{AttendanceRecord, Status};
use crate::store::{AppendOutcome, AttendanceLog};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkOutcome {
    Recorded(AttendanceRecord),
    AlreadyMarked,
    NoSchoolDay,
}

pub struct MarkLogic;

impl MarkLogic {
    /// Mark attendance for a date. Rejected when the date is not a school
    /// day or a record for it already exists; neither rejection touches
    /// the log.
    pub fn mark(
        log: &AttendanceLog,
        calendar: &SchoolCalendar,
        d: NaiveDate,
        status: Status,
    ) -> AppResult<MarkOutcome> {
        if !calendar.is_school_day(d) {
            return Ok(MarkOutcome::NoSchoolDay);
        }

        let record = AttendanceRecord::new(d, status);
        match log.append(&record)? {
            AppendOutcome::Duplicate => Ok(MarkOutcome::AlreadyMarked),
            AppendOutcome::Added => Ok(MarkOutcome::Recorded(record)),
        }
    }
}
