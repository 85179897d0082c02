//! Record model for the attendance log.

use crate::utils::date;
use chrono::NaiveDate;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Status {
    Present,
    Absent,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Present => "Present",
            Status::Absent => "Absent",
        }
    }

    pub fn from_code(s: &str) -> Option<Status> {
        match s {
            "Present" => Some(Status::Present),
            "Absent" => Some(Status::Absent),
            _ => None,
        }
    }
}

/// One attendance entry, keyed by date.
///
/// `date`, `day_name` and `status` never change after creation; only
/// `synced` flips to true once the record has been part of a successful
/// backup push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub day_name: String,
    pub status: Status,
    pub synced: bool,
}

impl AttendanceRecord {
    /// Build a fresh, not-yet-synced record; the weekday name is derived
    /// from the date.
    pub fn new(d: NaiveDate, status: Status) -> Self {
        Self {
            date: d,
            day_name: date::weekday_name(d),
            status,
            synced: false,
        }
    }
}
