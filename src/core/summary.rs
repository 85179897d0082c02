//! Attendance totals and percentage.

use crate::store::models::{AttendanceRecord, Status};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub percent: f64,
}

/// Count records and compute the present percentage. An empty log yields
/// 0.0 rather than a division error.
pub fn summarize(records: &[AttendanceRecord]) -> AttendanceSummary {
    let total = records.len();
    let present = records
        .iter()
        .filter(|r| r.status == Status::Present)
        .count();
    let absent = total - present;

    let percent = if total > 0 {
        present as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    AttendanceSummary {
        total,
        present,
        absent,
        percent,
    }
}
