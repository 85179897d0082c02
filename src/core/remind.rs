//! Reminder tick check.
//!
//! The scheduler runs on a fixed coarse interval and fires only when the
//! wall clock's hour and minute exactly equal the configured reminder
//! time on a school day. A tick interval that misaligns with the minute
//! boundary can miss the reminder; ticks landing twice inside the target
//! minute fire twice. Both are accepted.

use crate::config::Config;
use crate::core::calendar::SchoolCalendar;
use chrono::{NaiveDateTime, Timelike};

pub const TICK_SECONDS: u64 = 60;

pub const REMINDER_TITLE: &str = "Attendance Reminder";
pub const REMINDER_BODY: &str = "Mark your attendance for today!";

pub struct ReminderLogic;

impl ReminderLogic {
    pub fn due(cfg: &Config, calendar: &SchoolCalendar, now: NaiveDateTime) -> bool {
        now.hour() == cfg.reminder_hour
            && now.minute() == cfg.reminder_minute
            && calendar.is_school_day(now.date())
    }
}
