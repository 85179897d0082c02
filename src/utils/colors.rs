/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

use crate::core::grid::DayState;

/// Color for a calendar cell.
///
/// Absent → red, present and backed up → green, present but not yet
/// backed up → yellow, non-school day → grey, school day with no record
/// → no color.
pub fn color_for_day(state: DayState) -> &'static str {
    match state {
        DayState::Absent => RED,
        DayState::PresentSynced => GREEN,
        DayState::PresentUnsynced => YELLOW,
        DayState::NonSchoolDay => GREY,
        DayState::NoRecord => RESET,
    }
}

/// Colorize a `Synced` column value: `True` green, `False` yellow.
pub fn colorize_synced(synced: bool) -> String {
    if synced {
        format!("{GREEN}True{RESET}")
    } else {
        format!("{YELLOW}False{RESET}")
    }
}
