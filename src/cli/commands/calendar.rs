use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::SchoolCalendar;
use crate::core::grid::{self, DayState};
use crate::errors::{AppError, AppResult};
use crate::store::AttendanceLog;
use crate::utils::colors::{color_for_day, BOLD, GREEN, GREY, RED, RESET, YELLOW};
use crate::utils::{date, path::expand_tilde};
use chrono::Datelike;

/// Handle the `calendar` subcommand: print the 6-week grid for the
/// displayed month, one colored cell per day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month } = cmd {
        let (year, m) = match month {
            Some(s) => date::parse_month(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => {
                let today = date::today();
                (today.year(), today.month())
            }
        };

        let log = AttendanceLog::new(expand_tilde(&cfg.store_file));
        let records = log.load()?;
        let calendar = SchoolCalendar::from_config(cfg)?;

        let cells = grid::month_grid(year, m, &records, &calendar)?;

        println!("{}{:>14} {}{}", BOLD, month_name(m), year, RESET);
        println!(" Mo  Tu  We  Th  Fr  Sa  Su");

        for week in cells.chunks(7) {
            let mut line = String::new();
            for cell in week {
                let color = color_for_day(cell.state);
                // Days spilling in from the neighbor months render dim
                // unless a record or rule colors them.
                let dim = cell.date.month() != m && cell.state == DayState::NoRecord;
                if dim {
                    line.push_str(&format!("{}{:>3}{} ", GREY, cell.date.day(), RESET));
                } else {
                    line.push_str(&format!("{}{:>3}{} ", color, cell.date.day(), RESET));
                }
            }
            println!("{}", line);
        }

        println!();
        println!(
            "{}███{} absent   {}███{} present (backed up)   {}███{} present (not backed up)   {}███{} no school",
            RED, RESET, GREEN, RESET, YELLOW, RESET, GREY, RESET
        );
    }

    Ok(())
}

fn month_name(m: u32) -> &'static str {
    match m {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
