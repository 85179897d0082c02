use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::SchoolCalendar;
use crate::core::remind::{ReminderLogic, REMINDER_BODY, REMINDER_TITLE, TICK_SECONDS};
use crate::errors::{AppError, AppResult};
use crate::notify;
use crate::ui::messages;
use chrono::NaiveDateTime;
use std::thread;
use std::time::Duration;

/// Handle the `remind` subcommand: a coarse fixed-interval tick that
/// fires the reminder when the clock hits the configured minute on a
/// school day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Remind { once, now } = cmd {
        let calendar = SchoolCalendar::from_config(cfg)?;

        if *once {
            let at = match now {
                Some(s) => NaiveDateTime::parse_from_str(s, "%d-%m-%Y %H:%M")
                    .map_err(|_| AppError::InvalidTime(s.clone()))?,
                None => chrono::Local::now().naive_local(),
            };

            if ReminderLogic::due(cfg, &calendar, at) {
                let _ = notify::send(REMINDER_TITLE, REMINDER_BODY);
                messages::success("Reminder fired");
            } else {
                messages::info("No reminder due");
            }
            return Ok(());
        }

        messages::info(format!(
            "Reminder scheduler running (every {}s, target {:02}:{:02})",
            TICK_SECONDS, cfg.reminder_hour, cfg.reminder_minute
        ));

        loop {
            let at = chrono::Local::now().naive_local();
            if ReminderLogic::due(cfg, &calendar, at) {
                // Failure to reach the notifier must not kill the loop.
                let _ = notify::send(REMINDER_TITLE, REMINDER_BODY);
            }
            thread::sleep(Duration::from_secs(TICK_SECONDS));
        }
    }

    Ok(())
}
