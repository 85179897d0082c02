use crate::config::Config;
use crate::core::summary;
use crate::errors::AppResult;
use crate::store::AttendanceLog;
use crate::ui::messages;
use crate::utils::path::expand_tilde;

/// Handle the `summary` subcommand.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let log = AttendanceLog::new(expand_tilde(&cfg.store_file));
    let records = log.load()?;

    if records.is_empty() {
        messages::info("No data");
        return Ok(());
    }

    let s = summary::summarize(&records);

    println!("Days recorded: {}", s.total);
    println!("Present:       {}", s.present);
    println!("Absent:        {}", s.absent);
    println!("Attendance: {:.1}%", s.percent);

    Ok(())
}
