//! Best-effort local system notification.
//!
//! Spawns the platform notifier; there is no persistence and no
//! acknowledgment tracking. Callers ignore the result when the reminder
//! must not disturb the main flow.

use crate::errors::{AppError, AppResult};
use std::process::Command;

pub fn send(title: &str, body: &str) -> AppResult<()> {
    if cfg!(target_os = "linux") {
        let status = Command::new("notify-send").arg(title).arg(body).status()?;
        if !status.success() {
            return Err(AppError::Other("notify-send failed".into()));
        }
    } else if cfg!(target_os = "macos") {
        let script = format!(
            "display notification \"{}\" with title \"{}\"",
            body.replace('"', "'"),
            title.replace('"', "'")
        );
        let status = Command::new("osascript").arg("-e").arg(script).status()?;
        if !status.success() {
            return Err(AppError::Other("osascript failed".into()));
        }
    } else {
        // No notifier wired up on this platform: fall back to the console.
        println!("🔔 {}: {}", title, body);
    }

    Ok(())
}
