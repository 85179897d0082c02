//! Credential cache for the backup target.
//!
//! The authorization token lives in a local JSON file. A missing file
//! triggers the interactive authorization flow; an expired token is
//! refreshed silently; a valid token is reused as-is.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Token lifetime before a silent refresh is required.
const TOKEN_TTL_SECONDS: i64 = 3600;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedCredentials {
    pub token: String,
    pub issued: DateTime<Local>,
    pub expires: DateTime<Local>,
}

impl CachedCredentials {
    fn mint(now: DateTime<Local>) -> Self {
        Self {
            token: format!("attlog-{}", now.timestamp()),
            issued: now,
            expires: now + Duration::seconds(TOKEN_TTL_SECONDS),
        }
    }

    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        now >= self.expires
    }
}

/// How to behave when no cached token exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFlow {
    /// Ask the user to approve linking the backup account on stdin.
    Interactive,
    /// Approve without prompting and keep the token in memory only
    /// (test mode).
    NonInteractive,
}

pub struct Session {
    creds: CachedCredentials,
}

impl Session {
    /// Obtain an authorized session backed by the credential cache at
    /// `path`.
    pub fn obtain<P: AsRef<Path>>(path: P, flow: AuthFlow) -> AppResult<Session> {
        let path = path.as_ref();
        let now = Local::now();

        let creds = match load_cached(path)? {
            None => {
                let approved = match flow {
                    AuthFlow::NonInteractive => true,
                    AuthFlow::Interactive => confirm_link()?,
                };
                if !approved {
                    return Err(AppError::Auth("authorization declined".into()));
                }
                let creds = CachedCredentials::mint(now);
                if flow == AuthFlow::Interactive {
                    save_cached(path, &creds)?;
                }
                creds
            }
            Some(cached) if cached.is_expired(now) => {
                // Silent refresh: same identity, new expiry.
                let refreshed = CachedCredentials {
                    token: cached.token,
                    issued: cached.issued,
                    expires: now + Duration::seconds(TOKEN_TTL_SECONDS),
                };
                if flow == AuthFlow::Interactive {
                    save_cached(path, &refreshed)?;
                }
                refreshed
            }
            Some(cached) => cached,
        };

        Ok(Session { creds })
    }

    pub fn is_authorized(&self) -> bool {
        !self.creds.token.is_empty()
    }

    pub fn token(&self) -> &str {
        &self.creds.token
    }
}

fn load_cached(path: &Path) -> AppResult<Option<CachedCredentials>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let creds = serde_json::from_str(&content)
        .map_err(|e| AppError::Auth(format!("unreadable credential cache: {}", e)))?;
    Ok(Some(creds))
}

fn save_cached(path: &Path, creds: &CachedCredentials) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(creds)
        .map_err(|e| AppError::Auth(format!("cannot serialize credentials: {}", e)))?;
    fs::write(path, json)?;
    Ok(())
}

/// First-run authorization prompt.
fn confirm_link() -> AppResult<bool> {
    use std::io::{Write, stdin, stdout};

    println!("🔑 No cached credentials found.");
    println!("Link this device to your backup account? [y/N]: ");

    let mut answer = String::new();
    print!("> ");
    stdout().flush().ok();
    stdin().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Credential cache path helper used by the sync command.
pub fn credentials_path(configured: &str) -> PathBuf {
    crate::utils::path::expand_tilde(configured)
}
