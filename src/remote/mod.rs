//! Remote backup target.
//!
//! The backup destination is a folder-scoped file store owned by this
//! application: one named folder, one named file inside it, overwritten
//! wholesale on every push. The transport behind it is an external
//! collaborator, so the operations are a trait; the shipped
//! implementation targets a directory (typically a cloud-synced mount)
//! rooted at `backup_root`.

pub mod auth;

use crate::errors::{AppError, AppResult};
use auth::Session;
use std::fs;
use std::path::PathBuf;

pub trait RemoteStore {
    /// Locate the named folder, creating it if absent.
    fn ensure_folder(&self, name: &str) -> AppResult<()>;

    /// Overwrite the named file inside the folder with the given bytes,
    /// creating it on first use. Returns the number of bytes written.
    fn upload(&self, folder: &str, file: &str, bytes: &[u8]) -> AppResult<u64>;
}

/// Directory-backed remote. Opening it requires an authorized session.
pub struct FolderRemote {
    root: PathBuf,
}

impl FolderRemote {
    pub fn open(root: &str, session: &Session) -> AppResult<Self> {
        if !session.is_authorized() {
            return Err(AppError::Auth("session is not authorized".into()));
        }
        if root.trim().is_empty() {
            return Err(AppError::Remote("no backup root configured".into()));
        }
        Ok(Self {
            root: crate::utils::path::expand_tilde(root),
        })
    }
}

impl RemoteStore for FolderRemote {
    fn ensure_folder(&self, name: &str) -> AppResult<()> {
        let dir = self.root.join(name);
        if dir.is_file() {
            return Err(AppError::Remote(format!(
                "'{}' exists but is not a folder",
                dir.display()
            )));
        }
        fs::create_dir_all(&dir)?;
        Ok(())
    }

    fn upload(&self, folder: &str, file: &str, bytes: &[u8]) -> AppResult<u64> {
        let path = self.root.join(folder).join(file);
        fs::write(&path, bytes)?;
        Ok(bytes.len() as u64)
    }
}
