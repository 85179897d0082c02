//! Path utilities: expand ~ in user-supplied paths.

use std::path::PathBuf;

/// Expand a leading `~` or `~/` to the user's home directory. Paths
/// without a tilde pass through unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        if path == "~" {
            return home;
        }
        if let Some(rest) = path.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
