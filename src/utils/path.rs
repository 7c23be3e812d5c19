//! Path utilities: expand `~` in user supplied paths.

use std::io;
use std::path::{self, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

pub fn expand_tilde_string(path: &str) -> String {
    expand_tilde(path).to_string_lossy().to_string()
}

/// `~` expansion, then relative paths are anchored at the current directory.
pub fn resolve_path(path: &str) -> io::Result<PathBuf> {
    path::absolute(expand_tilde(path))
}
