//! Path utilities: expand ~ and turn `file://` sources into paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

pub fn is_remote(url: &str) -> bool {
    let lower = url.trim().to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// `file:///data/x.csv` → `/data/x.csv`; plain paths pass through.
pub fn local_path(url: &str) -> PathBuf {
    let trimmed = url.trim();
    match trimmed.strip_prefix("file://") {
        Some(rest) => expand_tilde(rest),
        None => expand_tilde(trimmed),
    }
}
