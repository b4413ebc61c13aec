//! Centralized path helpers for the config and data directories.

use std::path::PathBuf;

use crate::core::app;

/// Environment variable that relocates the data directory (problems and goal).
pub const DATA_DIR_ENV: &str = "SOLVENOTE_DATA_DIR";

/// Project directories (config, data) from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", app::VENDOR, app::NAME)
}

/// Config directory (~/.config/solvenote/).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Data directory for problem records (~/.local/share/solvenote/).
/// `SOLVENOTE_DATA_DIR` takes precedence when set and non-empty.
pub fn data_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    project_dirs().map(|d| d.data_dir().to_path_buf())
}
