//! Centralized path helpers for the results data directory.

use std::path::PathBuf;

use crate::core::app;

/// Project directories (config, cache, data) from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", app::VENDOR, app::NAME)
}

/// Data directory for stored exam results (~/.local/share/examdeck/results/).
/// Set `EXAMDECK_DATA_DIR` to override (tests, portable installs).
pub fn data_dir() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("EXAMDECK_DATA_DIR")
        && !p.trim().is_empty()
    {
        return Some(PathBuf::from(p));
    }
    project_dirs().map(|d| d.data_dir().join("results"))
}
