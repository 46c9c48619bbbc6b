//! Schedule loading from disk.

use std::fs;
use std::path::Path;

use crate::schedule::types::{truncate_to_minute, ScheduleEntry};

/// Error type for schedule loading.
#[derive(Debug)]
pub enum ScheduleError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::Io(e) => write!(f, "IO error: {}", e),
            ScheduleError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ScheduleError {}

#[derive(Debug, serde::Deserialize)]
struct ScheduleFile {
    #[serde(default, rename = "entry")]
    entries: Vec<ScheduleEntry>,
}

/// Load schedule entries from a TOML file.
///
/// Entry times are truncated to minute precision. Inverted windows
/// (`start >= end`) are kept but warned about; they never become active.
pub fn load_schedule(path: &Path) -> Result<Vec<ScheduleEntry>, ScheduleError> {
    let content = fs::read_to_string(path).map_err(ScheduleError::Io)?;
    let file: ScheduleFile = toml::from_str(&content).map_err(ScheduleError::Parse)?;

    let entries: Vec<ScheduleEntry> = file
        .entries
        .into_iter()
        .map(|e| ScheduleEntry {
            address: e.address,
            start: truncate_to_minute(e.start),
            end: truncate_to_minute(e.end),
        })
        .collect();

    for entry in entries.iter().filter(|e| e.is_inverted()) {
        tracing::warn!(
            address = %entry.address,
            start = %entry.start,
            end = %entry.end,
            "Schedule entry has an inverted window and will never be active"
        );
    }

    tracing::info!(entries = entries.len(), path = %path.display(), "Schedule loaded");
    Ok(entries)
}
