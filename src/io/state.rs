use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::io::paths::state_file;

/// Persisted TUI state (written to .state.json next to the data file).
/// Best-effort: a missing or malformed file is simply ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiState {
    /// Cursor index into the list
    #[serde(default)]
    pub cursor: usize,
    /// Scroll offset (first visible row)
    #[serde(default)]
    pub scroll_offset: usize,
}

/// Read .state.json for the given data file.
pub fn read_ui_state(data_file: &Path) -> Option<UiState> {
    let content = fs::read_to_string(state_file(data_file)).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .state.json for the given data file.
pub fn write_ui_state(data_file: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let content = serde_json::to_string_pretty(state)?;
    fs::write(state_file(data_file), content)
}
