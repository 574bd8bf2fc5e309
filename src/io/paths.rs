use std::path::PathBuf;

use directories::ProjectDirs;

/// Platform directories for this installation.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "todos")
}

/// Default path of the persisted todo list (e.g.
/// `~/.local/share/todos/todos.json` on Linux). Falls back to the current
/// directory when the platform gives us no home.
pub fn default_data_file() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.data_dir().join("todos.json"),
        None => PathBuf::from("todos.json"),
    }
}

/// Path of the optional config file (e.g. `~/.config/todos/config.toml`).
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// The `.state.json` path for a given data file: same directory, fixed name.
pub fn state_file(data_file: &std::path::Path) -> PathBuf {
    data_file
        .parent()
        .unwrap_or(std::path::Path::new("."))
        .join(".state.json")
}

/// The recovery log path for a given data file: same directory, fixed name.
pub fn recovery_log_file(data_file: &std::path::Path) -> PathBuf {
    data_file
        .parent()
        .unwrap_or(std::path::Path::new("."))
        .join(".recovery.log")
}
