use std::fs;
use std::path::{Path, PathBuf};

use crate::io::paths;
use crate::model::config::AppConfig;

/// Load config.toml from the platform config directory. A missing file is
/// normal and yields defaults; a malformed one is reported so a typo does
/// not silently revert the user to defaults.
pub fn load_config() -> Result<AppConfig, String> {
    match paths::config_file() {
        Some(path) => load_config_from(&path),
        None => Ok(AppConfig::default()),
    }
}

fn load_config_from(path: &Path) -> Result<AppConfig, String> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = fs::read_to_string(path)
        .map_err(|e| format!("could not read {}: {}", path.display(), e))?;
    toml::from_str(&text).map_err(|e| format!("could not parse {}: {}", path.display(), e))
}

/// Resolve the data file path: explicit flag > config override > platform
/// default.
pub fn resolve_data_file(flag: Option<&str>, config: &AppConfig) -> PathBuf {
    if let Some(path) = flag {
        return PathBuf::from(path);
    }
    if let Some(path) = &config.data.file {
        return PathBuf::from(path);
    }
    paths::default_data_file()
}
