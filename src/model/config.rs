use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml (all optional; missing file means defaults)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Override for the todo list file path (default: platform data dir)
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides, e.g. `highlight = "#FB4196"` under [ui.colors]
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_parses_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.data.file.is_none());
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn parses_data_file_and_colors() {
        let config: AppConfig = toml::from_str(
            r##"
[data]
file = "/tmp/todos.json"

[ui.colors]
highlight = "#FF0000"
"##,
        )
        .unwrap();
        assert_eq!(config.data.file.as_deref(), Some("/tmp/todos.json"));
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#FF0000");
    }
}
