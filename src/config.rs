//! Configuration loading and management
//!
//! Handles parsing of `.todo.toml` configuration files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::filter::FilterMode;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,

    /// Task list defaults
    #[serde(default)]
    pub tasks: TasksConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON envelopes by default
    #[serde(default)]
    pub json: bool,

    /// Suppress mutation confirmations by default
    #[serde(default)]
    pub quiet: bool,
}

/// Task-list-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Filter mode a fresh store starts with
    #[serde(default = "default_filter")]
    pub default_filter: String,
}

fn default_filter() -> String {
    FilterMode::ShowAll.as_str().to_string()
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            default_filter: default_filter(),
        }
    }
}

impl TasksConfig {
    /// Resolve the configured filter name. Unknown names mean show-all,
    /// matching the projection's fallback for unrecognized modes.
    pub fn default_filter_mode(&self) -> FilterMode {
        FilterMode::parse_lenient(&self.default_filter)
    }
}

impl Config {
    /// Load configuration from a `.todo.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(".todo.toml");
        if config_path.exists() {
            Self::load(&config_path).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_everything_in_human_output() {
        let config = Config::default();
        assert!(!config.output.json);
        assert!(!config.output.quiet);
        assert_eq!(config.tasks.default_filter_mode(), FilterMode::ShowAll);
    }

    #[test]
    fn parses_overrides() {
        let config: Config = toml::from_str(
            r#"
[output]
json = true

[tasks]
default_filter = "show_uncompleted"
"#,
        )
        .expect("valid config");

        assert!(config.output.json);
        assert!(!config.output.quiet);
        assert_eq!(
            config.tasks.default_filter_mode(),
            FilterMode::ShowUncompleted
        );
    }

    #[test]
    fn unknown_filter_name_degrades_to_show_all() {
        let config: Config = toml::from_str(
            r#"
[tasks]
default_filter = "BogusValue"
"#,
        )
        .expect("valid config");
        assert_eq!(config.tasks.default_filter_mode(), FilterMode::ShowAll);
    }
}
