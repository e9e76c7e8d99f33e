use crate::domain::Priority;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides the platform default database location.
    pub db_path: Option<PathBuf>,
    /// Options offered by the category dropdown.
    pub categories: Vec<String>,
    /// Options offered by the task type dropdown.
    pub task_types: Vec<String>,
    pub default_priority: Priority,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            categories: ["General", "Work", "Private", "Project"]
                .map(String::from)
                .to_vec(),
            task_types: ["Task", "Bug", "Feature", "Meeting", "Research"]
                .map(String::from)
                .to_vec(),
            default_priority: Priority::default(),
        }
    }
}

pub fn load_config() -> AppConfig {
    let path = config_path();
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    parse_config(&contents).unwrap_or_else(|err| {
        log::warn!("Ignoring invalid config at {}: {}", path.display(), err);
        AppConfig::default()
    })
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub fn save_config(config: &AppConfig) -> std::io::Result<()> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config).unwrap_or_default();
    std::fs::write(path, contents)
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("TASKTRACK_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .unwrap_or_else(|| {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(".tasktrack")
        })
        .join("tasktrack")
        .join("config.toml")
}

/// Resolve the database file: explicit override, then env, then config, then platform default.
pub fn resolve_db_path(cli_override: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    if let Some(path) = cli_override {
        return path;
    }
    if std::env::var_os("TASKTRACK_DB_PATH").is_some() {
        return crate::infra::db::Database::default_path();
    }
    config
        .db_path
        .clone()
        .unwrap_or_else(crate::infra::db::Database::default_path)
}
