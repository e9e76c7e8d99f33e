use crate::infra::app_config::{AppConfig, load_config, resolve_db_path};
use crate::infra::db::Database;
use anyhow::Result;
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared state handed to every command.
pub struct AppState {
    pub db: Database,
    pub config: Arc<RwLock<AppConfig>>,
}

impl AppState {
    /// Load configuration and open the database it points at.
    pub fn open(db_override: Option<PathBuf>) -> Result<Self> {
        let config = load_config();
        let path = resolve_db_path(db_override, &config);
        log::info!("Using database {}", path.display());
        let db = Database::open_at(path)?;
        Ok(Self::with_database(db, config))
    }

    pub fn with_database(db: Database, config: AppConfig) -> Self {
        Self {
            db,
            config: Arc::new(RwLock::new(config)),
        }
    }

    pub fn in_memory() -> Result<Self> {
        Ok(Self::with_database(
            Database::open_in_memory()?,
            AppConfig::default(),
        ))
    }
}
