//! SQLite database setup and connection management for tasktrack
//! Handles database initialization, schema creation, and legacy migrations.

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::repository::{CommentRepository, DbConn, TaskRepository};

const SCHEMA_VERSION: i32 = 2;

/// Database wrapper that manages the SQLite connection
#[derive(Clone)]
pub struct Database {
    conn: DbConn,
    path: Option<PathBuf>,
}

impl Database {
    /// Create or open the database at the default location
    pub fn open() -> Result<Self> {
        Self::open_at(Self::default_path())
    }

    /// Create an in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
            path: None,
        };
        db.init()?;
        Ok(db)
    }

    /// Create or open the database at a specific path
    pub fn open_at(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }

        let conn = Connection::open(&path)
            .with_context(|| format!("Failed to open database at {}", path.display()))?;
        log::debug!("Opened database at {}", path.display());
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
            path: Some(path),
        };
        db.init()?;
        Ok(db)
    }

    /// Get the default database path
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("TASKTRACK_DB_PATH") {
            return PathBuf::from(path);
        }

        #[cfg(target_os = "macos")]
        {
            if let Some(home) = home::home_dir() {
                return home
                    .join("Library")
                    .join("Application Support")
                    .join("TaskTrack")
                    .join("tasks.sqlite");
            }
        }

        #[cfg(target_os = "windows")]
        {
            if let Some(appdata) = std::env::var_os("APPDATA") {
                return PathBuf::from(appdata).join("TaskTrack").join("tasks.sqlite");
            }
        }

        #[cfg(target_os = "linux")]
        {
            if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
                return PathBuf::from(xdg).join("tasktrack").join("tasks.sqlite");
            }
            if let Some(home) = home::home_dir() {
                return home
                    .join(".local")
                    .join("share")
                    .join("tasktrack")
                    .join("tasks.sqlite");
            }
        }

        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".tasktrack")
            .join("tasks.sqlite")
    }

    /// Location of the backing file, `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Initialize database schema
    fn init(&self) -> Result<()> {
        let conn = super::repository::lock(&self.conn)?;

        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        let existing_version: i32 =
            conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

        if existing_version >= SCHEMA_VERSION {
            return Ok(());
        }

        // Schema changes and the version bump commit together or not at all.
        let tx = conn
            .unchecked_transaction()
            .context("Failed to start schema migration")?;
        if existing_version == 0 {
            if Self::has_legacy_todo_table(&tx)? {
                // First release stored a bare `tasks(id, title, is_completed)` table.
                log::info!("Migrating legacy to-do database to schema v{SCHEMA_VERSION}");
                Self::run_migration(&tx, 2)?;
            } else {
                Self::create_schema(&tx)?;
            }
        } else {
            for version in (existing_version + 1)..=SCHEMA_VERSION {
                log::info!("Running database migration {version}");
                Self::run_migration(&tx, version)?;
            }
        }
        tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        tx.commit().context("Failed to commit schema migration")?;

        Ok(())
    }

    /// Get a handle to the shared connection
    pub fn connection(&self) -> DbConn {
        self.conn.clone()
    }

    pub fn task_repo(&self) -> TaskRepository {
        TaskRepository::new(self.connection())
    }

    pub fn comment_repo(&self) -> CommentRepository {
        CommentRepository::new(self.connection())
    }

    fn has_legacy_todo_table(conn: &Connection) -> Result<bool> {
        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('tasks')")?;
        let columns = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(columns.iter().any(|c| c == "is_completed"))
    }

    fn create_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                category TEXT NOT NULL DEFAULT '',
                task_type TEXT NOT NULL DEFAULT '',
                status TEXT NOT NULL DEFAULT 'New',
                priority INTEGER NOT NULL DEFAULT 3,
                start_date TEXT,
                effort_planned REAL NOT NULL DEFAULT 0,
                effort_actual REAL NOT NULL DEFAULT 0,
                percent_done INTEGER NOT NULL DEFAULT 0,
                external_link TEXT,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS comments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                task_id INTEGER NOT NULL,
                comment_text TEXT NOT NULL,
                created_at TEXT NOT NULL,
                FOREIGN KEY(task_id) REFERENCES tasks(id) ON DELETE CASCADE
            );

            CREATE INDEX IF NOT EXISTS idx_comments_task_created_at ON comments(task_id, created_at);
            "#,
        )?;
        Ok(())
    }

    /// Execute a migration for the specified version.
    ///
    /// Migration scripts are embedded into the binary at compile time.
    fn run_migration(conn: &Connection, version: i32) -> Result<()> {
        let sql = match version {
            2 => {
                if Self::has_legacy_todo_table(conn)? {
                    include_str!("../../../migrations/0002_legacy_todo_to_tasks.sql")
                } else {
                    include_str!("../../../migrations/0002_comments_index.sql")
                }
            }
            _ => {
                return Err(anyhow::anyhow!(
                    "Unknown migration version: {}. Add the migration to run_migration() in database.rs",
                    version
                ));
            }
        };

        conn.execute_batch(sql)
            .map_err(|e| anyhow::anyhow!("Failed to execute migration {}: {}", version, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_default_path() {
        let path = Database::default_path();
        assert!(path.to_string_lossy().contains("tasks.sqlite"));
    }

    #[test]
    fn test_database_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.path().is_none());
        let conn = db.connection();
        let guard = conn.lock().unwrap();
        let res: i32 = guard.query_row("SELECT 1", [], |row| row.get(0)).unwrap();
        assert_eq!(res, 1);
        let version: i32 = guard
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
        let fk: i32 = guard
            .pragma_query_value(None, "foreign_keys", |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }

    #[test]
    fn test_open_at_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tasks.sqlite");
        let db = Database::open_at(path.clone()).unwrap();
        assert!(path.exists());
        assert_eq!(db.path(), Some(path.as_path()));
    }

    #[test]
    fn test_reopen_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.sqlite");
        {
            let db = Database::open_at(path.clone()).unwrap();
            db.task_repo()
                .create(&crate::domain::NewTask {
                    title: "Persisted".into(),
                    ..Default::default()
                })
                .unwrap();
        }
        let db = Database::open_at(path).unwrap();
        let tasks = db.task_repo().find_all().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Persisted");
    }

    #[test]
    fn test_legacy_todo_migration() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                is_completed BOOLEAN NOT NULL DEFAULT 0
            );
            INSERT INTO tasks (title, is_completed) VALUES ('Einkaufen', 0);
            INSERT INTO tasks (title, is_completed) VALUES ('Putzen', 1);
        ",
        )
        .unwrap();

        let db = Database {
            conn: Arc::new(Mutex::new(conn)),
            path: None,
        };
        db.init().unwrap();

        let tasks = db.task_repo().find_all().unwrap();
        assert_eq!(tasks.len(), 2);

        let putzen = &tasks[0];
        assert_eq!(putzen.title, "Putzen");
        assert_eq!(putzen.status, crate::domain::TaskStatus::Final);
        assert_eq!(putzen.percent_done, 100);

        let einkaufen = &tasks[1];
        assert_eq!(einkaufen.title, "Einkaufen");
        assert_eq!(einkaufen.status, crate::domain::TaskStatus::New);
        assert_eq!(einkaufen.percent_done, 0);
        assert!(!einkaufen.created_at.is_empty());

        // Comments table exists after the rebuild
        let comment = db.comment_repo().add(einkaufen.id, "migrated").unwrap();
        assert_eq!(comment.task_id, einkaufen.id);

        let conn = db.connection();
        let guard = conn.lock().unwrap();
        let legacy_exists: i32 = guard
            .query_row(
                "SELECT count(*) FROM sqlite_master WHERE type='table' AND name='tasks_legacy'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(legacy_exists, 0);
        let version: i32 = guard
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_failed_legacy_migration_leaves_old_table_intact() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT,
                is_completed BOOLEAN NOT NULL DEFAULT 0
            );
            INSERT INTO tasks (title, is_completed) VALUES ('Einkaufen', 0);
            INSERT INTO tasks (title, is_completed) VALUES (NULL, 1);
        ",
        )
        .unwrap();

        let db = Database {
            conn: Arc::new(Mutex::new(conn)),
            path: None,
        };
        // The rebuilt table requires a title, so the copy step fails after the rename.
        assert!(db.init().is_err());

        let conn = db.connection();
        let guard = conn.lock().unwrap();
        let legacy_rows: i64 = guard
            .query_row(
                "SELECT count(*) FROM tasks WHERE is_completed IN (0, 1)",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(legacy_rows, 2);
        let leftovers: i32 = guard
            .query_row(
                "SELECT count(*) FROM sqlite_master WHERE name IN ('tasks_legacy', 'comments')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(leftovers, 0);
        let version: i32 = guard
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .unwrap();
        assert_eq!(version, 0);
    }

    #[test]
    fn test_schema_migration_v1_to_v2_adds_index() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                category TEXT NOT NULL DEFAULT '',
                task_type TEXT NOT NULL DEFAULT '',
                status TEXT NOT NULL DEFAULT 'New',
                priority INTEGER NOT NULL DEFAULT 3,
                start_date TEXT,
                effort_planned REAL NOT NULL DEFAULT 0,
                effort_actual REAL NOT NULL DEFAULT 0,
                percent_done INTEGER NOT NULL DEFAULT 0,
                external_link TEXT,
                created_at TEXT NOT NULL
            );
            CREATE TABLE comments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                task_id INTEGER NOT NULL,
                comment_text TEXT NOT NULL,
                created_at TEXT NOT NULL,
                FOREIGN KEY(task_id) REFERENCES tasks(id) ON DELETE CASCADE
            );
            INSERT INTO tasks (title, created_at) VALUES ('Existing', 'now');
            PRAGMA user_version = 1;
        ",
        )
        .unwrap();

        let db = Database {
            conn: Arc::new(Mutex::new(conn)),
            path: None,
        };
        db.init().unwrap();

        let conn = db.connection();
        let guard = conn.lock().unwrap();
        let index_exists: i32 = guard
            .query_row(
                "SELECT count(*) FROM sqlite_master WHERE type='index' AND name='idx_comments_task_created_at'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(index_exists, 1);
        let title: String = guard
            .query_row("SELECT title FROM tasks", [], |row| row.get(0))
            .unwrap();
        assert_eq!(title, "Existing");
    }

    #[test]
    fn test_unknown_migration_version_fails() {
        let conn = Connection::open_in_memory().unwrap();
        let err = Database::run_migration(&conn, 99).unwrap_err();
        assert!(err.to_string().contains("Unknown migration version: 99"));
    }
}
