use rusqlite::Connection;
use std::path::PathBuf;
use tasktrack::infra::app_config::{load_config, resolve_db_path};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run()
}

fn count(conn: &Connection, table: &str) -> rusqlite::Result<i64> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
}

/// The database the app itself opens: env override, then config, then platform default.
fn db_path() -> PathBuf {
    resolve_db_path(None, &load_config())
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = db_path();

    if !db_path.exists() {
        println!("Database does not exist at: {}", db_path.display());
        println!("No reset needed.");
        return Ok(());
    }

    println!("Connecting to database at: {}", db_path.display());
    let conn = Connection::open(&db_path)?;

    let tables_exist: i32 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='tasks'",
        [],
        |row| row.get(0),
    )?;
    if tables_exist == 0 {
        println!("Tables do not exist. No reset needed.");
        return Ok(());
    }

    let has_comments: i32 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='comments'",
        [],
        |row| row.get(0),
    )?;

    println!("Current record counts:");
    println!("  Tasks: {}", count(&conn, "tasks")?);
    if has_comments > 0 {
        println!("  Comments: {}", count(&conn, "comments")?);
        conn.execute("DELETE FROM comments", [])?;
        println!("Cleared comments table");
    }
    conn.execute("DELETE FROM tasks", [])?;
    println!("Cleared tasks table");

    let remaining = count(&conn, "tasks")?
        + if has_comments > 0 {
            count(&conn, "comments")?
        } else {
            0
        };
    if remaining == 0 {
        println!("\nDatabase successfully reset! All records have been deleted.");
    } else {
        eprintln!("\nWarning: {remaining} records still exist in the database.");
    }
    println!("Database location: {}", db_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasktrack::domain::NewTask;
    use tasktrack::infra::db::Database;
    use tempfile::TempDir;

    #[test]
    fn test_reset_db_follows_configured_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("configured.sqlite");
        let config_file = dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            format!("db_path = {:?}\n", path.display().to_string()),
        )
        .unwrap();
        unsafe {
            std::env::remove_var("TASKTRACK_DB_PATH");
            std::env::set_var("TASKTRACK_CONFIG_PATH", &config_file);
        }
        assert_eq!(db_path(), path);

        {
            let db = Database::open_at(path.clone()).unwrap();
            let task = db
                .task_repo()
                .create(&NewTask {
                    title: "Water plants".into(),
                    ..Default::default()
                })
                .unwrap();
            db.comment_repo().add(task.id, "Balcony too").unwrap();
        }

        run().unwrap();

        let conn = Connection::open(&path).unwrap();
        assert_eq!(count(&conn, "tasks").unwrap(), 0);
        assert_eq!(count(&conn, "comments").unwrap(), 0);

        unsafe {
            std::env::remove_var("TASKTRACK_CONFIG_PATH");
        }
    }
}
