use super::{DbConn, lock};
use crate::domain::{Comment, TaskId};
use anyhow::Result;
use chrono::Utc;
use rusqlite::Row;

pub struct CommentRepository {
    conn: DbConn,
}

impl CommentRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Append a comment stamped with the current time.
    ///
    /// The task id is not checked here; the foreign key rejects unknown tasks.
    pub fn add(&self, task_id: TaskId, text: &str) -> Result<Comment> {
        let conn = lock(&self.conn)?;
        let created_at = Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO comments (task_id, comment_text, created_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![task_id, text, created_at],
        )?;
        Ok(Comment {
            id: conn.last_insert_rowid(),
            task_id,
            comment_text: text.to_string(),
            created_at,
        })
    }

    /// Comments for a task, newest first.
    pub fn list_for_task(&self, task_id: TaskId) -> Result<Vec<Comment>> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, task_id, comment_text, created_at
            FROM comments
            WHERE task_id = ?1
            ORDER BY created_at DESC, id DESC
            "#,
        )?;

        let rows = stmt.query_map([task_id], Self::row_to_comment)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn row_to_comment(row: &Row) -> rusqlite::Result<Comment> {
        Ok(Comment {
            id: row.get(0)?,
            task_id: row.get(1)?,
            comment_text: row.get(2)?,
            created_at: row.get(3)?,
        })
    }
}
