use super::{DbConn, lock};
use crate::domain::{NewTask, Priority, Task, TaskDetails, TaskId, TaskStatus};
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use rusqlite::{OptionalExtension, Row};

use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

const TASK_COLUMNS: &str = "id, title, description, category, task_type, status, priority, start_date, effort_planned, effort_actual, percent_done, external_link, created_at";

/// Repository for task operations.
pub struct TaskRepository {
    conn: DbConn,
}

impl TaskRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Insert a new task with status New, no progress and zero efforts.
    pub fn create(&self, task: &NewTask) -> Result<Task> {
        let mut conn = lock(&self.conn)?;
        let created_at = Utc::now().to_rfc3339();
        let start_date = task.start_date.map(|d| d.format(DATE_FORMAT).to_string());

        let tx = conn.transaction()?;
        tx.execute(
            r#"
            INSERT INTO tasks (title, description, category, task_type, status, priority, start_date, effort_planned, effort_actual, percent_done, external_link, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0.0, 0.0, 0, ?8, ?9)
            "#,
            rusqlite::params![
                task.title,
                task.description,
                task.category,
                task.task_type,
                TaskStatus::New.to_string(),
                task.priority.level(),
                start_date,
                task.external_link,
                created_at,
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(Task {
            id,
            title: task.title.clone(),
            description: task.description.clone(),
            category: task.category.clone(),
            task_type: task.task_type.clone(),
            status: TaskStatus::New,
            priority: task.priority,
            start_date: task.start_date,
            effort_planned: 0.0,
            effort_actual: 0.0,
            percent_done: 0,
            external_link: task.external_link.clone(),
            created_at,
        })
    }

    /// All tasks, newest first.
    pub fn find_all(&self) -> Result<Vec<Task>> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks ORDER BY id DESC"
        ))?;

        let rows = stmt.query_map([], Self::row_to_task)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn find_by_id(&self, task_id: TaskId) -> Result<Option<Task>> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"))?;
        stmt.query_row([task_id], Self::row_to_task)
            .optional()
            .map_err(Into::into)
    }

    /// Overwrite status and progress. Any status may follow any other.
    pub fn update_status(
        &self,
        task_id: TaskId,
        status: TaskStatus,
        percent_done: u8,
    ) -> Result<usize> {
        let conn = lock(&self.conn)?;
        let affected = conn.execute(
            "UPDATE tasks SET status = ?1, percent_done = ?2 WHERE id = ?3",
            rusqlite::params![status.to_string(), percent_done, task_id],
        )?;
        Ok(affected)
    }

    pub fn update_efforts(&self, task_id: TaskId, planned: f64, actual: f64) -> Result<usize> {
        let conn = lock(&self.conn)?;
        let affected = conn.execute(
            "UPDATE tasks SET effort_planned = ?1, effort_actual = ?2 WHERE id = ?3",
            rusqlite::params![planned, actual, task_id],
        )?;
        Ok(affected)
    }

    /// Overwrite every field the edit dialog owns in one statement.
    pub fn update_details(&self, task_id: TaskId, details: &TaskDetails) -> Result<usize> {
        let conn = lock(&self.conn)?;
        let affected = conn.execute(
            r#"
            UPDATE tasks
            SET title = ?1, description = ?2, category = ?3, task_type = ?4, priority = ?5,
                effort_planned = ?6, external_link = ?7, status = ?8
            WHERE id = ?9
            "#,
            rusqlite::params![
                details.title,
                details.description,
                details.category,
                details.task_type,
                details.priority.level(),
                details.effort_planned,
                details.external_link,
                details.status.to_string(),
                task_id,
            ],
        )?;
        Ok(affected)
    }

    /// Delete a task. Its comments are removed by the cascading foreign key.
    pub fn delete(&self, task_id: TaskId) -> Result<usize> {
        let mut conn = lock(&self.conn)?;
        let tx = conn.transaction()?;
        let count = tx.execute("DELETE FROM tasks WHERE id = ?1", [task_id])?;
        tx.commit()?;
        Ok(count)
    }

    fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
        let id: TaskId = row.get(0)?;
        let status_str: String = row.get(5)?;
        let priority_level: i64 = row.get(6)?;
        let start_date: Option<String> = row.get(7)?;
        let percent_done: i64 = row.get(10)?;

        let status = TaskStatus::from_str(&status_str).unwrap_or_else(|err| {
            log::warn!("Task {id}: {err}, falling back to {}", TaskStatus::default());
            TaskStatus::default()
        });

        let start_date = start_date
            .filter(|s| !s.trim().is_empty())
            .and_then(|s| match NaiveDate::parse_from_str(s.trim(), DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(err) => {
                    log::warn!("Task {id}: ignoring unparsable start date '{s}': {err}");
                    None
                }
            });

        Ok(Task {
            id,
            title: row.get(1)?,
            description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            category: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            task_type: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            status,
            priority: Priority::from_level(priority_level).unwrap_or_default(),
            start_date,
            effort_planned: row.get::<_, Option<f64>>(8)?.unwrap_or(0.0),
            effort_actual: row.get::<_, Option<f64>>(9)?.unwrap_or(0.0),
            percent_done: percent_done.clamp(0, 100) as u8,
            external_link: row.get(11)?,
            created_at: row.get(12)?,
        })
    }
}
