//! Form drafts and input coercion.
//!
//! The persistence layer stores whatever it is given. Everything a user types
//! is normalised here first: titles are trimmed and must be non-empty, effort
//! fields fall back to 0.0, dates and links are parsed from free text.

use crate::domain::{NewTask, Priority, Task, TaskDetails, TaskError, TaskId, TaskStatus};
use chrono::NaiveDate;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d.%m.%Y"];

/// Parse an effort field in hours. Anything that is not a finite,
/// non-negative number becomes 0.0.
pub fn parse_effort(input: &str) -> f64 {
    let normalized = input.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Parse an optional date field. Blank input means no date.
pub fn parse_start_date(input: &str) -> Result<Option<NaiveDate>, TaskError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
        .map(Some)
        .ok_or_else(|| TaskError::InvalidDate(input.to_string()))
}

fn parse_link(input: &str) -> Option<String> {
    let input = input.trim();
    (!input.is_empty()).then(|| input.to_string())
}

fn require_title(input: &str) -> Result<String, TaskError> {
    let title = input.trim();
    if title.is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    Ok(title.to_string())
}

/// Contents of the add-task input row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub task_type: String,
    pub priority: Priority,
    pub start_date: String,
    pub external_link: String,
}

impl TaskDraft {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn into_new_task(self) -> Result<NewTask, TaskError> {
        Ok(NewTask {
            title: require_title(&self.title)?,
            description: self.description.trim().to_string(),
            category: self.category,
            task_type: self.task_type,
            priority: self.priority,
            start_date: parse_start_date(&self.start_date)?,
            external_link: parse_link(&self.external_link),
        })
    }
}

/// Editable copy of a task held by the edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub task_id: TaskId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub task_type: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub percent_done: u8,
    pub effort_planned: String,
    pub effort_actual: String,
    pub external_link: String,
    pub comment: String,
}

impl EditDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            task_id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            category: task.category.clone(),
            task_type: task.task_type.clone(),
            priority: task.priority,
            status: task.status,
            percent_done: task.percent_done,
            effort_planned: format_effort(task.effort_planned),
            effort_actual: format_effort(task.effort_actual),
            external_link: task.external_link.clone().unwrap_or_default(),
            comment: String::new(),
        }
    }

    pub fn to_details(&self) -> Result<TaskDetails, TaskError> {
        Ok(TaskDetails {
            title: require_title(&self.title)?,
            description: self.description.trim().to_string(),
            category: self.category.clone(),
            task_type: self.task_type.clone(),
            priority: self.priority,
            effort_planned: parse_effort(&self.effort_planned),
            external_link: parse_link(&self.external_link),
            status: self.status,
        })
    }

    pub fn status_update(&self) -> (TaskStatus, u8) {
        (self.status, self.percent_done.min(100))
    }

    pub fn efforts(&self) -> (f64, f64) {
        (
            parse_effort(&self.effort_planned),
            parse_effort(&self.effort_actual),
        )
    }

    /// Trimmed comment text, `None` when there is nothing to post.
    pub fn pending_comment(&self) -> Option<String> {
        let text = self.comment.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

pub fn format_effort(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{hours:.0}")
    } else {
        format!("{hours}")
    }
}
