use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a task (SQLite rowid)
pub type TaskId = i64;

/// Lifecycle status of a task.
///
/// Any status may be set from any other; there is no transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    New,
    Work,
    #[serde(rename = "On Hold", alias = "on_hold")]
    OnHold,
    Final,
    Cancelled,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::New,
        TaskStatus::Work,
        TaskStatus::OnHold,
        TaskStatus::Final,
        TaskStatus::Cancelled,
    ];

    /// Final and Cancelled tasks are considered closed in the list view.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Final | Self::Cancelled)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "New"),
            Self::Work => write!(f, "Work"),
            Self::OnHold => write!(f, "On Hold"),
            Self::Final => write!(f, "Final"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "work" => Ok(Self::Work),
            "on hold" | "on_hold" | "on-hold" => Ok(Self::OnHold),
            "final" => Ok(Self::Final),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("Unknown task status: {s}")),
        }
    }
}

/// Task priority, 1 (most urgent) to 4.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Priority {
    Critical = 1,
    High = 2,
    #[default]
    Medium = 3,
    Low = 4,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            1 => Some(Self::Critical),
            2 => Some(Self::High),
            3 => Some(Self::Medium),
            4 => Some(Self::Low),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.level(), self.label())
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.level()
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;
    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(i64::from(level)).ok_or_else(|| format!("Priority out of range: {level}"))
    }
}

impl FromStr for Priority {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(level) = s.parse::<i64>() {
            return Self::from_level(level).ok_or_else(|| format!("Priority out of range: {s}"));
        }
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown priority: {s}"))
    }
}

/// A trackable unit of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub task_type: String,
    pub status: TaskStatus,
    pub priority: Priority,
    /// Planned start, stored as `YYYY-MM-DD` text.
    pub start_date: Option<NaiveDate>,
    /// Planned effort in hours.
    pub effort_planned: f64,
    /// Actual effort in hours.
    pub effort_actual: f64,
    /// Progress, 0..=100.
    pub percent_done: u8,
    pub external_link: Option<String>,
    /// Creation timestamp in RFC3339 format.
    pub created_at: String,
}

/// Insert payload for a new task. Status, progress and efforts start at their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub category: String,
    pub task_type: String,
    pub priority: Priority,
    pub start_date: Option<NaiveDate>,
    pub external_link: Option<String>,
}

/// Full-detail overwrite payload used by the edit dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDetails {
    pub title: String,
    pub description: String,
    pub category: String,
    pub task_type: String,
    pub priority: Priority,
    pub effort_planned: f64,
    pub external_link: Option<String>,
    pub status: TaskStatus,
}

impl From<&Task> for TaskDetails {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            category: task.category.clone(),
            task_type: task.task_type.clone(),
            priority: task.priority,
            effort_planned: task.effort_planned,
            external_link: task.external_link.clone(),
            status: task.status,
        }
    }
}
