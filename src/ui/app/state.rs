use crate::application::{EditDraft, TaskDraft};
use crate::domain::{Comment, Priority, Task};

/// The open edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub draft: EditDraft,
    /// Comment feed, newest first, re-fetched after every post.
    pub comments: Vec<Comment>,
    pub error: Option<String>,
}

impl EditorState {
    pub fn new(task: &Task, comments: Vec<Comment>) -> Self {
        Self {
            draft: EditDraft::from_task(task),
            comments,
            error: None,
        }
    }
}

/// All UI state in one struct.
#[derive(Debug, Default)]
pub struct UiState {
    /// Task list as last fetched from the database, newest first.
    pub tasks: Vec<Task>,
    /// Add-task input row.
    pub new_task: TaskDraft,
    pub editor: Option<EditorState>,

    /// Dropdown options, from config.
    pub categories: Vec<String>,
    pub task_types: Vec<String>,
    pub default_priority: Priority,

    /// Last failure, shown in the status line.
    pub error: Option<String>,
    /// Last confirmation, shown in the status line.
    pub notice: Option<String>,
}

impl UiState {
    pub fn new(
        categories: Vec<String>,
        task_types: Vec<String>,
        default_priority: Priority,
    ) -> Self {
        let mut state = Self {
            categories,
            task_types,
            default_priority,
            ..Default::default()
        };
        state.reset_new_task();
        state
    }

    /// Clear the add-task row back to configured defaults.
    pub fn reset_new_task(&mut self) {
        self.new_task = TaskDraft {
            category: self.categories.first().cloned().unwrap_or_default(),
            task_type: self.task_types.first().cloned().unwrap_or_default(),
            priority: self.default_priority,
            ..Default::default()
        };
    }

    pub fn open_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.status.is_closed()).count()
    }
}
