use crate::domain::{Comment, Task, TaskId};

use super::command::TaskDataRefreshReason;

#[derive(Debug)]
pub enum Action {
    List(ListAction),
    Editor(EditorAction),
    Async(AsyncAction),
}

#[derive(Debug)]
pub enum ListAction {
    RefreshFromDb { reason: TaskDataRefreshReason },
    /// Submit the add-task input row.
    AddRequested,
    /// Checkbox on a row: done means Final at 100%, undone means New at 0%.
    ToggleDone { task_id: TaskId, done: bool },
    DeleteRequested { task_id: TaskId },
    OpenEditor { task_id: TaskId },
    DismissMessages,
}

#[derive(Debug)]
pub enum EditorAction {
    Save,
    PostComment,
    Close,
}

#[derive(Debug)]
pub enum AsyncAction {
    TasksLoaded {
        reason: TaskDataRefreshReason,
        result: Result<Vec<Task>, String>,
    },
    EditorLoaded(Result<EditorPayload, String>),
    CommentsLoaded {
        task_id: TaskId,
        result: Result<Vec<Comment>, String>,
    },
    MutationFailed(String),
}

#[derive(Debug)]
pub struct EditorPayload {
    pub task: Task,
    pub comments: Vec<Comment>,
}
