use crate::application::TaskDraft;
use crate::domain::{TaskDetails, TaskId, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskDataRefreshReason {
    Startup,
    Manual,
    AfterCreate,
    AfterStatusChange,
    AfterSave,
    AfterDelete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    RefreshTaskData {
        reason: TaskDataRefreshReason,
    },
    CreateTask {
        draft: TaskDraft,
    },
    UpdateTaskStatus {
        task_id: TaskId,
        status: TaskStatus,
        percent_done: u8,
    },
    UpdateTaskEfforts {
        task_id: TaskId,
        planned: f64,
        actual: f64,
    },
    UpdateTaskDetails {
        task_id: TaskId,
        details: TaskDetails,
    },
    DeleteTask {
        task_id: TaskId,
    },
    LoadEditor {
        task_id: TaskId,
    },
    AddComment {
        task_id: TaskId,
        text: String,
    },
    LoadComments {
        task_id: TaskId,
    },
}
