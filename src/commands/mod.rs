//! Task commands shared by the GUI runtime and the CLI.
//!
//! Each command runs one persistence call against the shared [`AppState`] and
//! maps failures to a display string. Nothing here caches: callers re-fetch
//! after every mutation.

use crate::application::TaskDraft;
use crate::domain::{Comment, Task, TaskDetails, TaskError, TaskId, TaskStatus};
use crate::state::AppState;

fn not_found(task_id: TaskId) -> String {
    TaskError::NotFound(task_id).to_string()
}

pub fn create_task(state: &AppState, draft: TaskDraft) -> Result<Task, String> {
    let new_task = draft.into_new_task().map_err(|e| e.to_string())?;
    let task = state
        .db
        .task_repo()
        .create(&new_task)
        .map_err(|e| format!("Failed to create task: {e}"))?;
    log::info!("Created task {} '{}'", task.id, task.title);
    Ok(task)
}

pub fn get_all_tasks(state: &AppState) -> Result<Vec<Task>, String> {
    state
        .db
        .task_repo()
        .find_all()
        .map_err(|e| format!("Failed to load tasks: {e}"))
}

pub fn get_task(state: &AppState, task_id: TaskId) -> Result<Task, String> {
    state
        .db
        .task_repo()
        .find_by_id(task_id)
        .map_err(|e| format!("Failed to load task: {e}"))?
        .ok_or_else(|| not_found(task_id))
}

pub fn update_task_status(
    state: &AppState,
    task_id: TaskId,
    status: TaskStatus,
    percent_done: u8,
) -> Result<(), String> {
    let affected = state
        .db
        .task_repo()
        .update_status(task_id, status, percent_done.min(100))
        .map_err(|e| format!("Failed to update task status: {e}"))?;
    if affected == 0 {
        return Err(not_found(task_id));
    }
    log::info!("Task {task_id}: status {status}, {percent_done}% done");
    Ok(())
}

pub fn update_task_efforts(
    state: &AppState,
    task_id: TaskId,
    planned: f64,
    actual: f64,
) -> Result<(), String> {
    let affected = state
        .db
        .task_repo()
        .update_efforts(task_id, planned, actual)
        .map_err(|e| format!("Failed to update task efforts: {e}"))?;
    if affected == 0 {
        return Err(not_found(task_id));
    }
    log::info!("Task {task_id}: efforts planned {planned}h, actual {actual}h");
    Ok(())
}

pub fn update_task_details(
    state: &AppState,
    task_id: TaskId,
    details: &TaskDetails,
) -> Result<(), String> {
    let affected = state
        .db
        .task_repo()
        .update_details(task_id, details)
        .map_err(|e| format!("Failed to update task: {e}"))?;
    if affected == 0 {
        return Err(not_found(task_id));
    }
    log::info!("Task {task_id}: details saved");
    Ok(())
}

pub fn add_comment(state: &AppState, task_id: TaskId, text: &str) -> Result<Comment, String> {
    let comment = state
        .db
        .comment_repo()
        .add(task_id, text)
        .map_err(|e| format!("Failed to add comment: {e}"))?;
    log::info!("Task {task_id}: comment {} added", comment.id);
    Ok(comment)
}

pub fn get_comments_for_task(state: &AppState, task_id: TaskId) -> Result<Vec<Comment>, String> {
    state
        .db
        .comment_repo()
        .list_for_task(task_id)
        .map_err(|e| format!("Failed to load comments: {e}"))
}

pub fn delete_task(state: &AppState, task_id: TaskId) -> Result<(), String> {
    let affected = state
        .db
        .task_repo()
        .delete(task_id)
        .map_err(|e| format!("Failed to delete task: {e}"))?;
    if affected == 0 {
        return Err(not_found(task_id));
    }
    log::info!("Deleted task {task_id}");
    Ok(())
}
