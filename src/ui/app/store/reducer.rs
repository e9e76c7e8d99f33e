use super::super::state::{EditorState, UiState};
use super::action::{Action, AsyncAction, EditorAction, ListAction};
use super::command::{Command, TaskDataRefreshReason};
use crate::domain::{TaskError, TaskStatus};

pub fn reduce(state: &mut UiState, action: Action) -> Vec<Command> {
    match action {
        Action::List(action) => reduce_list(state, action),
        Action::Editor(action) => reduce_editor(state, action),
        Action::Async(action) => reduce_async(state, action),
    }
}

fn reduce_list(state: &mut UiState, action: ListAction) -> Vec<Command> {
    match action {
        ListAction::RefreshFromDb { reason } => vec![Command::RefreshTaskData { reason }],
        ListAction::AddRequested => {
            let draft = state.new_task.clone();
            match draft.clone().into_new_task() {
                // Blank input is ignored, same as pressing Enter on an empty field.
                Err(TaskError::EmptyTitle) => Vec::new(),
                Err(err) => {
                    state.error = Some(err.to_string());
                    Vec::new()
                }
                Ok(_) => {
                    // The input row is cleared once the reload confirms the insert.
                    state.error = None;
                    state.notice = None;
                    vec![
                        Command::CreateTask { draft },
                        Command::RefreshTaskData {
                            reason: TaskDataRefreshReason::AfterCreate,
                        },
                    ]
                }
            }
        }
        ListAction::ToggleDone { task_id, done } => {
            state.error = None;
            let (status, percent_done) = if done {
                (TaskStatus::Final, 100)
            } else {
                (TaskStatus::New, 0)
            };
            vec![
                Command::UpdateTaskStatus {
                    task_id,
                    status,
                    percent_done,
                },
                Command::RefreshTaskData {
                    reason: TaskDataRefreshReason::AfterStatusChange,
                },
            ]
        }
        ListAction::DeleteRequested { task_id } => {
            state.error = None;
            state.notice = None;
            if state
                .editor
                .as_ref()
                .is_some_and(|e| e.draft.task_id == task_id)
            {
                state.editor = None;
            }
            vec![
                Command::DeleteTask { task_id },
                Command::RefreshTaskData {
                    reason: TaskDataRefreshReason::AfterDelete,
                },
            ]
        }
        ListAction::OpenEditor { task_id } => {
            // One editor at a time; its unsaved draft is never replaced.
            if state.editor.is_some() {
                return Vec::new();
            }
            state.notice = None;
            vec![Command::LoadEditor { task_id }]
        }
        ListAction::DismissMessages => {
            state.error = None;
            state.notice = None;
            Vec::new()
        }
    }
}

fn reduce_editor(state: &mut UiState, action: EditorAction) -> Vec<Command> {
    match action {
        EditorAction::Close => {
            state.editor = None;
            Vec::new()
        }
        EditorAction::Save => {
            let Some(editor) = state.editor.as_mut() else {
                return Vec::new();
            };
            let details = match editor.draft.to_details() {
                Ok(details) => details,
                Err(err) => {
                    editor.error = Some(err.to_string());
                    return Vec::new();
                }
            };
            editor.error = None;
            state.error = None;
            state.notice = None;

            let task_id = editor.draft.task_id;
            let (status, percent_done) = editor.draft.status_update();
            let (planned, actual) = editor.draft.efforts();
            vec![
                Command::UpdateTaskDetails { task_id, details },
                Command::UpdateTaskStatus {
                    task_id,
                    status,
                    percent_done,
                },
                Command::UpdateTaskEfforts {
                    task_id,
                    planned,
                    actual,
                },
                Command::RefreshTaskData {
                    reason: TaskDataRefreshReason::AfterSave,
                },
            ]
        }
        EditorAction::PostComment => {
            let Some(editor) = state.editor.as_mut() else {
                return Vec::new();
            };
            let Some(text) = editor.draft.pending_comment() else {
                return Vec::new();
            };
            editor.draft.comment.clear();
            let task_id = editor.draft.task_id;
            vec![
                Command::AddComment { task_id, text },
                Command::LoadComments { task_id },
            ]
        }
    }
}

fn reduce_async(state: &mut UiState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::TasksLoaded { reason, result } => {
            match result {
                Ok(tasks) => {
                    state.tasks = tasks;
                    match reason {
                        TaskDataRefreshReason::AfterSave if state.error.is_none() => {
                            state.editor = None;
                            state.notice = Some("Task saved".to_string());
                        }
                        TaskDataRefreshReason::AfterCreate if state.error.is_none() => {
                            state.reset_new_task();
                        }
                        _ => {}
                    }
                }
                Err(err) => state.error = Some(err),
            }
            Vec::new()
        }
        AsyncAction::EditorLoaded(result) => {
            match result {
                Ok(payload) => {
                    state.editor = Some(EditorState::new(&payload.task, payload.comments));
                }
                Err(err) => state.error = Some(err),
            }
            Vec::new()
        }
        AsyncAction::CommentsLoaded { task_id, result } => {
            let Some(editor) = state
                .editor
                .as_mut()
                .filter(|e| e.draft.task_id == task_id)
            else {
                return Vec::new();
            };
            match result {
                Ok(comments) => editor.comments = comments,
                Err(err) => editor.error = Some(err),
            }
            Vec::new()
        }
        AsyncAction::MutationFailed(err) => {
            log::error!("{err}");
            if let Some(editor) = state.editor.as_mut() {
                editor.error = Some(err.clone());
            }
            state.error = Some(err);
            Vec::new()
        }
    }
}
