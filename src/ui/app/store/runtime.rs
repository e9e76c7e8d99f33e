use super::super::TaskTrackApp;
use super::action::{Action, AsyncAction, EditorPayload};
use super::command::{Command, TaskDataRefreshReason};
use crate::commands;

pub fn run(app: &mut TaskTrackApp, command: Command) {
    match command {
        Command::RefreshTaskData { reason } => refresh_task_data(app, reason),
        Command::CreateTask { draft } => {
            let result = commands::create_task(&app.app_state, draft).map(|_| ());
            report_mutation(app, result);
        }
        Command::UpdateTaskStatus {
            task_id,
            status,
            percent_done,
        } => {
            let result =
                commands::update_task_status(&app.app_state, task_id, status, percent_done);
            report_mutation(app, result);
        }
        Command::UpdateTaskEfforts {
            task_id,
            planned,
            actual,
        } => {
            let result = commands::update_task_efforts(&app.app_state, task_id, planned, actual);
            report_mutation(app, result);
        }
        Command::UpdateTaskDetails { task_id, details } => {
            let result = commands::update_task_details(&app.app_state, task_id, &details);
            report_mutation(app, result);
        }
        Command::DeleteTask { task_id } => {
            let result = commands::delete_task(&app.app_state, task_id);
            report_mutation(app, result);
        }
        Command::LoadEditor { task_id } => load_editor(app, task_id),
        Command::AddComment { task_id, text } => {
            let result = commands::add_comment(&app.app_state, task_id, &text).map(|_| ());
            report_mutation(app, result);
        }
        Command::LoadComments { task_id } => {
            let result = commands::get_comments_for_task(&app.app_state, task_id);
            app.dispatch(Action::Async(AsyncAction::CommentsLoaded { task_id, result }));
        }
    }
}

fn report_mutation(app: &mut TaskTrackApp, result: Result<(), String>) {
    if let Err(err) = result {
        app.dispatch(Action::Async(AsyncAction::MutationFailed(err)));
    }
}

pub fn refresh_task_data(app: &mut TaskTrackApp, reason: TaskDataRefreshReason) {
    let result = commands::get_all_tasks(&app.app_state);
    app.dispatch(Action::Async(AsyncAction::TasksLoaded { reason, result }));
}

pub fn load_editor(app: &mut TaskTrackApp, task_id: crate::domain::TaskId) {
    let result = (|| -> Result<EditorPayload, String> {
        let task = commands::get_task(&app.app_state, task_id)?;
        let comments = commands::get_comments_for_task(&app.app_state, task_id)?;
        Ok(EditorPayload { task, comments })
    })();

    app.dispatch(Action::Async(AsyncAction::EditorLoaded(result)));
}
