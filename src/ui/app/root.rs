//! Root egui app struct.

use eframe::egui;

use crate::state::AppState;

use super::state::UiState;
use super::store::{Action, ListAction, TaskDataRefreshReason};

/// Root egui application for tasktrack.
pub struct TaskTrackApp {
    pub state: UiState,
    pub app_state: AppState,
}

impl TaskTrackApp {
    /// Build the app and load the task list once.
    pub fn new(app_state: AppState) -> Self {
        let state = {
            let config = app_state.config.read();
            UiState::new(
                config.categories.clone(),
                config.task_types.clone(),
                config.default_priority,
            )
        };
        let mut app = Self { state, app_state };
        app.dispatch(Action::List(ListAction::RefreshFromDb {
            reason: TaskDataRefreshReason::Startup,
        }));
        app
    }

    pub fn new_egui(cc: &eframe::CreationContext<'_>, app_state: AppState) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::new(app_state)
    }

    #[cfg(test)]
    pub fn new_for_test() -> Self {
        Self::new(AppState::in_memory().expect("in-memory state"))
    }
}
