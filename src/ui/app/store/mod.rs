//! Reducer-style state updates + side-effect commands.

mod action;
mod command;
mod reducer;
mod runtime;

pub use action::{Action, AsyncAction, EditorAction, EditorPayload, ListAction};
pub use command::{Command, TaskDataRefreshReason};

use super::TaskTrackApp;

impl TaskTrackApp {
    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            runtime::run(self, command);
        }
    }
}
