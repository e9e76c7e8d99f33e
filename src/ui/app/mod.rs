//! Main application state and UI logic for tasktrack.
//!
//! Holds the egui application state, the reducer store that turns UI events
//! into persistence commands, and the root `eframe::App` implementation.

mod root;
mod state;
mod store;
mod update;

pub use root::TaskTrackApp;
pub use state::{EditorState, UiState};
pub use store::{Action, AsyncAction, EditorAction, ListAction, TaskDataRefreshReason};
