//! Application layer (caller-side validation and form handling).

pub mod forms;

pub use forms::{EditDraft, TaskDraft, format_effort, parse_effort, parse_start_date};
