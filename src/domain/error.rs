//! Domain error types for tasktrack.
//!
//! These cover the caller-side validation that happens before anything reaches
//! the persistence layer, plus lookups that found nothing.

use super::task::TaskId;
use thiserror::Error;

/// Domain errors related to task operations.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task not found: {0}")]
    NotFound(TaskId),

    #[error("Task title must not be empty")]
    EmptyTitle,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

