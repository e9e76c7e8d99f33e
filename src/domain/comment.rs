use super::task::TaskId;
use serde::{Deserialize, Serialize};

/// Unique identifier for a comment (SQLite rowid)
pub type CommentId = i64;

/// A timestamped entry in a task's history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub task_id: TaskId,
    pub comment_text: String,
    /// Creation timestamp in RFC3339 format.
    pub created_at: String,
}
