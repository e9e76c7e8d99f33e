//! Repository implementations for data access in tasktrack.
//!
//! Provides database operations for tasks and their comments.

mod comment;
mod task;

pub use comment::CommentRepository;
pub use task::TaskRepository;

use anyhow::Result;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

pub type DbConn = Arc<Mutex<Connection>>;

/// Acquire the shared connection for the duration of one repository call.
pub(crate) fn lock(conn: &DbConn) -> Result<MutexGuard<'_, Connection>> {
    conn.lock()
        .map_err(|_| anyhow::anyhow!("database connection lock poisoned"))
}

#[cfg(test)]
mod tests;
