//! Domain types for tasktrack
//! Defines the task and comment records and their enumerations.

pub mod comment;
pub mod error;
pub mod task;

pub use comment::*;
pub use error::*;
pub use task::*;
