pub mod application;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod state;
pub mod ui;
