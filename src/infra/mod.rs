//! Infrastructure layer (adapters/implementations).
//!
//! This module contains the IO-heavy pieces: SQLite storage and the config file.

pub mod app_config;
pub mod db;
