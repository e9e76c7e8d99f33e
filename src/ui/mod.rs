//! egui front end: the app root, its reducer store, and the views.

pub mod app;
mod views;
