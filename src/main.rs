//! Main entry point for the tasktrack desktop application
//! Opens the task database and starts the egui window.

use anyhow::Result;
use eframe::egui;

use tasktrack::state::AppState;
use tasktrack::ui::app::TaskTrackApp;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app_state = AppState::open(None)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_title("TaskTrack"),
        ..Default::default()
    };

    eframe::run_native(
        "TaskTrack",
        options,
        Box::new(move |cc| Ok(Box::new(TaskTrackApp::new_egui(cc, app_state)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run the GUI: {e}"))
}
