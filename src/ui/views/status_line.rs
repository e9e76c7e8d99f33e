use eframe::egui;

use crate::ui::app::{ListAction, TaskDataRefreshReason, UiState};

/// Bottom line: counts, last error or confirmation, manual reload.
pub(crate) fn render(ui: &mut egui::Ui, state: &UiState) -> Option<ListAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.weak(format!(
            "{} tasks, {} open",
            state.tasks.len(),
            state.open_count()
        ));

        if let Some(error) = &state.error {
            ui.separator();
            ui.colored_label(ui.visuals().error_fg_color, error.as_str());
        } else if let Some(notice) = &state.notice {
            ui.separator();
            ui.colored_label(egui::Color32::from_rgb(0x16, 0xa3, 0x4a), notice.as_str());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("Reload").clicked() {
                action = Some(ListAction::RefreshFromDb {
                    reason: TaskDataRefreshReason::Manual,
                });
            }
            if (state.error.is_some() || state.notice.is_some())
                && ui.small_button("Dismiss").clicked()
            {
                action = Some(ListAction::DismissMessages);
            }
        });
    });

    action
}
