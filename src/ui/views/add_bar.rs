use eframe::egui;

use crate::domain::Priority;
use crate::ui::app::{ListAction, UiState};

/// Add-task input row: title field, category/type/priority pickers, start date, Add button.
pub(crate) fn render(ui: &mut egui::Ui, state: &mut UiState) -> Option<ListAction> {
    let mut submit = false;

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.new_task.title)
                .hint_text("New task...")
                .desired_width(ui.available_width() - 70.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
            response.request_focus();
        }
        if ui.button("Add").clicked() {
            submit = true;
        }
    });

    ui.horizontal(|ui| {
        super::combo_strings(
            ui,
            "new_task_category",
            "Category",
            &mut state.new_task.category,
            &state.categories,
        );
        super::combo_strings(
            ui,
            "new_task_type",
            "Type",
            &mut state.new_task.task_type,
            &state.task_types,
        );
        egui::ComboBox::from_id_salt("new_task_priority")
            .selected_text(state.new_task.priority.to_string())
            .show_ui(ui, |ui| {
                for priority in Priority::ALL {
                    ui.selectable_value(
                        &mut state.new_task.priority,
                        priority,
                        priority.to_string(),
                    );
                }
            });
        ui.label("Start");
        ui.add(
            egui::TextEdit::singleline(&mut state.new_task.start_date)
                .hint_text("YYYY-MM-DD")
                .desired_width(90.0),
        );
    });

    submit.then_some(ListAction::AddRequested)
}
