//! Widgets for the task list window. Each view renders from state and returns
//! the action the user triggered, if any.

pub(crate) mod add_bar;
pub(crate) mod edit_dialog;
pub(crate) mod status_line;
pub(crate) mod task_list;

use eframe::egui;

/// Dropdown over configured string options. A current value missing from the
/// options (e.g. a category removed from config) is still shown as selected.
pub(crate) fn combo_strings(
    ui: &mut egui::Ui,
    id_salt: &str,
    label: &str,
    value: &mut String,
    options: &[String],
) {
    let selected = if value.is_empty() {
        "-".to_string()
    } else {
        value.clone()
    };
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(value, option.clone(), option.as_str());
            }
        });
    if !label.is_empty() {
        ui.label(label);
    }
}
