use eframe::egui;
use egui::{Color32, RichText};

use crate::domain::{Priority, Task, TaskStatus};
use crate::ui::app::ListAction;

pub(crate) fn status_color(status: TaskStatus) -> Color32 {
    match status {
        TaskStatus::New => Color32::from_rgb(0x3b, 0x82, 0xf6),
        TaskStatus::Work => Color32::from_rgb(0xf5, 0x9e, 0x0b),
        TaskStatus::OnHold => Color32::from_rgb(0x8b, 0x5c, 0xf6),
        TaskStatus::Final => Color32::from_rgb(0x22, 0xc5, 0x5e),
        TaskStatus::Cancelled => Color32::GRAY,
    }
}

fn priority_color(priority: Priority) -> Color32 {
    match priority {
        Priority::Critical => Color32::from_rgb(0xdc, 0x26, 0x26),
        Priority::High => Color32::from_rgb(0xea, 0x58, 0x0c),
        Priority::Medium => Color32::DARK_GRAY,
        Priority::Low => Color32::GRAY,
    }
}

/// Full list, redrawn from `tasks` every frame. Row callbacks carry the row's id by value.
pub(crate) fn render(ui: &mut egui::Ui, tasks: &[Task]) -> Vec<ListAction> {
    let mut actions = Vec::new();

    if tasks.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| ui.weak("No tasks yet. Add one above."));
        return actions;
    }

    for task in tasks {
        let task_id = task.id;
        ui.horizontal(|ui| {
            let mut done = task.status == TaskStatus::Final;
            if ui.checkbox(&mut done, "").changed() {
                actions.push(ListAction::ToggleDone { task_id, done });
            }

            let mut title = RichText::new(&task.title);
            if task.status.is_closed() {
                title = title.strikethrough().weak();
            }
            if ui
                .add(egui::Label::new(title).sense(egui::Sense::click()))
                .on_hover_text("Open task")
                .clicked()
            {
                actions.push(ListAction::OpenEditor { task_id });
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🗑").on_hover_text("Delete task").clicked() {
                    actions.push(ListAction::DeleteRequested { task_id });
                }
                if ui.small_button("Edit").clicked() {
                    actions.push(ListAction::OpenEditor { task_id });
                }
                if let Some(link) = task.external_link.as_deref() {
                    ui.hyperlink_to("🔗", link);
                }
                ui.label(format!("{}%", task.percent_done));
                ui.label(
                    RichText::new(task.status.to_string()).color(status_color(task.status)),
                );
                ui.label(
                    RichText::new(format!("P{}", task.priority.level()))
                        .color(priority_color(task.priority)),
                );
                if !task.category.is_empty() {
                    ui.weak(task.category.as_str());
                }
            });
        });
        ui.separator();
    }

    actions
}
