use eframe::egui;
use egui::RichText;

use crate::domain::{Priority, TaskStatus};
use crate::ui::app::{EditorAction, EditorState};

use super::task_list::status_color;

/// Modal edit dialog: detail fields, status/progress, efforts, and the comment feed.
pub(crate) fn render(
    ctx: &egui::Context,
    editor: &mut EditorState,
    categories: &[String],
    task_types: &[String],
    open: &mut bool,
) -> Option<EditorAction> {
    let mut action = None;
    let title = format!("Task #{}", editor.draft.task_id);

    egui::Window::new(title)
        .id(egui::Id::new("edit_task_dialog"))
        .open(open)
        .collapsible(false)
        .resizable(true)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let draft = &mut editor.draft;

            egui::Grid::new("edit_task_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Title");
                    ui.text_edit_singleline(&mut draft.title);
                    ui.end_row();

                    ui.label("Description");
                    ui.add(egui::TextEdit::multiline(&mut draft.description).desired_rows(3));
                    ui.end_row();

                    ui.label("Category");
                    super::combo_strings(
                        ui,
                        "edit_category",
                        "",
                        &mut draft.category,
                        categories,
                    );
                    ui.end_row();

                    ui.label("Type");
                    super::combo_strings(
                        ui,
                        "edit_task_type",
                        "",
                        &mut draft.task_type,
                        task_types,
                    );
                    ui.end_row();

                    ui.label("Status");
                    egui::ComboBox::from_id_salt("edit_status")
                        .selected_text(
                            RichText::new(draft.status.to_string())
                                .color(status_color(draft.status)),
                        )
                        .show_ui(ui, |ui| {
                            for status in TaskStatus::ALL {
                                ui.selectable_value(&mut draft.status, status, status.to_string());
                            }
                        });
                    ui.end_row();

                    ui.label("Priority");
                    egui::ComboBox::from_id_salt("edit_priority")
                        .selected_text(draft.priority.to_string())
                        .show_ui(ui, |ui| {
                            for priority in Priority::ALL {
                                ui.selectable_value(
                                    &mut draft.priority,
                                    priority,
                                    priority.to_string(),
                                );
                            }
                        });
                    ui.end_row();

                    ui.label("Progress");
                    ui.add(egui::Slider::new(&mut draft.percent_done, 0..=100).suffix("%"));
                    ui.end_row();

                    ui.label("Effort planned (h)");
                    ui.add(
                        egui::TextEdit::singleline(&mut draft.effort_planned).desired_width(80.0),
                    );
                    ui.end_row();

                    ui.label("Effort actual (h)");
                    ui.add(
                        egui::TextEdit::singleline(&mut draft.effort_actual).desired_width(80.0),
                    );
                    ui.end_row();

                    ui.label("Link");
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut draft.external_link);
                        let link = draft.external_link.trim();
                        if !link.is_empty() {
                            ui.hyperlink_to("Open", link);
                        }
                    });
                    ui.end_row();
                });

            if let Some(error) = &editor.error {
                ui.colored_label(ui.visuals().error_fg_color, error.as_str());
            }

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    action = Some(EditorAction::Save);
                }
                if ui.button("Close").clicked() {
                    action = Some(EditorAction::Close);
                }
            });

            ui.separator();
            ui.label(RichText::new("History").strong());

            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut editor.draft.comment)
                        .hint_text("Add a comment...")
                        .desired_width(ui.available_width() - 60.0),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if submitted || ui.button("Post").clicked() {
                    action = Some(EditorAction::PostComment);
                }
            });

            egui::ScrollArea::vertical()
                .max_height(200.0)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    if editor.comments.is_empty() {
                        ui.weak("No comments yet.");
                    }
                    for comment in &editor.comments {
                        ui.label(
                            RichText::new(short_timestamp(&comment.created_at))
                                .small()
                                .weak(),
                        );
                        ui.label(comment.comment_text.as_str());
                        ui.add_space(4.0);
                    }
                });
        });

    action
}

/// `2024-05-01T10:00:00.123+00:00` -> `2024-05-01 10:00`
fn short_timestamp(created_at: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(created_at) {
        Ok(ts) => ts
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Err(_) => created_at.to_string(),
    }
}
