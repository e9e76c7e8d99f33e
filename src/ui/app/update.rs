use eframe::egui;

use super::TaskTrackApp;
use super::store::{Action, EditorAction};
use crate::ui::views;

impl eframe::App for TaskTrackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Rendering only collects actions; they are dispatched once the frame's widgets are built.
        let mut actions: Vec<Action> = Vec::new();
        // The edit dialog is modal: the add row and the list are inert while it is open.
        let list_enabled = self.state.editor.is_none();

        egui::TopBottomPanel::top("add_task_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.add_enabled_ui(list_enabled, |ui| {
                if let Some(action) = views::add_bar::render(ui, &mut self.state) {
                    actions.push(Action::List(action));
                }
            });
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("status_line").show(ctx, |ui| {
            if let Some(action) = views::status_line::render(ui, &self.state) {
                actions.push(Action::List(action));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_enabled_ui(list_enabled, |ui| {
                        actions.extend(
                            views::task_list::render(ui, &self.state.tasks)
                                .into_iter()
                                .map(Action::List),
                        );
                    });
                });
        });

        if let Some(editor) = self.state.editor.as_mut() {
            let mut open = true;
            let action = views::edit_dialog::render(
                ctx,
                editor,
                &self.state.categories,
                &self.state.task_types,
                &mut open,
            );
            if let Some(action) = action {
                actions.push(Action::Editor(action));
            }
            if !open {
                actions.push(Action::Editor(EditorAction::Close));
            }
        }

        for action in actions {
            self.dispatch(action);
        }
    }
}
