//! About dialog

use egui::Context;

use crate::ui::dialogs::DialogState;
use crate::ui::theme::Theme;
use crate::{APP_NAME, APP_VERSION};

pub fn render(ctx: &Context, dialog: &mut DialogState) {
    let mut open = true;

    egui::Window::new("About")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(300.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(APP_NAME)
                        .size(16.0)
                        .strong()
                        .color(Theme::TEXT_PRIMARY),
                );
                ui.label(format!("Version {}", APP_VERSION));
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("Detects screen recording apps in real time.")
                        .color(Theme::TEXT_MUTED),
                );
            });

            ui.add_space(16.0);

            ui.vertical_centered(|ui| {
                if ui.button("Close").clicked() {
                    *dialog = DialogState::None;
                }
            });
        });

    if !open {
        *dialog = DialogState::None;
    }
}
