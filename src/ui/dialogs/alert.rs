//! Detection alert dialog

use egui::Context;

use crate::core::DetectionResult;
use crate::ui::dialogs::DialogState;
use crate::ui::theme::Theme;

pub fn render(ctx: &Context, result: &DetectionResult, dialog: &mut DialogState) {
    let mut open = true;

    egui::Window::new("Recording Detected")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(22.0).color(Theme::ERROR));
                ui.add_space(8.0);
                ui.label("The following recording apps are detected:");
            });

            ui.add_space(8.0);

            for app in &result.apps {
                ui.horizontal(|ui| {
                    ui.add_space(30.0);
                    ui.label(
                        egui::RichText::new(app)
                            .monospace()
                            .color(Theme::TEXT_PRIMARY),
                    );
                });
            }

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(format!(
                    "Detected at {}",
                    result.detected_at.format("%H:%M:%S")
                ))
                .small()
                .color(Theme::TEXT_MUTED),
            );

            ui.add_space(12.0);

            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    *dialog = DialogState::None;
                }
            });
        });

    if !open {
        *dialog = DialogState::None;
    }
}
