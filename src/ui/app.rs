//! Main application UI

use std::time::{Duration, Instant};

use egui::{CentralPanel, Context, TopBottomPanel};
use tracing::info;

use super::components::StatusBadge;
use super::dialogs::{self, DialogState};
use super::theme::Theme;
use crate::core::{Detector, SystemProcessLister, TickOutcome, WatchList};

/// Main application struct
pub struct RecordingDetectorApp {
    /// Detection loop over the live process list
    detector: Detector<SystemProcessLister>,
    /// Status line shown under the buttons
    status: String,
    /// Dialog state
    dialog: DialogState,
    /// Armed until a detection fires; re-armed when a tick reports all-clear.
    /// Keeps the modal alert one-shot per detection instead of reopening
    /// every 5 seconds while the same app stays running.
    alert_armed: bool,
    /// First frame flag
    first_frame: bool,
}

impl RecordingDetectorApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Theme::apply(&cc.egui_ctx);

        Self {
            detector: Detector::new(WatchList::default(), SystemProcessLister::new()),
            status: "Status: Idle".to_string(),
            dialog: DialogState::None,
            alert_armed: true,
            first_frame: true,
        }
    }

    /// Poll the detector and fold the tick outcome into the UI state
    fn drive_detector(&mut self) {
        let Some(outcome) = self.detector.poll(Instant::now()) else {
            return;
        };

        match outcome {
            TickOutcome::Detected(result) => {
                self.status = format!("Recording Detected: {}", result.summary());
                if self.alert_armed {
                    self.alert_armed = false;
                    self.dialog = DialogState::Alert(result);
                }
            }
            TickOutcome::Clear => {
                self.status = "Status: No Recording Detected".to_string();
                self.alert_armed = true;
            }
            TickOutcome::Failed(e) => {
                // Transient: the next tick retries on its own.
                self.status = format!("Status: {}", e);
            }
        }
    }

    fn start_detection(&mut self) {
        self.detector.start(Instant::now());
        self.alert_armed = true;
        self.status = "Status: Detecting...".to_string();
    }

    fn stop_detection(&mut self) {
        self.detector.stop();
        self.status = "Status: Idle".to_string();
    }

    /// Render the menu bar with About and Exit actions
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar")
            .frame(
                egui::Frame::none()
                    .fill(Theme::BG_SECONDARY)
                    .inner_margin(egui::Margin::symmetric(8.0, 4.0)),
            )
            .show(ctx, |ui| {
                egui::menu::bar(ui, |ui| {
                    if ui.button("About").clicked() {
                        self.dialog = DialogState::About;
                    }
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
    }

    /// Render the central panel with controls and the status label
    fn render_main_content(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.add_space(12.0);

            let start_btn = egui::Button::new(
                egui::RichText::new("Start Detection").color(Theme::TEXT_PRIMARY),
            )
            .fill(Theme::BG_ELEVATED)
            .rounding(egui::Rounding::same(5.0))
            .min_size(egui::vec2(ui.available_width(), 38.0));

            if ui.add(start_btn).clicked() {
                self.start_detection();
            }

            let stop_btn = egui::Button::new(
                egui::RichText::new("Stop Detection").color(Theme::TEXT_PRIMARY),
            )
            .fill(Theme::BG_ELEVATED)
            .rounding(egui::Rounding::same(5.0))
            .min_size(egui::vec2(ui.available_width(), 38.0));

            if ui.add(stop_btn).clicked() {
                self.stop_detection();
            }

            ui.add_space(12.0);

            ui.horizontal(|ui| {
                StatusBadge::show(ui, &self.detector.state());
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(&self.status)
                        .size(16.0)
                        .color(Theme::TEXT_PRIMARY),
                );
            });

            ui.add_space(8.0);

            ui.label(
                egui::RichText::new(format!(
                    "Watching: {}",
                    self.detector.watch_list().entries().join(", ")
                ))
                .small()
                .color(Theme::TEXT_MUTED),
            );
        });
    }

    /// Render dialogs
    fn render_dialogs(&mut self, ctx: &Context) {
        match &self.dialog {
            DialogState::None => {}
            DialogState::About => {
                dialogs::about::render(ctx, &mut self.dialog);
            }
            DialogState::Alert(result) => {
                let result = result.clone();
                dialogs::alert::render(ctx, &result, &mut self.dialog);
            }
        }
    }
}

impl eframe::App for RecordingDetectorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            self.first_frame = false;
            info!("First frame rendered");
        }

        // Tick the detection loop cooperatively from the event loop
        self.drive_detector();

        // Keep frames coming while there is no input, so polling stays live
        ctx.request_repaint_after(Duration::from_millis(250));

        self.render_menu_bar(ctx);
        self.render_main_content(ctx);
        self.render_dialogs(ctx);
    }
}
