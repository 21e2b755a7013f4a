//! User interface module - egui front end

mod app;
mod components;
mod dialogs;
mod theme;

pub use app::RecordingDetectorApp;
