//! Recording Detector - alerts when screen-recording software is running
//!
//! A small desktop utility that polls the OS process list on a fixed interval
//! and raises an alert when a known recording or conferencing application
//! (OBS, Camtasia, Zoom, Teams) is found running.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(dead_code)] // Core and theme APIs are kept complete even where the UI uses part of them

mod core;
mod ui;

use anyhow::Result;
use single_instance::SingleInstance;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ui::RecordingDetectorApp;

/// Application name constant
pub const APP_NAME: &str = "Recording Detector";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    info!("{} v{} starting...", APP_NAME, APP_VERSION);

    // Ensure only one instance of the detector is running
    let instance = SingleInstance::new("RecordingDetector")
        .map_err(|e| anyhow::anyhow!("Failed to create single instance lock: {}", e))?;
    if !instance.is_single() {
        error!("Another instance of {} is already running!", APP_NAME);
        show_already_running_dialog();
        return Ok(());
    }

    // Run the GUI application
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 230.0])
            .with_min_inner_size([360.0, 200.0])
            .with_icon(load_app_icon()),
        ..Default::default()
    };

    info!("Starting GUI...");
    eframe::run_native(
        &format!("{} v{}", APP_NAME, APP_VERSION),
        native_options,
        Box::new(|cc| Ok(Box::new(RecordingDetectorApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    info!("{} shutting down", APP_NAME);
    Ok(())
}

/// Initialize the logging system
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("recording_detector=info,eframe=warn,egui=warn,wgpu=error")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load the application icon
fn load_app_icon() -> egui::IconData {
    // Red "record" dot on a dark disc, generated in place rather than
    // loaded from an embedded resource
    let size = 64;
    let mut rgba = vec![0u8; size * size * 4];

    let center = size as f32 / 2.0;
    let disc_radius = center - 2.0;
    let dot_radius = size as f32 * 0.22;

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < dot_radius {
                // Inner recording dot, Nord aurora red
                rgba[idx] = 191;
                rgba[idx + 1] = 97;
                rgba[idx + 2] = 106;
                rgba[idx + 3] = 255;
            } else if dist < disc_radius {
                // Polar night disc
                rgba[idx] = 46;
                rgba[idx + 1] = 52;
                rgba[idx + 2] = 64;
                rgba[idx + 3] = 255;
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}

/// Show dialog when another instance is already running
fn show_already_running_dialog() {
    #[cfg(windows)]
    {
        use windows::core::PCWSTR;
        use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONWARNING, MB_OK};

        let title: Vec<u16> = format!("{}\0", APP_NAME).encode_utf16().collect();
        let msg: Vec<u16> = format!("{} is already running!\0", APP_NAME)
            .encode_utf16()
            .collect();

        unsafe {
            MessageBoxW(
                None,
                PCWSTR::from_raw(msg.as_ptr()),
                PCWSTR::from_raw(title.as_ptr()),
                MB_OK | MB_ICONWARNING,
            );
        }
    }

    #[cfg(not(windows))]
    {
        eprintln!("{} is already running!", APP_NAME);
    }
}
