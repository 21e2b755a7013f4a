//! Theme and styling for the UI

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

use crate::core::DetectorState;

/// Application color palette (Nord)
pub struct Theme;

impl Theme {
    // Accent colors - frost
    pub const PRIMARY: Color32 = Color32::from_rgb(129, 161, 193); // Frost blue
    pub const PRIMARY_HOVER: Color32 = Color32::from_rgb(136, 192, 208); // Lighter frost
    pub const PRIMARY_DARK: Color32 = Color32::from_rgb(94, 129, 172); // Deep frost

    // Status colors - aurora
    pub const SUCCESS: Color32 = Color32::from_rgb(163, 190, 140); // Green
    pub const WARNING: Color32 = Color32::from_rgb(235, 203, 139); // Yellow
    pub const ERROR: Color32 = Color32::from_rgb(191, 97, 106); // Red

    // Background colors - polar night
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(46, 52, 64);
    pub const BG_SECONDARY: Color32 = Color32::from_rgb(59, 66, 82);
    pub const BG_TERTIARY: Color32 = Color32::from_rgb(67, 76, 94);
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(76, 86, 106);

    // Text colors - snow storm
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(216, 222, 233);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(150, 160, 178);

    // Border colors
    pub const BORDER: Color32 = Color32::from_rgb(76, 86, 106);
    pub const BORDER_LIGHT: Color32 = Color32::from_rgb(59, 66, 82);

    // Detector status colors
    pub const STATUS_IDLE: Color32 = Self::TEXT_MUTED;
    pub const STATUS_DETECTING: Color32 = Self::SUCCESS;
    pub const STATUS_ALERT: Color32 = Self::ERROR;

    /// Apply the dark Nord theme to egui
    pub fn apply(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = Visuals::dark();

        visuals.panel_fill = Self::BG_PRIMARY;
        visuals.window_fill = Self::BG_SECONDARY;
        visuals.extreme_bg_color = Self::BG_PRIMARY;
        visuals.faint_bg_color = Self::BG_TERTIARY;

        // Non-interactive widgets (labels, etc.)
        visuals.widgets.noninteractive.bg_fill = Self::BG_SECONDARY;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.5, Self::BORDER_LIGHT);
        visuals.widgets.noninteractive.rounding = Rounding::same(5.0);

        // Inactive interactive widgets (buttons at rest)
        visuals.widgets.inactive.bg_fill = Self::BG_ELEVATED;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.inactive.bg_stroke = Stroke::new(0.5, Self::BORDER);
        visuals.widgets.inactive.rounding = Rounding::same(5.0);

        // Hovered widgets
        visuals.widgets.hovered.bg_fill = Self::PRIMARY;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Self::BG_PRIMARY);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, Self::PRIMARY_HOVER);
        visuals.widgets.hovered.rounding = Rounding::same(5.0);
        visuals.widgets.hovered.expansion = 1.0;

        // Active/pressed widgets
        visuals.widgets.active.bg_fill = Self::PRIMARY_DARK;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, Self::PRIMARY_DARK);
        visuals.widgets.active.rounding = Rounding::same(5.0);

        // Open widgets (menus)
        visuals.widgets.open.bg_fill = Self::BG_ELEVATED;
        visuals.widgets.open.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, Self::PRIMARY.linear_multiply(0.5));
        visuals.widgets.open.rounding = Rounding::same(5.0);

        // Selection colors
        visuals.selection.bg_fill = Self::PRIMARY.linear_multiply(0.25);
        visuals.selection.stroke = Stroke::new(1.0, Self::PRIMARY);

        // Window styling
        visuals.window_rounding = Rounding::same(8.0);
        visuals.window_stroke = Stroke::new(0.5, Self::BORDER);
        visuals.window_shadow = egui::Shadow {
            offset: egui::vec2(0.0, 8.0),
            blur: 24.0,
            spread: 4.0,
            color: Color32::from_black_alpha(110),
        };

        visuals.menu_rounding = Rounding::same(6.0);

        style.visuals = visuals;

        // Text styles sized for a small fixed window
        style.text_styles = [
            (
                TextStyle::Small,
                FontId::new(12.0, FontFamily::Proportional),
            ),
            (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
            (
                TextStyle::Button,
                FontId::new(14.0, FontFamily::Proportional),
            ),
            (
                TextStyle::Heading,
                FontId::new(18.0, FontFamily::Proportional),
            ),
            (
                TextStyle::Monospace,
                FontId::new(13.0, FontFamily::Monospace),
            ),
        ]
        .into();

        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.window_margin = egui::Margin::same(16.0);
        style.spacing.button_padding = egui::vec2(14.0, 10.0);

        ctx.set_style(style);
    }

    /// Get the indicator color for a detector state
    pub fn state_color(state: &DetectorState) -> Color32 {
        match state {
            DetectorState::Idle => Self::STATUS_IDLE,
            DetectorState::Detecting => Self::STATUS_DETECTING,
        }
    }
}
