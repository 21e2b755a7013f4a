//! Status badge component

use egui::{Response, Rounding, Ui, Vec2};

use crate::core::DetectorState;
use crate::ui::theme::Theme;

pub struct StatusBadge;

impl StatusBadge {
    /// Render a full status badge with text
    pub fn show(ui: &mut Ui, state: &DetectorState) -> Response {
        let color = Theme::state_color(state);
        let label = state.label();

        let (rect, response) = ui.allocate_exact_size(Vec2::new(100.0, 26.0), egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            painter.rect_filled(rect, Rounding::same(13.0), color.linear_multiply(0.15));
            painter.rect_stroke(
                rect,
                Rounding::same(13.0),
                egui::Stroke::new(1.0, color.linear_multiply(0.3)),
            );

            // Dot indicator with a glow while detecting
            let dot_center = rect.left_center() + Vec2::new(14.0, 0.0);

            if state.is_active() {
                painter.circle_filled(dot_center, 6.0, color.linear_multiply(0.3));
            }

            painter.circle_filled(dot_center, 4.0, color);

            painter.text(
                rect.center() + Vec2::new(8.0, 0.0),
                egui::Align2::CENTER_CENTER,
                label,
                egui::FontId::proportional(12.0),
                color,
            );
        }

        response
    }
}
