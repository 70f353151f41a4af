//! Reusable UI components

use crate::theme;
use eframe::egui;

/// Custom checkbox widget with consistent styling
pub fn styled_checkbox(ui: &mut egui::Ui, selected: bool, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let rounding = 3.0;

        if selected {
            painter.rect_filled(rect, rounding, theme::ACCENT);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                egui_phosphor::regular::CHECK,
                egui::FontId::proportional(size * 0.7),
                egui::Color32::WHITE,
            );
        } else {
            painter.rect_stroke(
                rect,
                rounding,
                egui::Stroke::new(theme::STROKE_MEDIUM, theme::BORDER_DEFAULT),
                egui::StrokeKind::Inside,
            );
        }
    }

    response
}

/// Checkbox followed by a clickable label. Returns true when toggled.
pub fn labeled_checkbox(ui: &mut egui::Ui, value: &mut bool, label: &str) -> bool {
    let mut toggled = false;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = theme::SPACING_SM + 2.0;
        let box_clicked = styled_checkbox(ui, *value, theme::CHECKBOX_SIZE).clicked();
        let label_clicked = ui
            .add(
                egui::Label::new(
                    egui::RichText::new(label)
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_SECONDARY),
                )
                .sense(egui::Sense::click()),
            )
            .clicked();
        if box_clicked || label_clicked {
            *value = !*value;
            toggled = true;
        }
    });
    toggled
}
