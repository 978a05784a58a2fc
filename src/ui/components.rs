//! Reusable UI components

use crate::form::ChoiceGroup;
use crate::theme;
use eframe::egui;

/// Row of numbered chips acting as one radio group. Returns true if the selection changed.
pub fn choice_chips(ui: &mut egui::Ui, group: &mut ChoiceGroup) -> bool {
    let mut clicked = None;
    ui.push_id(group.name, |ui| {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
            for idx in 0..group.len() {
                let size = egui::vec2(theme::CHIP_SIZE, theme::CHIP_SIZE);
                let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
                let selected = group.is_checked(idx);

                if ui.is_rect_visible(rect) {
                    let base = if selected {
                        theme::TOGGLE_SELECTED
                    } else {
                        theme::TOGGLE_UNSELECTED
                    };
                    let (fill, draw_rect) = theme::button_visual(&response, base, rect);
                    let painter = ui.painter();
                    painter.rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
                    if selected {
                        painter.rect_stroke(
                            draw_rect,
                            theme::RADIUS_DEFAULT,
                            egui::Stroke::new(theme::STROKE_MEDIUM, theme::ACCENT),
                            egui::StrokeKind::Inside,
                        );
                    }
                    painter.text(
                        draw_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        (idx + 1).to_string(),
                        egui::FontId::proportional(theme::FONT_BODY),
                        if selected { theme::TEXT_PRIMARY } else { theme::TEXT_MUTED },
                    );
                }

                if response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if response.clicked() {
                    clicked = Some(idx);
                }
            }
        });
    });

    match clicked {
        Some(idx) if !group.is_checked(idx) => {
            group.select(idx);
            true
        }
        _ => false,
    }
}

/// Small uppercase caption above a form field
pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text.to_uppercase())
                .size(theme::FONT_SECTION)
                .color(theme::TEXT_DIM),
        )
        .selectable(false),
    );
}

/// One output region. Draws nothing until the region has content.
pub fn output_line(ui: &mut egui::Ui, text: Option<&str>, size: f32, color: egui::Color32) {
    if let Some(text) = text {
        ui.label(egui::RichText::new(text).size(size).color(color));
    }
}
