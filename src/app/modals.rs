//! Modal dialogs (blocking alert, settings)

use super::App;
use crate::constants::{APP_VERSION, DEFAULT_API_BASE_URL};
use crate::theme;
use eframe::egui;
use tracing::debug;

impl App {
    /// Show the oldest pending alert. Interaction behind it is blocked until dismissed.
    pub(crate) fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.alerts.front().cloned() else {
            return;
        };

        let mut dismissed = false;
        let modal = egui::Modal::new(egui::Id::new("alert_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let modal_response = modal.show(ctx, |ui| {
            ui.set_width(theme::MODAL_WIDTH);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::WARNING_CIRCLE)
                        .size(22.0)
                        .color(theme::STATUS_ERROR),
                );
                ui.label(
                    egui::RichText::new("Something went wrong")
                        .size(theme::FONT_HEADING)
                        .strong(),
                );
            });
            ui.add_space(theme::SPACING_MD);
            ui.label(egui::RichText::new(&message).color(theme::TEXT_SECONDARY));
            ui.add_space(theme::SPACING_XL);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let ok = ui.add(theme::button_accent(format!(
                    "{}  OK",
                    egui_phosphor::regular::CHECK
                )));
                if ok.clicked() {
                    dismissed = true;
                }
            });
        });

        if dismissed || modal_response.should_close() {
            debug!(remaining = self.alerts.len() - 1, "Alert dismissed");
            self.alerts.pop_front();
        }
    }

    /// Settings dialog for the prediction service address
    pub(crate) fn render_settings(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let mut save = false;
        let mut close = false;
        let modal = egui::Modal::new(egui::Id::new("settings_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame());
        let modal_response = modal.show(ctx, |ui| {
            ui.set_width(theme::MODAL_WIDTH);
            ui.label(egui::RichText::new("Settings").size(theme::FONT_HEADING).strong());
            ui.add_space(theme::SPACING_MD);

            ui.label(
                egui::RichText::new("Prediction service address")
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
            );
            let edit = ui.add(
                egui::TextEdit::singleline(&mut self.api_base_url_str)
                    .hint_text(DEFAULT_API_BASE_URL)
                    .desired_width(f32::INFINITY),
            );
            if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                save = true;
            }

            ui.add_space(theme::SPACING_XL);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("v{}", APP_VERSION))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(theme::button_accent("Save")).clicked() {
                        save = true;
                    }
                    if ui.add(theme::button("Cancel")).clicked() {
                        close = true;
                    }
                });
            });
        });

        if save {
            self.apply_api_base_url(ctx);
            self.show_settings = false;
        } else if close || modal_response.should_close() {
            self.show_settings = false;
        }
    }
}
