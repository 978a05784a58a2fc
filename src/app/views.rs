//! Form and result rendering

use super::App;
use crate::theme;
use crate::ui::components::{choice_chips, field_label, output_line};
use eframe::egui;

impl App {
    /// Header bar: title, busy indicator and settings button
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "{}  Home Price Prediction",
                    egui_phosphor::regular::HOUSE
                ))
                .size(theme::FONT_TITLE)
                .strong()
                .color(theme::TEXT_PRIMARY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let gear = ui
                    .add(theme::button(egui_phosphor::regular::GEAR))
                    .on_hover_text("Settings");
                if gear.clicked() {
                    self.api_base_url_str = self.client.base_url().to_string();
                    self.show_settings = true;
                }
                if self.is_busy() {
                    ui.spinner();
                }
            });
        });
    }

    /// Property form with the current price estimate
    pub(crate) fn render_estimate_form(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut estimate_clicked = false;

        theme::card_frame().show(ui, |ui| {
            ui.set_width(theme::FORM_WIDTH);

            field_label(ui, "Area (Square Feet)");
            ui.add(
                egui::TextEdit::singleline(&mut self.form.sqft)
                    .hint_text("1000")
                    .desired_width(theme::FIELD_WIDTH),
            );
            ui.add_space(theme::SPACING_MD);

            field_label(ui, "BHK");
            choice_chips(ui, &mut self.form.bhk);
            ui.add_space(theme::SPACING_MD);

            field_label(ui, "Bath");
            choice_chips(ui, &mut self.form.bath);
            ui.add_space(theme::SPACING_MD);

            field_label(ui, "Location");
            self.render_location_select(ui);
            ui.add_space(theme::SPACING_LG);

            let button = theme::button_accent(format!(
                "{}  Estimate Price",
                egui_phosphor::regular::CALCULATOR
            ));
            if ui
                .add_sized([theme::FIELD_WIDTH, theme::BUTTON_HEIGHT_LARGE], button)
                .clicked()
            {
                estimate_clicked = true;
            }

            if let Some(price) = &self.outputs.estimated_price {
                ui.add_space(theme::SPACING_LG);
                ui.heading(
                    egui::RichText::new(price)
                        .size(theme::FONT_PRICE)
                        .strong()
                        .color(theme::ACCENT),
                );
            }
        });

        if estimate_clicked {
            self.estimate_current_price(ctx);
        }
    }

    fn render_location_select(&mut self, ui: &mut egui::Ui) {
        let locations = &self.form.locations;
        let selected_text = if locations.options().is_empty() {
            "Choose a Location".to_string()
        } else {
            locations.value().to_string()
        };

        let mut picked = None;
        egui::ComboBox::from_id_salt("uiLocations")
            .selected_text(selected_text)
            .width(theme::FIELD_WIDTH)
            .height(320.0)
            .show_ui(ui, |ui| {
                for (idx, name) in locations.options().iter().enumerate() {
                    if ui
                        .selectable_label(idx == locations.selected(), name)
                        .clicked()
                    {
                        picked = Some(idx);
                    }
                }
            });

        if let Some(idx) = picked {
            self.form.locations.set_selected(idx);
        }
    }

    /// Horizon field with the future projection regions
    pub(crate) fn render_future_form(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut future_clicked = false;

        theme::card_frame().show(ui, |ui| {
            ui.set_width(theme::FORM_WIDTH);

            field_label(ui, "Horizon (Months)");
            ui.add(
                egui::TextEdit::singleline(&mut self.form.horizon)
                    .hint_text("12")
                    .desired_width(theme::FIELD_WIDTH),
            );
            ui.add_space(theme::SPACING_LG);

            let button = theme::button(format!(
                "{}  Estimate Future Price",
                egui_phosphor::regular::TREND_UP
            ));
            if ui
                .add_sized([theme::FIELD_WIDTH, theme::BUTTON_HEIGHT_LARGE], button)
                .clicked()
            {
                future_clicked = true;
            }

            if self.outputs.has_future() {
                ui.add_space(theme::SPACING_LG);
                output_line(
                    ui,
                    self.outputs.future_current.as_deref(),
                    theme::FONT_HEADING,
                    theme::TEXT_PRIMARY,
                );
                output_line(
                    ui,
                    self.outputs.future_price.as_deref(),
                    theme::FONT_HEADING,
                    theme::ACCENT,
                );
                output_line(
                    ui,
                    self.outputs.risk.as_deref(),
                    theme::FONT_BODY,
                    theme::TEXT_SECONDARY,
                );
                output_line(
                    ui,
                    self.outputs.recommendation.as_deref(),
                    theme::FONT_BODY,
                    theme::STATUS_WARNING,
                );
            }
        });

        if future_clicked {
            self.estimate_future_price(ctx);
        }
    }
}
