// src/gui/components/top_bar.rs

use eframe::egui::{self, widgets::Spinner};
use crate::gui::{actions, app::{App, LoadState}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("Testimonials");
        ui.separator();
        ui.label(format!("Source: {}", app.state.options.source.csv));

        let loading = matches!(app.load, LoadState::Loading);
        if ui.add_enabled(!loading, egui::Button::new("Reload")).clicked() {
            actions::load(app, ui.ctx());
        }
        if loading {
            ui.add(Spinner::new().size(16.0));
        }

        ui.separator();
        ui.label(format!("Status: {}", app.status_text()));
    });
}
