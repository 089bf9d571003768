// src/gui/components/a11y_panel.rs
//
// Fixed-position accessibility results panel. Collapsed, it's a single "A11Y"
// button in the bottom-right corner.

use eframe::egui::{self, Align, Align2, Color32, Layout, RichText, Stroke};
use crate::{
    audit::{AuditResult, Status},
    gui::{actions, app::App},
};

// Site palette
const ACCENT: Color32 = Color32::from_rgb(0x00, 0x7A, 0xCC);
const PASS_BG: Color32 = Color32::from_rgb(0xD4, 0xED, 0xDA);
const PASS_FG: Color32 = Color32::from_rgb(0x28, 0xA7, 0x45);
const FAIL_BG: Color32 = Color32::from_rgb(0xF8, 0xD7, 0xDA);
const FAIL_FG: Color32 = Color32::from_rgb(0xDC, 0x35, 0x45);
const WARN_BG: Color32 = Color32::from_rgb(0xFF, 0xF3, 0xCD);
const WARN_FG: Color32 = Color32::from_rgb(0xFF, 0xC1, 0x07);
const MESSAGE_GRAY: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);

fn palette(status: Status) -> (Color32, Color32) {
    match status {
        Status::Pass => (PASS_BG, PASS_FG),
        Status::Fail => (FAIL_BG, FAIL_FG),
        Status::Warning => (WARN_BG, WARN_FG),
    }
}

pub fn draw(ctx: &egui::Context, app: &mut App) {
    if !app.state.gui.show_checker {
        draw_toggle(ctx, app);
        return;
    }

    let mut rerun = false;
    let mut close = false;

    egui::Window::new("Accessibility Test Results")
        .id(egui::Id::new("a11y_panel"))
        .anchor(Align2::RIGHT_TOP, [-20.0, 20.0])
        .default_width(300.0)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            if let Some(err) = &app.audit_error {
                ui.colored_label(FAIL_FG, err);
            } else if app.audit.is_empty() {
                ui.label("No results yet.");
            }

            egui::ScrollArea::vertical()
                .id_salt("a11y_results_scroll")
                .max_height(400.0)
                .show(ui, |ui| {
                    for r in &app.audit {
                        draw_result(ui, r);
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let run = egui::Button::new(RichText::new("Run Tests Again").color(Color32::WHITE))
                    .fill(ACCENT);
                if ui.add(run).clicked() {
                    rerun = true;
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let x = egui::Button::new(RichText::new("×").color(Color32::WHITE)).fill(FAIL_FG);
                    if ui.add(x).on_hover_text("Close accessibility checker").clicked() {
                        close = true;
                    }
                });
            });
        });

    if rerun {
        logf!("UI: Audit re-run requested");
        actions::run_audit(app);
    }
    if close {
        app.state.gui.show_checker = false;
    }
}

fn draw_toggle(ctx: &egui::Context, app: &mut App) {
    egui::Area::new(egui::Id::new("a11y_toggle"))
        .anchor(Align2::RIGHT_BOTTOM, [-20.0, -20.0])
        .show(ctx, |ui| {
            let button = egui::Button::new(RichText::new("A11Y").strong().color(Color32::WHITE))
                .fill(ACCENT)
                .min_size(egui::vec2(60.0, 60.0));
            if ui.add(button).on_hover_text("Show accessibility test results").clicked() {
                app.state.gui.show_checker = true;
                logd!("UI: A11Y panel opened");
            }
        });
}

fn draw_result(ui: &mut egui::Ui, r: &AuditResult) {
    let (bg, fg) = palette(r.status);
    egui::Frame::group(ui.style())
        .fill(bg)
        .stroke(Stroke::new(1.0, fg))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(r.status.icon()).color(fg).strong());
                ui.label(RichText::new(&r.name).color(Color32::BLACK).strong());
            })
            .response
            .on_hover_text(format!("{}: {}", r.name, r.status.label()));
            ui.label(RichText::new(&r.message).small().color(MESSAGE_GRAY));
        });
    ui.add_space(4.0);
}
