// src/gui/components/testimonials_table.rs
//
// Loading / error / table states for the testimonial list.
// Arrow keys (and Home/End) move a highlight through the rows, wrapping.

use eframe::egui::{self, Color32, Key, RichText, widgets::Spinner};
use egui_extras::{Column, TableBuilder};

use crate::{
    audit::focus::{next_focus, NavKey},
    gui::app::{App, LoadState},
    testimonials::{validate_testimonial, FIELD_LABELS},
};

const COLUMN_WIDTHS: [f32; 7] = [150.0, 130.0, 170.0, 100.0, 110.0, 340.0, 60.0];
const ERROR_RED: Color32 = Color32::from_rgb(0xDC, 0x35, 0x45);
const WARN_AMBER: Color32 = Color32::from_rgb(0xFF, 0xC1, 0x07);

fn pressed_nav_key(ui: &egui::Ui) -> Option<NavKey> {
    ui.input(|i| {
        if i.key_pressed(Key::ArrowDown) || i.key_pressed(Key::ArrowRight) {
            Some(NavKey::Next)
        } else if i.key_pressed(Key::ArrowUp) || i.key_pressed(Key::ArrowLeft) {
            Some(NavKey::Prev)
        } else if i.key_pressed(Key::Home) {
            Some(NavKey::Home)
        } else if i.key_pressed(Key::End) {
            Some(NavKey::End)
        } else {
            None
        }
    })
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let report = match &app.load {
        LoadState::Loading => {
            ui.horizontal(|ui| {
                ui.add(Spinner::new().size(16.0));
                ui.label("Loading testimonials…");
            });
            return;
        }
        LoadState::Failed(msg) => {
            ui.colored_label(ERROR_RED, msg);
            return;
        }
        LoadState::Loaded(report) => report,
    };

    let rows = &report.testimonials;
    if rows.is_empty() {
        ui.label("No testimonials yet.");
        return;
    }

    let mut scroll_to = None;
    if let Some(key) = pressed_nav_key(ui) {
        let next = next_focus(app.state.gui.focused_row, rows.len(), key);
        logd!("UI: Focus {:?} → {:?} ({key:?})", app.state.gui.focused_row, next);
        app.state.gui.focused_row = next;
        scroll_to = next;
    }
    let focused = app.state.gui.focused_row;

    if !report.dropped.is_empty() {
        ui.label(
            RichText::new(format!("{} malformed row(s) skipped", report.dropped.len()))
                .small()
                .weak(),
        );
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::exact(22.0));
    for w in COLUMN_WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(30.0));
    }
    if let Some(row) = scroll_to {
        table = table.scroll_to_row(row, None);
    }

    table
        .header(24.0, |mut header| {
            header.col(|_| {});
            for label in FIELD_LABELS {
                header.col(|ui| {
                    ui.strong(label);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let ix = row.index();
                let Some(t) = rows.get(ix) else { return };
                row.set_selected(focused == Some(ix));

                row.col(|ui| {
                    if !validate_testimonial(t) {
                        let missing = t.missing_field().unwrap_or_default();
                        ui.colored_label(WARN_AMBER, "⚠")
                            .on_hover_text(format!("Incomplete: {missing} is empty"));
                    }
                });
                for value in t.fields() {
                    row.col(|ui| {
                        ui.label(value);
                    });
                }
            });
        });
}
