// src/gui/actions/load.rs
use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{
    gui::{
        app::{App, LoadState},
        progress::GuiProgress,
    },
    testimonials::{self, LOAD_FAILED_MESSAGE},
};

/// Start one fetch → parse on a worker thread. A load already in flight is not
/// cancelled; its result is never read and its progress stops reaching the
/// status line.
pub fn load(app: &mut App, ctx: &egui::Context) {
    let source = app.state.options.source.csv.clone();
    let (tx, rx) = mpsc::channel();
    let mut prog = GuiProgress::claim(app.status.clone(), app.load_generation.clone());
    let ctx = ctx.clone();

    logf!("UI: Load testimonials from {source}");

    thread::spawn(move || {
        let res = testimonials::load(&source, Some(&mut prog));
        let _ = tx.send(res);
        ctx.request_repaint();
    });

    app.load = LoadState::Loading;
    app.load_rx = Some(rx);
}

/// Pick up the worker's result, if it's there.
pub fn poll_load(app: &mut App) {
    let Some(msg) = app.load_rx.as_ref().map(|rx| rx.try_recv()) else { return };

    match msg {
        Ok(Ok(report)) => {
            let n = report.testimonials.len();
            if app.state.gui.focused_row.is_some_and(|i| i >= n) {
                app.state.gui.focused_row = None;
            }
            app.load = LoadState::Loaded(report);
            app.load_rx = None;
        }
        Ok(Err(e)) => {
            loge!("UI: Load failed: {e}");
            app.load = LoadState::Failed(s!(LOAD_FAILED_MESSAGE));
            app.load_rx = None;
            app.status(format!("Error: {e}"));
        }
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Disconnected) => {
            loge!("UI: Load worker ended without a result");
            app.load = LoadState::Failed(s!(LOAD_FAILED_MESSAGE));
            app.load_rx = None;
        }
    }
}
