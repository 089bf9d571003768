// src/gui/app.rs
use std::{
    error::Error,
    sync::{atomic::AtomicU64, mpsc::Receiver, Arc, Mutex},
    time::{Duration, Instant},
};

use eframe::egui;

use crate::{
    audit::AuditResult,
    config::{options::AppOptions, state::AppState},
    core::source::LoadError,
    testimonials::ParseReport,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions, app_options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Unifhorce",
        options,
        Box::new(|cc| Ok(Box::new(App::new(AppState::new(app_options), &cc.egui_ctx)))),
    )?;
    Ok(())
}

/// Testimonial list lifecycle as the view sees it.
pub enum LoadState {
    Loading,
    Loaded(ParseReport),
    Failed(String),
}

pub type LoadResult = Result<ParseReport, LoadError>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // testimonials
    pub load: LoadState,
    pub load_rx: Option<Receiver<LoadResult>>,

    // audit results, replaced wholesale on every run
    pub audit: Vec<AuditResult>,
    pub audit_error: Option<String>,
    pub audit_due: Option<Instant>,

    // status line (load worker writes here)
    pub status: Arc<Mutex<String>>,
    // bumped per load; only the newest worker may write the status line
    pub load_generation: Arc<AtomicU64>,
}

impl App {
    pub fn new(state: AppState, ctx: &egui::Context) -> Self {
        let audit_due = state.options.audit.auto_run
            .then(|| Instant::now() + Duration::from_millis(state.options.audit.delay_ms));

        let mut app = Self {
            state,
            load: LoadState::Loading,
            load_rx: None,
            audit: Vec::new(),
            audit_error: None,
            audit_due,
            status: Arc::new(Mutex::new(s!("Idle"))),
            load_generation: Arc::new(AtomicU64::new(0)),
        };

        logf!(
            "Init: csv={} site={} auto_audit={}",
            app.state.options.source.csv,
            app.state.options.audit.target,
            app.audit_due.is_some()
        );

        actions::load(&mut app, ctx);
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(|p| p.into_inner()) = msg.into();
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    /// Fire the delayed first audit once its time has come.
    fn tick_audit_timer(&mut self, ctx: &egui::Context) {
        let Some(due) = self.audit_due else { return };
        let now = Instant::now();
        if now >= due {
            self.audit_due = None;
            actions::run_audit(self);
        } else {
            ctx.request_repaint_after(due - now);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_load(self);
        self.tick_audit_timer(ctx);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            components::top_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::testimonials_table::draw(ui, self);
        });

        components::a11y_panel::draw(ctx, self);
    }
}
