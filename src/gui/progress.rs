// src/gui/progress.rs
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};
use crate::progress::Progress;

/// Progress sink for the load worker; writes into the shared status line.
///
/// Each sink holds a ticket from the shared generation counter. Once a newer
/// load claims the status line, older sinks go quiet.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    generation: Arc<AtomicU64>,
    ticket: u64,
    loaded: usize,
}

impl GuiProgress {
    /// Take the status line for a new load, retiring every earlier sink.
    pub fn claim(status: Arc<Mutex<String>>, generation: Arc<AtomicU64>) -> Self {
        let ticket = {
            let _guard = status.lock().unwrap_or_else(|p| p.into_inner());
            generation.fetch_add(1, Ordering::AcqRel) + 1
        };
        Self { status, generation, ticket, loaded: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        let mut line = self.status.lock().unwrap_or_else(|p| p.into_inner());
        // checked under the lock so a concurrent claim can't interleave
        if self.generation.load(Ordering::Acquire) == self.ticket {
            *line = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, count: usize) {
        self.loaded = count;
    }
    fn finish(&mut self) {
        self.set_status(format!("Loaded {} testimonial(s)", self.loaded));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(status: &Arc<Mutex<String>>) -> String {
        status.lock().unwrap().clone()
    }

    #[test]
    fn superseded_load_cannot_overwrite_status() {
        let status = Arc::new(Mutex::new(s!("Idle")));
        let generation = Arc::new(AtomicU64::new(0));

        let mut old = GuiProgress::claim(status.clone(), generation.clone());
        old.log("Loading testimonials from a.csv…");
        assert_eq!(text(&status), "Loading testimonials from a.csv…");

        let mut new = GuiProgress::claim(status.clone(), generation.clone());
        new.item_done(4);
        new.finish();
        assert_eq!(text(&status), "Loaded 4 testimonial(s)");

        old.item_done(1);
        old.finish();
        assert_eq!(text(&status), "Loaded 4 testimonial(s)");
    }
}
