// src/gui/actions/audit.rs
use crate::{
    audit::{self, Status},
    gui::app::App,
};

/// Re-run every check and replace the previous results.
pub fn run_audit(app: &mut App) {
    let target = app.state.options.audit.target.clone();

    match audit::audit_source(&target) {
        Ok(results) => {
            let fail = audit::count_status(&results, Status::Fail);
            let warn = audit::count_status(&results, Status::Warning);
            app.status(format!("Audit: {} checks, {fail} failed, {warn} warning(s)", results.len()));
            app.audit = results;
            app.audit_error = None;
        }
        Err(e) => {
            app.audit = Vec::new();
            app.audit_error = Some(format!("Could not read {target}: {e}"));
            app.status("Audit: page not readable");
        }
    }
}
