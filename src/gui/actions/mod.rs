// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{load, poll_load, run_audit}.

mod audit;  // src/gui/actions/audit.rs
mod load;   // src/gui/actions/load.rs

pub use audit::run_audit;
pub use load::{load, poll_load};
