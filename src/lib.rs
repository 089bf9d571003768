// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;

pub mod append;
pub mod audit;
pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod testimonials;

#[cfg(feature = "cli")]
pub mod cli;
