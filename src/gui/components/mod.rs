// src/gui/components/mod.rs
pub mod a11y_panel;
pub mod testimonials_table;
pub mod top_bar;
