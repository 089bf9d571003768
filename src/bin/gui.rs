// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use unifhorce::{
    config::{
        consts::{WINDOW_H, WINDOW_W},
        options::AppOptions,
    },
    gui,
};

fn app_icon() -> Option<IconData> {
    let img = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/unifhorce.png"
    )));
    let rgba = match img {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            eprintln!("Icon decode failed: {e}");
            return None;
        }
    };
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    let mut viewport = ViewportBuilder::default().with_inner_size([WINDOW_W, WINDOW_H]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, AppOptions::from_env()) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
