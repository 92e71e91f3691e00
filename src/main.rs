#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the gripe feedback widget.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use eframe::egui;
use egui::viewport::IconData;
use gripe::config;
use gripe::egui_app::ui::{GripeApp, MIN_VIEWPORT_SIZE};
use gripe::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = match config::load_or_default() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Using default configuration: {err}");
            config::AppConfig::default()
        }
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(380.0, 560.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Gripe",
        native_options,
        Box::new(move |_cc| Ok(Box::new(GripeApp::new(config)))),
    )?;
    Ok(())
}

/// Convert the embedded icon bytes into icon-friendly RGBA data.
fn load_app_icon() -> Option<IconData> {
    let image = image::load_from_memory(include_bytes!("../assets/icon.png"))
        .ok()?
        .to_rgba8();
    let (width, height) = image.dimensions();
    Some(IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_icon_decodes() {
        assert!(load_app_icon().is_some());
    }
}
