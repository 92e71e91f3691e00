//! egui renderer for the feedback widget.

pub mod style;

mod form;
mod screenshot_button;
mod submit_button;
mod success;
mod type_select;

use std::path::{Path, PathBuf};
use std::time::Duration;

use eframe::egui::{self, TextureHandle};

use crate::config::AppConfig;
use crate::egui_app::controller::FeedbackController;
use crate::egui_app::state::WidgetStep;
use crate::feedback::FeedbackKind;
use form::FormAction;

/// Minimum size the widget window is allowed to shrink to.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(320.0, 440.0);

/// Renders the widget using the shared controller state.
pub struct GripeApp {
    controller: FeedbackController,
    visuals_set: bool,
    kind_banners: Option<Vec<(FeedbackKind, TextureHandle)>>,
    screenshot_tex: Option<(PathBuf, TextureHandle)>,
}

impl GripeApp {
    /// Create the app for the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            controller: FeedbackController::new(config),
            visuals_set: false,
            kind_banners: None,
            screenshot_tex: None,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn kind_banners(&mut self, ctx: &egui::Context) -> &[(FeedbackKind, TextureHandle)] {
        self.kind_banners.get_or_insert_with(|| {
            FeedbackKind::ALL
                .into_iter()
                .map(|kind| (kind, load_kind_banner(ctx, kind)))
                .collect()
        })
    }

    fn kind_banner(&mut self, ctx: &egui::Context, kind: FeedbackKind) -> TextureHandle {
        self.kind_banners(ctx)
            .iter()
            .find(|(banner_kind, _)| *banner_kind == kind)
            .map(|(_, texture)| texture.clone())
            .unwrap_or_else(|| load_kind_banner(ctx, kind))
    }

    fn screenshot_texture(&mut self, ctx: &egui::Context, path: &Path) -> Option<TextureHandle> {
        if let Some((cached_path, texture)) = &self.screenshot_tex {
            if cached_path == path {
                return Some(texture.clone());
            }
        }
        let bytes = std::fs::read(path).ok()?;
        let image = image::load_from_memory(&bytes).ok()?.to_rgba8();
        let texture = load_rgba_texture(ctx, "screenshot-preview", &image);
        self.screenshot_tex = Some((path.to_path_buf(), texture.clone()));
        Some(texture)
    }

    fn render_form(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let Some(kind) = self.controller.ui.kind else {
            // A form without a chosen kind cannot exist; recover to the picker.
            self.controller.restart();
            return;
        };
        let banner = self.kind_banner(ctx, kind);
        let screenshot = self
            .controller
            .ui
            .form
            .screenshot
            .clone()
            .and_then(|path| self.screenshot_texture(ctx, &path));

        let action = form::render(
            ui,
            kind,
            &banner,
            screenshot.as_ref(),
            &mut self.controller.ui.form,
        );
        match action {
            FormAction::None => {}
            FormAction::Cancel => self.controller.cancel_feedback(),
            FormAction::TakeScreenshot => self.controller.take_screenshot(),
            FormAction::RemoveScreenshot => self.controller.remove_screenshot(),
            FormAction::Submit => self.controller.submit_feedback(),
        }
    }
}

impl eframe::App for GripeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        if self.controller.ui.form.sending || self.controller.ui.form.capturing {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.controller.ui.step {
            WidgetStep::KindSelect => {
                let banners = self.kind_banners(ctx).to_vec();
                if let Some(kind) = type_select::render(ui, &banners) {
                    self.controller.choose_kind(kind);
                }
            }
            WidgetStep::Form => self.render_form(ctx, ui),
            WidgetStep::Success => {
                if success::render(ui) {
                    self.controller.restart();
                }
            }
        });
    }
}

fn load_kind_banner(ctx: &egui::Context, kind: FeedbackKind) -> TextureHandle {
    let image = image::load_from_memory(kind.image_bytes())
        .map(|image| image.to_rgba8())
        .unwrap_or_else(|_| image::RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 0, 0])));
    load_rgba_texture(ctx, &format!("kind-{}", kind.as_str()), &image)
}

fn load_rgba_texture(
    ctx: &egui::Context,
    name: &str,
    image: &image::RgbaImage,
) -> TextureHandle {
    let size = [image.width() as usize, image.height() as usize];
    let color = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
    ctx.load_texture(name, color, egui::TextureOptions::LINEAR)
}
