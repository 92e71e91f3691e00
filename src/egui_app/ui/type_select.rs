use eframe::egui::{self, RichText, TextureHandle, Ui};

use super::style;
use crate::feedback::FeedbackKind;

/// Render the kind picker banner; returns the chosen kind, if any.
pub(super) fn render(
    ui: &mut Ui,
    banners: &[(FeedbackKind, TextureHandle)],
) -> Option<FeedbackKind> {
    let palette = style::palette();
    let mut chosen = None;

    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.label(
            RichText::new("Leave your feedback")
                .size(18.0)
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(20.0);
    });

    ui.columns(banners.len(), |columns| {
        for (column, (kind, texture)) in columns.iter_mut().zip(banners) {
            column.vertical_centered(|ui| {
                let image =
                    egui::Image::new(texture).fit_to_exact_size(egui::vec2(48.0, 48.0));
                if ui.add(egui::ImageButton::new(image)).clicked() {
                    chosen = Some(*kind);
                }
                ui.add_space(6.0);
                ui.label(RichText::new(kind.title()).color(palette.text_secondary));
            });
        }
    });

    chosen
}
