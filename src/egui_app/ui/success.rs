use eframe::egui::{RichText, Ui};

use super::style;

/// Render the post-submission screen; returns true when the user wants to
/// file another report.
pub(super) fn render(ui: &mut Ui) -> bool {
    let palette = style::palette();
    let mut again = false;
    ui.vertical_centered(|ui| {
        ui.add_space(56.0);
        ui.label(RichText::new("✓").size(42.0).color(palette.success));
        ui.add_space(10.0);
        ui.label(
            RichText::new("Thanks for the feedback!")
                .size(17.0)
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(18.0);
        if ui.button("Send another").clicked() {
            again = true;
        }
    });
    again
}
