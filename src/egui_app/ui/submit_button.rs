use eframe::egui::{self, RichText, Ui};

use super::style;

/// Render the submit control; returns true when pressed.
///
/// While `loading`, interaction is disabled and a busy spinner replaces the
/// label. The control owns no state.
pub(super) fn render(ui: &mut Ui, loading: bool) -> bool {
    let palette = style::palette();
    let size = egui::vec2(ui.available_width().max(120.0), 40.0);
    if loading {
        ui.add_sized(size, egui::Spinner::new());
        return false;
    }
    let button = egui::Button::new(
        RichText::new("Send feedback")
            .strong()
            .color(palette.on_brand),
    )
    .fill(palette.brand);
    ui.add_sized(size, button).clicked()
}
