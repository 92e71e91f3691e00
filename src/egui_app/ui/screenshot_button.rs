use eframe::egui::{self, RichText, TextureHandle, Ui};

/// Action reported by the screenshot control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ScreenshotAction {
    None,
    Take,
    Remove,
}

const SIDE: f32 = 40.0;

/// Render the screenshot control.
///
/// Shows a thumbnail with a remove affordance when a screenshot is attached,
/// a spinner while a capture is running, and a capture affordance otherwise.
/// The control owns no state; the caller applies the reported action.
pub(super) fn render(
    ui: &mut Ui,
    screenshot: Option<&TextureHandle>,
    capturing: bool,
    disabled: bool,
) -> ScreenshotAction {
    let mut action = ScreenshotAction::None;
    match screenshot {
        Some(texture) => {
            let image = egui::Image::new(texture).fit_to_exact_size(egui::vec2(SIDE, SIDE));
            let thumb = ui
                .add_enabled(!disabled, egui::ImageButton::new(image))
                .on_hover_text("Remove screenshot");
            if thumb.clicked() {
                action = ScreenshotAction::Remove;
            }
        }
        None if capturing => {
            ui.add_sized(egui::vec2(SIDE, SIDE), egui::Spinner::new());
        }
        None => {
            let button = ui
                .add_enabled(
                    !disabled,
                    egui::Button::new(RichText::new("📷").size(18.0))
                        .min_size(egui::vec2(SIDE, SIDE)),
                )
                .on_hover_text("Take a screenshot");
            if button.clicked() {
                action = ScreenshotAction::Take;
            }
        }
    }
    action
}
