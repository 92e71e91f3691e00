use eframe::egui::{self, RichText, TextureHandle, Ui};

use super::screenshot_button::{self, ScreenshotAction};
use super::{style, submit_button};
use crate::egui_app::state::FeedbackFormState;
use crate::feedback::FeedbackKind;

/// What the user asked the form to do this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum FormAction {
    None,
    Cancel,
    TakeScreenshot,
    RemoveScreenshot,
    Submit,
}

/// Render the feedback form screen and report the action taken this frame.
pub(super) fn render(
    ui: &mut Ui,
    kind: FeedbackKind,
    banner: &TextureHandle,
    screenshot: Option<&TextureHandle>,
    state: &mut FeedbackFormState,
) -> FormAction {
    let palette = style::palette();
    let mut action = FormAction::None;

    ui.horizontal(|ui| {
        let back = ui.add_enabled(
            !state.sending,
            egui::Button::new(RichText::new("←").size(18.0)).frame(false),
        );
        if back.on_hover_text("Back").clicked() {
            action = FormAction::Cancel;
        }
    });

    ui.vertical_centered(|ui| {
        ui.add(egui::Image::new(banner).fit_to_exact_size(egui::vec2(28.0, 28.0)));
        ui.add_space(4.0);
        ui.label(
            RichText::new(kind.title())
                .size(18.0)
                .strong()
                .color(palette.text_primary),
        );
    });
    ui.add_space(12.0);

    ui.add_enabled(
        !state.sending,
        egui::TextEdit::multiline(&mut state.comment)
            .hint_text(kind.comment_hint())
            .desired_rows(8)
            .desired_width(f32::INFINITY)
            .lock_focus(true),
    );

    if let Some(err) = &state.last_error {
        ui.add_space(6.0);
        ui.label(RichText::new(err).color(palette.danger));
    }

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        match screenshot_button::render(ui, screenshot, state.capturing, state.sending) {
            ScreenshotAction::None => {}
            ScreenshotAction::Take => action = FormAction::TakeScreenshot,
            ScreenshotAction::Remove => action = FormAction::RemoveScreenshot,
        }
        ui.add_space(6.0);
        if submit_button::render(ui, state.sending) {
            action = FormAction::Submit;
        }
    });

    action
}
