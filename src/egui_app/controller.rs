//! Controller owning UI state and bridging to background jobs.

mod form;
mod jobs;

use crate::config::AppConfig;
use crate::egui_app::state::{FeedbackFormState, UiState, WidgetStep};
use crate::feedback::FeedbackKind;
use crate::screenshot;

use jobs::ControllerJobs;

/// Maintains widget state and dispatches capture and submit jobs.
pub struct FeedbackController {
    /// UI model read by the renderer.
    pub ui: UiState,
    config: AppConfig,
    jobs: ControllerJobs,
}

impl FeedbackController {
    /// Create a controller for the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            ui: UiState::default(),
            config,
            jobs: ControllerJobs::new(),
        }
    }

    /// Open the form for the chosen kind.
    pub fn choose_kind(&mut self, kind: FeedbackKind) {
        self.ui.kind = Some(kind);
        self.ui.form = FeedbackFormState::default();
        self.ui.step = WidgetStep::Form;
    }

    /// Leave the form without submitting and return to the picker.
    pub fn cancel_feedback(&mut self) {
        if let Some(path) = self.ui.form.screenshot.take() {
            screenshot::discard(&path);
        }
        self.reset_to_picker();
    }

    /// Start over after the success screen.
    pub fn restart(&mut self) {
        self.reset_to_picker();
    }

    fn reset_to_picker(&mut self) {
        self.ui.kind = None;
        self.ui.form = FeedbackFormState::default();
        self.ui.step = WidgetStep::KindSelect;
    }
}
