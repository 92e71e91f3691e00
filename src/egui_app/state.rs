//! Shared state types for the egui UI.

use std::path::PathBuf;

use crate::feedback::FeedbackKind;

/// Which screen of the widget flow is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidgetStep {
    /// Picking one of the feedback kinds.
    #[default]
    KindSelect,
    /// Filling in the form for the chosen kind.
    Form,
    /// Confirmation after a successful submission.
    Success,
}

/// UI state for the feedback form screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedbackFormState {
    /// Path of the captured screenshot, if one is attached.
    pub screenshot: Option<PathBuf>,
    /// True while a capture job is running.
    pub capturing: bool,
    /// True from submit-start until the submission resolves.
    pub sending: bool,
    /// Free-form comment text.
    pub comment: String,
    /// Last capture or submission error, shown inline.
    pub last_error: Option<String>,
}

/// Top-level UI model consumed by the renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    /// Current step of the widget flow.
    pub step: WidgetStep,
    /// Kind chosen in the picker; `None` while picking.
    pub kind: Option<FeedbackKind>,
    /// Form screen state.
    pub form: FeedbackFormState,
}
