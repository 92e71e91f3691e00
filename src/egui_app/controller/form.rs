use std::path::PathBuf;

use tracing::warn;

use super::FeedbackController;
use super::jobs::{JobMessage, SubmitJob};
use crate::egui_app::state::WidgetStep;
use crate::feedback::{self, SubmitFeedbackRequest};
use crate::screenshot::{self, CaptureError, CaptureOptions};

/// Why a submit attempt failed, spanning attachment encoding and the network
/// call.
#[derive(Debug, thiserror::Error)]
pub(super) enum SubmitError {
    #[error("Could not attach screenshot: {0}")]
    Attachment(#[from] CaptureError),
    #[error(transparent)]
    Submit(#[from] feedback::SubmitFeedbackError),
}

impl FeedbackController {
    /// Ask the capture service for a screenshot of the current screen.
    pub fn take_screenshot(&mut self) {
        if self.ui.form.capturing {
            return;
        }
        self.ui.form.capturing = true;
        self.ui.form.last_error = None;
        self.jobs.begin_screen_capture(CaptureOptions {
            scale: self.config.capture.scale,
        });
    }

    /// Drop the attached screenshot, if any.
    pub fn remove_screenshot(&mut self) {
        if let Some(path) = self.ui.form.screenshot.take() {
            screenshot::discard(&path);
        }
    }

    /// Submit the form. A submission already in flight makes this a no-op.
    pub fn submit_feedback(&mut self) {
        if self.ui.form.sending {
            return;
        }
        let Some(kind) = self.ui.kind else {
            return;
        };
        self.ui.form.sending = true;
        self.ui.form.last_error = None;
        self.jobs.begin_feedback_submit(SubmitJob {
            base_url: self.config.api_base_url.clone(),
            kind,
            screenshot: self.ui.form.screenshot.clone(),
            comment: self.ui.form.comment.clone(),
        });
    }

    /// Drain completed background jobs and fold their results into UI state.
    pub fn poll_background_jobs(&mut self) {
        while let Ok(message) = self.jobs.try_recv_message() {
            match message {
                JobMessage::ScreenCaptured(result) => self.handle_screen_captured(result),
                JobMessage::FeedbackSubmitted(result) => self.handle_feedback_submitted(result),
            }
        }
    }

    fn handle_screen_captured(&mut self, result: Result<PathBuf, CaptureError>) {
        self.jobs.clear_screen_capture();
        self.ui.form.capturing = false;
        match result {
            Ok(path) => {
                if self.ui.step != WidgetStep::Form {
                    // The user left the form while the capture was running.
                    screenshot::discard(&path);
                    return;
                }
                if let Some(previous) = self.ui.form.screenshot.replace(path.clone()) {
                    if previous != path {
                        screenshot::discard(&previous);
                    }
                }
            }
            Err(err) => {
                warn!("Screen capture failed: {err}");
                self.ui.form.last_error = Some(format!("Could not capture screen: {err}"));
            }
        }
    }

    fn handle_feedback_submitted(&mut self, result: Result<(), SubmitError>) {
        self.jobs.clear_feedback_submit();
        self.ui.form.sending = false;
        match result {
            Ok(()) => {
                if let Some(path) = self.ui.form.screenshot.take() {
                    screenshot::discard(&path);
                }
                self.ui.form.comment.clear();
                self.ui.form.last_error = None;
                self.ui.step = WidgetStep::Success;
            }
            Err(err) => {
                warn!("Feedback submission failed: {err}");
                self.ui.form.last_error = Some(err.to_string());
            }
        }
    }
}

/// Read and encode the attachment, then POST the feedback.
pub(super) fn run_submit(job: &SubmitJob) -> Result<(), SubmitError> {
    let screenshot = match &job.screenshot {
        Some(path) => Some(screenshot::read_as_data_uri(path)?),
        None => None,
    };
    let request = SubmitFeedbackRequest {
        kind: job.kind,
        screenshot,
        comment: job.comment.clone(),
    };
    feedback::submit_feedback(&job.base_url, &request)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::feedback::{FeedbackKind, SubmitFeedbackError};

    fn controller_on_form() -> FeedbackController {
        let mut controller = FeedbackController::new(AppConfig::default());
        controller.choose_kind(FeedbackKind::Bug);
        controller
    }

    #[test]
    fn remove_screenshot_clears_state_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let shot = dir.path().join("shot.png");
        std::fs::write(&shot, b"png").unwrap();

        let mut controller = controller_on_form();
        controller.ui.form.screenshot = Some(shot.clone());

        controller.remove_screenshot();

        assert_eq!(controller.ui.form.screenshot, None);
        assert!(!shot.exists());
    }

    #[test]
    fn submit_without_a_kind_is_a_no_op() {
        let mut controller = FeedbackController::new(AppConfig::default());
        controller.submit_feedback();
        assert!(!controller.ui.form.sending);
    }

    #[test]
    fn successful_submission_advances_to_success() {
        let mut controller = controller_on_form();
        controller.ui.form.sending = true;
        controller.ui.form.comment = "sent".to_string();

        controller.handle_feedback_submitted(Ok(()));

        assert_eq!(controller.ui.step, WidgetStep::Success);
        assert!(!controller.ui.form.sending);
        assert!(controller.ui.form.comment.is_empty());
        assert_eq!(controller.ui.form.last_error, None);
    }

    #[test]
    fn failed_submission_keeps_the_form_editable() {
        let mut controller = controller_on_form();
        controller.ui.form.sending = true;
        controller.ui.form.comment = "kept".to_string();

        controller.handle_feedback_submitted(Err(SubmitError::Submit(
            SubmitFeedbackError::Transport("connection refused".to_string()),
        )));

        assert_eq!(controller.ui.step, WidgetStep::Form);
        assert!(!controller.ui.form.sending);
        assert_eq!(controller.ui.form.comment, "kept");
        assert!(controller.ui.form.last_error.is_some());
    }

    #[test]
    fn capture_error_is_surfaced_inline() {
        let mut controller = controller_on_form();
        controller.ui.form.capturing = true;

        controller
            .handle_screen_captured(Err(CaptureError::Capture("denied".to_string())));

        assert!(!controller.ui.form.capturing);
        assert_eq!(controller.ui.form.screenshot, None);
        assert!(
            controller
                .ui
                .form
                .last_error
                .as_deref()
                .unwrap()
                .contains("denied")
        );
    }

    #[test]
    fn capture_replaces_previous_shot_and_discards_its_file() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("old.png");
        let new = dir.path().join("new.png");
        std::fs::write(&old, b"old").unwrap();
        std::fs::write(&new, b"new").unwrap();

        let mut controller = controller_on_form();
        controller.ui.form.screenshot = Some(old.clone());

        controller.handle_screen_captured(Ok(new.clone()));

        assert_eq!(controller.ui.form.screenshot, Some(new.clone()));
        assert!(!old.exists());
        assert!(new.exists());
    }

    #[test]
    fn recapture_to_the_same_path_keeps_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let shot = dir.path().join("shot.png");
        std::fs::write(&shot, b"png").unwrap();

        let mut controller = controller_on_form();
        controller.ui.form.screenshot = Some(shot.clone());

        controller.handle_screen_captured(Ok(shot.clone()));

        assert_eq!(controller.ui.form.screenshot, Some(shot.clone()));
        assert!(shot.exists());
    }

    #[test]
    fn capture_landing_after_cancel_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let shot = dir.path().join("shot.png");
        std::fs::write(&shot, b"png").unwrap();

        let mut controller = controller_on_form();
        controller.cancel_feedback();

        controller.handle_screen_captured(Ok(shot.clone()));

        assert_eq!(controller.ui.form.screenshot, None);
        assert!(!shot.exists());
    }
}
