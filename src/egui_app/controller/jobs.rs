use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use crate::feedback::FeedbackKind;
use crate::screenshot::{self, CaptureError, CaptureOptions};

/// Completion messages delivered back to the UI event loop.
pub(super) enum JobMessage {
    ScreenCaptured(Result<PathBuf, CaptureError>),
    FeedbackSubmitted(Result<(), super::form::SubmitError>),
}

/// A submission handed off to a background thread.
#[derive(Debug)]
pub(super) struct SubmitJob {
    pub(super) base_url: String,
    pub(super) kind: FeedbackKind,
    pub(super) screenshot: Option<PathBuf>,
    pub(super) comment: String,
}

/// One-shot background jobs owned by the controller.
///
/// Each job runs on its own thread and sends exactly one completion message;
/// the `*_in_progress` flags keep a second job of the same kind from being
/// spawned while one is outstanding.
pub(super) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    capture_in_progress: bool,
    submit_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel();
        Self {
            message_tx,
            message_rx,
            capture_in_progress: false,
            submit_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn begin_screen_capture(&mut self, options: CaptureOptions) {
        if self.capture_in_progress {
            return;
        }
        self.capture_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = screenshot::capture_screen(options);
            let _ = tx.send(JobMessage::ScreenCaptured(result));
        });
    }

    pub(super) fn clear_screen_capture(&mut self) {
        self.capture_in_progress = false;
    }

    pub(super) fn begin_feedback_submit(&mut self, job: SubmitJob) {
        if self.submit_in_progress {
            return;
        }
        self.submit_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = super::form::run_submit(&job);
            let _ = tx.send(JobMessage::FeedbackSubmitted(result));
        });
    }

    pub(super) fn clear_feedback_submit(&mut self) {
        self.submit_in_progress = false;
    }
}
