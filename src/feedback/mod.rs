//! Feedback domain: the closed kind set and the submission API client.

pub mod api;
mod types;

pub use api::{SubmitFeedbackError, SubmitFeedbackRequest, submit_feedback};
pub use types::FeedbackKind;
