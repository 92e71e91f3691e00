//! HTTP client for the feedback submission endpoint.

use serde::Serialize;

use super::FeedbackKind;
use crate::http_client;

/// Default endpoint feedback is submitted to, overridable via `config.toml`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// Body of the submission POST.
#[derive(Clone, Debug, Serialize)]
pub struct SubmitFeedbackRequest {
    /// Category of the feedback.
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    /// Screenshot as a `data:image/png;base64, ` URI; omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    /// Free-form comment, possibly empty.
    pub comment: String,
}

/// Errors raised while submitting feedback.
#[derive(Debug, thiserror::Error)]
pub enum SubmitFeedbackError {
    /// The server rejected the payload.
    #[error("Invalid input: {0}")]
    BadRequest(String),
    /// The server asked us to slow down.
    #[error("Rate limited; try again later")]
    RateLimited,
    /// The server failed.
    #[error("Server error: {0}")]
    ServerError(String),
    /// The request never completed.
    #[error("HTTP error: {0}")]
    Transport(String),
}

/// POST the feedback to `{base_url}/feedbacks`.
///
/// Any 2xx status is success; the response body is not interpreted further.
pub fn submit_feedback(
    base_url: &str,
    request: &SubmitFeedbackRequest,
) -> Result<(), SubmitFeedbackError> {
    let url = format!("{}/feedbacks", base_url.trim_end_matches('/'));
    let req = http_client::agent()
        .post(&url)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");

    match req.send_json(request) {
        Ok(_response) => Ok(()),
        Err(ureq::Error::Status(code, response)) => {
            let body = read_body_limited(response).unwrap_or_else(|err| err);
            Err(map_status_error(code, body))
        }
        Err(ureq::Error::Transport(err)) => Err(SubmitFeedbackError::Transport(err.to_string())),
    }
}

fn map_status_error(code: u16, body: String) -> SubmitFeedbackError {
    match code {
        400 => SubmitFeedbackError::BadRequest(body),
        429 => SubmitFeedbackError::RateLimited,
        500..=599 => SubmitFeedbackError::ServerError(body),
        _ => SubmitFeedbackError::Transport(format!("HTTP {code}: {body}")),
    }
}

fn read_body_limited(response: ureq::Response) -> Result<String, String> {
    let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)
        .map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}
