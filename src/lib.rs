//! Library exports for reuse in integration tests.

/// Application directory helpers.
pub mod app_dirs;
/// Configuration loading.
pub mod config;
/// Widget UI modules.
pub mod egui_app;
/// Feedback kinds and the submission API client.
pub mod feedback;
/// Logging setup.
pub mod logging;
/// Screen capture service.
pub mod screenshot;

mod http_client;
