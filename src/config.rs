//! Application configuration persisted as TOML in the app root directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;
use crate::feedback;

/// File name of the configuration inside the app root directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings controlling screenshot capture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureSettings {
    /// Downscale factor in `(0, 1]` applied to captures before encoding.
    #[serde(default = "default_capture_scale")]
    pub scale: f32,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            scale: default_capture_scale(),
        }
    }
}

/// Application settings loaded from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the feedback API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Screenshot capture settings.
    #[serde(default)]
    pub capture: CaptureSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            capture: CaptureSettings::default(),
        }
    }
}

fn default_api_base_url() -> String {
    feedback::api::DEFAULT_BASE_URL.to_string()
}

fn default_capture_scale() -> f32 {
    0.8
}

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The app root could not be resolved or created.
    #[error(transparent)]
    Dir(#[from] app_dirs::AppDirError),
    /// The config file exists but could not be read.
    #[error("Failed to read config {path}: {source}")]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The config file is not valid TOML for this schema.
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Underlying parse error.
        source: toml::de::Error,
    },
}

/// Load the configuration, falling back to defaults when no file exists.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME);
    load_from_path(&path)
}

fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = load_from_path(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn parses_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "api_base_url = \"https://feedback.example.com\"\n\n[capture]\nscale = 0.5\n",
        )
        .unwrap();
        let config = load_from_path(&path).unwrap();
        assert_eq!(config.api_base_url, "https://feedback.example.com");
        assert_eq!(config.capture.scale, 0.5);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "api_base_url = \"http://127.0.0.1:8080\"\n").unwrap();
        let config = load_from_path(&path).unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.capture, CaptureSettings::default());
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "api_base_url = [not toml").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
