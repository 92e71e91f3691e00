//! Application directory helpers anchored to a single `.gripe` folder.
//!
//! Config, logs and captured screenshots all live under one app root in the
//! OS config directory (e.g. `%APPDATA%` on Windows). A `GRIPE_CONFIG_HOME`
//! environment override supports tests and portable setups.

use std::{
    path::PathBuf,
    sync::{LazyLock, Mutex},
};

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application directory that lives under the OS config root.
pub const APP_DIR_NAME: &str = ".gripe";

static CONFIG_BASE_OVERRIDE: LazyLock<Mutex<Option<PathBuf>>> = LazyLock::new(|| Mutex::new(None));

/// Errors that can occur while resolving or preparing application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// No suitable base config directory could be resolved.
    #[error("No suitable base config directory available for application files")]
    NoBaseDir,
    /// Failed to create an application directory.
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Return the root `.gripe` directory, creating it if needed.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    ensure_dir(config_base_dir().ok_or(AppDirError::NoBaseDir)?.join(APP_DIR_NAME))
}

/// Return the logs directory inside the app root, creating it if needed.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    ensure_dir(app_root_dir()?.join("logs"))
}

/// Return the directory screenshot captures are written to, creating it if
/// needed.
pub fn screenshots_dir() -> Result<PathBuf, AppDirError> {
    ensure_dir(app_root_dir()?.join("screenshots"))
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, AppDirError> {
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn config_base_dir() -> Option<PathBuf> {
    if let Some(path) = CONFIG_BASE_OVERRIDE
        .lock()
        .ok()
        .and_then(|guard| guard.clone())
    {
        return Some(path);
    }
    if let Ok(path) = std::env::var("GRIPE_CONFIG_HOME") {
        return Some(PathBuf::from(path));
    }
    BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
fn set_config_base_override(path: PathBuf) {
    let mut guard = CONFIG_BASE_OVERRIDE
        .lock()
        .expect("config base override mutex poisoned");
    *guard = Some(path);
}

#[cfg(test)]
fn clear_config_base_override() {
    let mut guard = CONFIG_BASE_OVERRIDE
        .lock()
        .expect("config base override mutex poisoned");
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    static SERIAL: Mutex<()> = Mutex::new(());

    struct OverrideGuard(#[allow(dead_code)] std::sync::MutexGuard<'static, ()>);

    impl OverrideGuard {
        fn set(path: PathBuf) -> Self {
            let lock = SERIAL.lock().unwrap_or_else(|err| err.into_inner());
            set_config_base_override(path);
            Self(lock)
        }
    }

    impl Drop for OverrideGuard {
        fn drop(&mut self) {
            clear_config_base_override();
        }
    }

    #[test]
    fn uses_override_for_root_dir() {
        let base = tempdir().unwrap();
        let _guard = OverrideGuard::set(base.path().to_path_buf());
        let root = app_root_dir().unwrap();
        assert_eq!(root, base.path().join(APP_DIR_NAME));
        assert!(root.is_dir());
    }

    #[test]
    fn screenshots_dir_lives_under_root() {
        let base = tempdir().unwrap();
        let _guard = OverrideGuard::set(base.path().to_path_buf());
        let dir = screenshots_dir().unwrap();
        assert_eq!(dir, base.path().join(APP_DIR_NAME).join("screenshots"));
        assert!(dir.is_dir());
    }
}
