//! Screen capture service backing the feedback form's attachment flow.
//!
//! Captures land as PNG files in the app's screenshots directory; the
//! returned path is the handle the rest of the app passes around. At submit
//! time the file is re-read and embedded into the request as a data URI.

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::RgbaImage;
use image::imageops::FilterType;
use thiserror::Error;
use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

use crate::app_dirs;

/// Literal prefix of the screenshot payload field. The space after the comma
/// is part of the wire format the backend accepts.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64, ";

const CAPTURE_FILE_PREFIX: &str = "screenshot";
const MIN_SCALE: f32 = 0.1;

/// Options for a capture request.
#[derive(Clone, Copy, Debug)]
pub struct CaptureOptions {
    /// Spatial downscale factor in `(0, 1]` applied before PNG encoding.
    pub scale: f32,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self { scale: 0.8 }
    }
}

/// Errors raised by the capture service.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// No monitor was available to capture.
    #[error("No monitor available for capture")]
    NoMonitor,
    /// The platform capture call failed.
    #[error("Screen capture failed: {0}")]
    Capture(String),
    /// The screenshots directory could not be prepared.
    #[error(transparent)]
    Dir(#[from] app_dirs::AppDirError),
    /// The capture file name timestamp could not be formatted.
    #[error("Failed to format capture file name: {0}")]
    FormatTime(#[from] time::error::Format),
    /// The capture could not be encoded to disk.
    #[error("Failed to write screenshot {path}: {source}")]
    Encode {
        /// Destination file.
        path: PathBuf,
        /// Underlying encoder error.
        source: image::ImageError,
    },
    /// A capture file could not be read back.
    #[error("Failed to read screenshot {path}: {source}")]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Capture the screen as a PNG file and return its path.
///
/// The primary monitor is captured (first enumerated as a fallback), scaled
/// down by `options.scale` and written under the screenshots directory with
/// a timestamped name.
pub fn capture_screen(options: CaptureOptions) -> Result<PathBuf, CaptureError> {
    let image = grab_monitor_image()?;
    let image = downscale(image, options.scale);
    let path = app_dirs::screenshots_dir()?.join(format_capture_file_name(now_local_or_utc())?);
    image
        .save_with_format(&path, image::ImageFormat::Png)
        .map_err(|source| CaptureError::Encode {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

/// Read a capture file and return it as a `data:image/png;base64, ` URI.
pub fn read_as_data_uri(path: &Path) -> Result<String, CaptureError> {
    let bytes = fs::read(path).map_err(|source| CaptureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(format!("{DATA_URI_PREFIX}{}", BASE64.encode(bytes)))
}

/// Best-effort removal of a capture file that is no longer referenced.
pub fn discard(path: &Path) {
    if let Err(err) = fs::remove_file(path) {
        tracing::debug!("Could not remove screenshot {}: {err}", path.display());
    }
}

fn grab_monitor_image() -> Result<RgbaImage, CaptureError> {
    let monitors = xcap::Monitor::all().map_err(|err| CaptureError::Capture(err.to_string()))?;
    let monitor = monitors
        .iter()
        .find(|monitor| monitor.is_primary().unwrap_or(false))
        .or_else(|| monitors.first())
        .ok_or(CaptureError::NoMonitor)?;
    monitor
        .capture_image()
        .map_err(|err| CaptureError::Capture(err.to_string()))
}

fn downscale(image: RgbaImage, scale: f32) -> RgbaImage {
    let scale = scale.clamp(MIN_SCALE, 1.0);
    if scale >= 1.0 {
        return image;
    }
    let (width, height) = image.dimensions();
    let scaled_width = ((width as f32 * scale).round() as u32).max(1);
    let scaled_height = ((height as f32 * scale).round() as u32).max(1);
    image::imageops::resize(&image, scaled_width, scaled_height, FilterType::Triangle)
}

fn format_capture_file_name(now: OffsetDateTime) -> Result<String, time::error::Format> {
    const NAME_FORMAT: &[FormatItem<'_>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    let stamp = now.format(NAME_FORMAT)?;
    Ok(format!("{CAPTURE_FILE_PREFIX}_{stamp}.png"))
}

fn now_local_or_utc() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn capture_filename_has_timestamp_and_extension() {
        let fixed = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let name = format_capture_file_name(fixed).unwrap();
        assert_eq!(name, "screenshot_2023-11-14_22-13-20.png");
    }

    #[test]
    fn data_uri_prefixes_base64_of_file_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shot.png");
        let bytes = [0x89u8, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];
        fs::write(&path, bytes).unwrap();

        let uri = read_as_data_uri(&path).unwrap();
        let encoded = uri.strip_prefix(DATA_URI_PREFIX).unwrap();
        assert_eq!(BASE64.decode(encoded).unwrap(), bytes);
    }

    #[test]
    fn reading_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = read_as_data_uri(&dir.path().join("gone.png")).unwrap_err();
        assert!(matches!(err, CaptureError::Read { .. }));
    }

    #[test]
    fn downscale_shrinks_dimensions() {
        let image = RgbaImage::from_pixel(10, 10, image::Rgba([255, 0, 0, 255]));
        let scaled = downscale(image, 0.5);
        assert_eq!(scaled.dimensions(), (5, 5));
    }

    #[test]
    fn downscale_keeps_full_scale_untouched() {
        let image = RgbaImage::from_pixel(7, 3, image::Rgba([0, 255, 0, 255]));
        let scaled = downscale(image, 1.0);
        assert_eq!(scaled.dimensions(), (7, 3));
    }

    #[test]
    fn discard_removes_file_and_tolerates_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shot.png");
        fs::write(&path, b"png").unwrap();
        discard(&path);
        assert!(!path.exists());
        discard(&path);
    }
}
