//! File naming and writing for exported images.

use super::types::ExportError;
use crate::config::ExportConfig;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension appended to every exported file.
pub const PNG_EXTENSION: &str = "png";

/// Ensures the path ends in `.png`, appending the suffix when it is missing.
///
/// An existing `.png` suffix (any case) is kept as-is; any other extension is
/// treated as part of the name, so `sketch.v2` becomes `sketch.v2.png`.
pub fn with_png_extension(path: &Path) -> PathBuf {
    let has_png = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PNG_EXTENSION));
    if has_png {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".");
        name.push(PNG_EXTENSION);
        PathBuf::from(name)
    }
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
///
/// # Returns
/// Generated filename with the `.png` extension
pub fn generate_filename(template: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, PNG_EXTENSION)
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Builds a timestamped path inside the configured export directory.
///
/// Used by hosts that have no save dialog. The directory is created on demand.
pub fn default_export_path(config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let directory = match config.directory.as_deref() {
        Some(dir) => expand_tilde(dir),
        None => dirs::picture_dir()
            .ok_or(ExportError::NoDirectory)?
            .join("Sketchpad"),
    };
    let directory = ensure_directory_exists(&directory)?;
    Ok(directory.join(generate_filename(&config.filename_template)))
}

/// Writes a rendered surface to `path` as PNG.
///
/// The image is encoded in memory first, so a failed encode never touches
/// `path`. The parent directory must already exist; a missing directory is
/// reported as an I/O error rather than created.
pub fn write_png(surface: &cairo::ImageSurface, path: &Path) -> Result<u64, ExportError> {
    let mut encoded = Vec::new();
    surface.write_to_png(&mut encoded)?;
    fs::write(path, &encoded)?;

    let written_size = encoded.len() as u64;
    log::debug!("File written: {} bytes", written_size);
    Ok(written_size)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_filename() {
        let filename = generate_filename("sketch_%Y%m%d");
        assert!(filename.starts_with("sketch_"));
        assert!(filename.ends_with(".png"));
        assert!(filename.contains("20"));
    }

    #[test]
    fn test_with_png_extension() {
        assert_eq!(
            with_png_extension(Path::new("/tmp/drawing")),
            PathBuf::from("/tmp/drawing.png")
        );
        assert_eq!(
            with_png_extension(Path::new("/tmp/drawing.png")),
            PathBuf::from("/tmp/drawing.png")
        );
        assert_eq!(
            with_png_extension(Path::new("/tmp/drawing.PNG")),
            PathBuf::from("/tmp/drawing.PNG")
        );
        assert_eq!(
            with_png_extension(Path::new("/tmp/drawing.v2")),
            PathBuf::from("/tmp/drawing.v2.png")
        );
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_default_export_path_uses_configured_directory() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("exports");
        let config = ExportConfig {
            directory: Some(target.to_string_lossy().into_owned()),
            filename_template: "fixed".to_string(),
        };

        let path = default_export_path(&config).unwrap();
        assert!(target.is_dir());
        assert_eq!(path.file_name().unwrap(), "fixed.png");
    }

    #[test]
    fn test_write_png_reports_size() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("small.png");
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 4, 4).unwrap();

        let size = write_png(&surface, &path).unwrap();
        assert_eq!(size, fs::metadata(&path).unwrap().len());
    }

    #[test]
    fn test_failed_encode_leaves_no_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("broken.png");
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 4, 4).unwrap();
        surface.finish();

        assert!(write_png(&surface, &path).is_err());
        assert!(!path.exists());
    }
}
