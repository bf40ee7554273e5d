//! Raster export of the canvas.
//!
//! This module provides:
//! - Rasterizing the current rendered output into a Cairo image surface
//! - Writing the surface as a PNG file
//! - Default file naming for hosts without a save dialog

pub mod file;
pub mod types;

pub use file::{default_export_path, with_png_extension};
pub use types::{ExportError, ExportOutcome};

use crate::input::InputState;
use std::path::{Path, PathBuf};

/// Renders the current canvas output into a new image surface.
///
/// The surface matches the canvas dimensions and contains exactly what the
/// host would see: background, committed shapes, the shape being drawn and the
/// marquee.
pub fn rasterize(state: &InputState) -> Result<cairo::ImageSurface, ExportError> {
    let (width, height) = (state.canvas_width, state.canvas_height);
    let invalid = || ExportError::InvalidDimensions { width, height };
    let w = i32::try_from(width).map_err(|_| invalid())?;
    let h = i32::try_from(height).map_err(|_| invalid())?;
    if w == 0 || h == 0 {
        return Err(invalid());
    }

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, w, h)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        state.render(&ctx);
    }
    surface.flush();
    Ok(surface)
}

/// Rasterizes the canvas and writes it to `path`, adding a `.png` suffix if needed.
///
/// Returns the path actually written.
pub fn export_png(state: &InputState, path: &Path) -> Result<PathBuf, ExportError> {
    let path = with_png_extension(path);
    let surface = rasterize(state)?;

    log::info!(
        "Exporting {}x{} canvas to {}",
        state.canvas_width,
        state.canvas_height,
        path.display()
    );
    file::write_png(&surface, &path)?;
    log::info!("Image saved successfully: {}", path.display());

    Ok(path)
}
