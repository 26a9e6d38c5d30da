//! PNG output for a rendered [`PixmapSurface`].
//!
//! Feature-gated behind `png` (default on) so the registry and raster surface
//! can be used without pulling in the `image` crate.

use image_gen_core::SceneError;
use std::path::Path;

use crate::raster::PixmapSurface;

/// Writes the surface as an 8-bit straight-alpha RGBA PNG.
///
/// Returns `SceneError::Io` if the buffer does not match the surface size or
/// the file cannot be written.
pub fn write_png(surface: &PixmapSurface, path: &Path) -> Result<(), SceneError> {
    let img = image::RgbaImage::from_raw(surface.width(), surface.height(), surface.to_rgba())
        .ok_or_else(|| SceneError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SceneError::Io(e.to_string()))
}
