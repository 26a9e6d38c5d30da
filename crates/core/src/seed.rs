//! Reproducible description of one rendered image.
//!
//! A [`Seed`] names the scene, the surface size, the palette and the PRNG
//! seed. Feeding the same `Seed` to the same binary yields the same pixels.

use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::palette::Palette;

/// Scenes are authored against a 600x600 surface.
pub const DEFAULT_SIZE: u32 = 600;

fn default_palette() -> String {
    Palette::default().name().to_string()
}

/// Reproducible description of a generated image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seed {
    pub scene: String,
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_palette")]
    pub palette: String,
    pub seed: u64,
}

impl Seed {
    /// Creates a seed for a 600x600 render with the default palette.
    pub fn new(scene: &str, seed: u64) -> Self {
        Self {
            scene: scene.to_string(),
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            palette: default_palette(),
            seed,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_palette(mut self, palette: &str) -> Self {
        self.palette = palette.to_string();
        self
    }

    /// Checks for non-zero dimensions and a known palette.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidDimensions);
        }
        Palette::from_name(&self.palette)?;
        Ok(())
    }

    /// Resolves the palette name.
    pub fn palette(&self) -> Result<Palette, SceneError> {
        Palette::from_name(&self.palette)
    }
}
