//! A palette paired with the random source that picks from it.

use crate::color::Color;
use crate::error::SceneError;
use crate::palette::{NamedColor, Palette};
use crate::prng::{rand_range, RandomSource, Xorshift64};

/// Everything a primitive needs to choose colors and sizes.
///
/// Each scene invocation owns its `Ink`, so two scenes never share a random
/// stream.
#[derive(Debug, Clone)]
pub struct Ink<R = Xorshift64> {
    palette: Palette,
    rng: R,
}

impl Ink<Xorshift64> {
    /// Creates an ink over `palette` with a seeded [`Xorshift64`].
    pub fn seeded(palette: Palette, seed: u64) -> Self {
        Self::new(palette, Xorshift64::new(seed))
    }
}

impl<R: RandomSource> Ink<R> {
    pub fn new(palette: Palette, rng: R) -> Self {
        Self { palette, rng }
    }

    /// Opaque color for a named palette slot.
    pub fn named(&self, color: NamedColor) -> Color {
        self.palette.named(color)
    }

    /// Uniform integer in `[min, max]`.
    pub fn range(&mut self, min: i64, max: i64) -> Result<i64, SceneError> {
        rand_range(&mut self.rng, min, max)
    }

    /// Random palette color at `alpha`, defaulting to fully opaque.
    pub fn random_color(&mut self, alpha: Option<f64>) -> Result<Color, SceneError> {
        self.palette.random_color(&mut self.rng, alpha.unwrap_or(1.0))
    }

    /// Fill rule shared by every primitive: an explicit color wins, otherwise
    /// a random one is drawn at `alpha`.
    pub fn resolve(
        &mut self,
        color: Option<Color>,
        alpha: Option<f64>,
    ) -> Result<Color, SceneError> {
        match color {
            Some(color) => Ok(color),
            None => self.random_color(alpha),
        }
    }
}
