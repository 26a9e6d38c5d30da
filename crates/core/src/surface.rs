//! The drawing capability scenes paint through.
//!
//! [`Drawable`] is the slice of a canvas-style 2D context that primitives
//! need: fill color, a path built from arcs and lines, rectangles, a rotation
//! that can be reset, and a compositing mode. Implementations decide what
//! pixels (if any) result.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::SceneError;

/// How newly drawn pixels combine with what is already on the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositeMode {
    /// New pixels are painted over existing content.
    #[default]
    SourceOver,
    /// Existing content is kept only where it overlaps the new shape.
    DestinationIn,
    /// New pixels are painted behind existing content.
    DestinationOver,
}

impl CompositeMode {
    /// Canvas-style name, e.g. `"destination-in"`.
    pub fn as_str(self) -> &'static str {
        match self {
            CompositeMode::SourceOver => "source-over",
            CompositeMode::DestinationIn => "destination-in",
            CompositeMode::DestinationOver => "destination-over",
        }
    }
}

/// A mutable 2D surface with canvas-like drawing state.
///
/// The trait is object-safe; scenes take `&mut dyn Drawable`.
/// Angles are radians, coordinates are in surface units with y pointing down.
pub trait Drawable {
    /// Sets the color used by subsequent fills.
    fn set_fill_color(&mut self, color: &Color);

    /// Discards the current path and starts an empty one.
    fn begin_path(&mut self);

    /// Closes the current subpath with a straight edge to its start.
    fn close_path(&mut self);

    /// Adds a clockwise arc around `(x, y)` from `start_angle` to `end_angle`.
    ///
    /// A span of a full turn or more draws a complete circle.
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), SceneError>;

    /// Adds a straight edge to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Fills the current path with the current fill color.
    fn fill(&mut self) -> Result<(), SceneError>;

    /// Fills an axis-aligned rectangle (in the current transform).
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), SceneError>;

    /// Post-multiplies the current transform by a rotation about the origin.
    fn rotate(&mut self, radians: f64);

    /// Restores the identity transform.
    fn reset_transform(&mut self);

    /// Sets the compositing mode for subsequent fills.
    fn set_composite_mode(&mut self, mode: CompositeMode);
}

/// Rotates the surface, runs `draw`, then resets the transform to identity.
///
/// The reset happens whether or not `draw` succeeds; the first error is
/// returned after the reset.
pub fn with_rotation<D, F>(surface: &mut D, radians: f64, draw: F) -> Result<(), SceneError>
where
    D: Drawable + ?Sized,
    F: FnOnce(&mut D) -> Result<(), SceneError>,
{
    surface.rotate(radians);
    let result = draw(surface);
    surface.reset_transform();
    result
}
