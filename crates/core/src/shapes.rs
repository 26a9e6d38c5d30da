//! Primitive shapes: wedge-capable circles, rectangles, and concentric targets.
//!
//! Each primitive resolves its fill through [`Ink::resolve`]: an explicit
//! color is used as-is, otherwise a random palette color is drawn at the
//! shape's alpha.

use std::f64::consts::TAU;

use glam::DVec2;
use tracing::warn;

use crate::color::Color;
use crate::error::SceneError;
use crate::ink::Ink;
use crate::prng::RandomSource;
use crate::surface::Drawable;

/// A filled circle or pie slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleSpec {
    pub center: DVec2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: Option<Color>,
    pub alpha: Option<f64>,
}

impl CircleSpec {
    /// A full disc with a random color.
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: DVec2::new(x, y),
            radius,
            start_angle: 0.0,
            end_angle: TAU,
            color: None,
            alpha: None,
        }
    }

    /// Restricts the circle to the wedge from `start` to `end` (radians).
    pub fn with_angles(mut self, start: f64, end: f64) -> Self {
        self.start_angle = start;
        self.end_angle = end;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }
}

/// A filled axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectSpec {
    pub origin: DVec2,
    pub width: f64,
    pub height: f64,
    pub color: Option<Color>,
    pub alpha: Option<f64>,
}

impl RectSpec {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(x, y),
            width,
            height,
            color: None,
            alpha: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Like [`with_color`](Self::with_color), but `None` keeps the random fill.
    pub fn with_fill(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }
}

/// Concentric rings shrinking linearly from `radius` to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSpec {
    pub center: DVec2,
    pub radius: f64,
    pub circle_count: u32,
    pub alpha: Option<f64>,
}

impl TargetSpec {
    pub fn new(x: f64, y: f64, radius: f64, circle_count: u32) -> Self {
        Self {
            center: DVec2::new(x, y),
            radius,
            circle_count,
            alpha: None,
        }
    }

    /// Applies the same alpha to every ring.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Radius lost from one ring to the next.
    ///
    /// Infinite when `circle_count` is 0.
    pub fn ring_step(&self) -> f64 {
        self.radius / f64::from(self.circle_count)
    }
}

/// Draws a filled pie slice: the arc plus a straight edge back to the center.
///
/// With the default angles the slice is a full disc.
pub fn circle<D, R>(
    surface: &mut D,
    ink: &mut Ink<R>,
    spec: &CircleSpec,
) -> Result<(), SceneError>
where
    D: Drawable + ?Sized,
    R: RandomSource,
{
    let fill = ink.resolve(spec.color, spec.alpha)?;
    let DVec2 { x, y } = spec.center;
    surface.set_fill_color(&fill);
    surface.begin_path();
    surface.arc(x, y, spec.radius, spec.start_angle, spec.end_angle)?;
    surface.line_to(x, y);
    surface.close_path();
    surface.fill()
}

/// Draws a filled rectangle.
pub fn rectangle<D, R>(
    surface: &mut D,
    ink: &mut Ink<R>,
    spec: &RectSpec,
) -> Result<(), SceneError>
where
    D: Drawable + ?Sized,
    R: RandomSource,
{
    let fill = ink.resolve(spec.color, spec.alpha)?;
    surface.set_fill_color(&fill);
    surface.fill_rect(spec.origin.x, spec.origin.y, spec.width, spec.height)
}

/// Draws `circle_count + 1` concentric full circles, outermost first.
///
/// Ring `i` has radius `radius - i * radius / circle_count`, so the last ring
/// lands on zero. Every ring picks its own random color at `spec.alpha`.
/// A `circle_count` of 0 is not rejected: the step is infinite and the single
/// ring drawn gets a NaN radius, which surfaces treat as degenerate.
pub fn target<D, R>(
    surface: &mut D,
    ink: &mut Ink<R>,
    spec: &TargetSpec,
) -> Result<(), SceneError>
where
    D: Drawable + ?Sized,
    R: RandomSource,
{
    if spec.circle_count == 0 {
        warn!(
            x = spec.center.x,
            y = spec.center.y,
            radius = spec.radius,
            "target with zero circle_count draws a degenerate ring"
        );
    }
    let step = spec.ring_step();
    for i in 0..=spec.circle_count {
        let ring = CircleSpec {
            alpha: spec.alpha,
            ..CircleSpec::new(
                spec.center.x,
                spec.center.y,
                spec.radius - f64::from(i) * step,
            )
        };
        circle(surface, ink, &ring)?;
    }
    Ok(())
}
