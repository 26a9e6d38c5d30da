//! A [`Drawable`] backed by a `tiny-skia` pixmap.
//!
//! Path geometry is kept in `f64` and mapped through the current transform as
//! points are added, the way a canvas context does; `tiny-skia` is only asked
//! to fill finished device-space paths. Arcs are approximated with cubic
//! Béziers spanning at most a quarter turn.

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::{DAffine2, DVec2};
use image_gen_core::{Color, CompositeMode, Drawable, SceneError};
use tiny_skia::{BlendMode, FillRule, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Transform};
use tracing::trace;

/// One path command, already in device space.
#[derive(Debug, Clone, Copy)]
enum Segment {
    MoveTo(DVec2),
    LineTo(DVec2),
    CubicTo(DVec2, DVec2, DVec2),
    Close,
}

/// Raster surface with canvas-style drawing state.
///
/// Starts fully transparent, with a black fill, the identity transform and
/// `source-over` compositing.
pub struct PixmapSurface {
    pixmap: Pixmap,
    fill: tiny_skia::Color,
    transform: DAffine2,
    mode: CompositeMode,
    segments: Vec<Segment>,
    cursor: Option<DVec2>,
    subpath_start: Option<DVec2>,
}

impl PixmapSurface {
    /// Creates a transparent surface.
    ///
    /// Returns `SceneError::InvalidDimensions` if either side is zero, or
    /// `SceneError::Surface` if the pixmap cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidDimensions);
        }
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            SceneError::Surface(format!("failed to allocate {width}x{height} pixmap"))
        })?;
        Ok(Self {
            pixmap,
            fill: tiny_skia::Color::BLACK,
            transform: DAffine2::IDENTITY,
            mode: CompositeMode::SourceOver,
            segments: Vec::new(),
            cursor: None,
            subpath_start: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Read-only access to the premultiplied pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn composite_mode(&self) -> CompositeMode {
        self.mode
    }

    /// Straight-alpha RGBA8 of the pixel at `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Converts the whole surface to straight-alpha RGBA8, row-major.
    ///
    /// The buffer length is `width * height * 4`.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    fn device(&self, p: DVec2) -> DVec2 {
        self.transform.transform_point2(p)
    }

    /// Extends the current subpath to `p`, or starts one there.
    fn connect(&mut self, p: DVec2) {
        match self.cursor {
            Some(_) => self.segments.push(Segment::LineTo(p)),
            None => {
                self.segments.push(Segment::MoveTo(p));
                self.subpath_start = Some(p);
            }
        }
        self.cursor = Some(p);
    }

    fn build_path(&self) -> Option<Path> {
        let mut pb = PathBuilder::new();
        for seg in &self.segments {
            match *seg {
                Segment::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
                Segment::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
                Segment::CubicTo(c1, c2, p) => pb.cubic_to(
                    c1.x as f32,
                    c1.y as f32,
                    c2.x as f32,
                    c2.y as f32,
                    p.x as f32,
                    p.y as f32,
                ),
                Segment::Close => pb.close(),
            }
        }
        pb.finish()
    }

    /// Fills a device-space path with the current color and composite mode.
    fn paint_path(&mut self, path: &Path) -> Result<(), SceneError> {
        let mut paint = Paint::default();
        paint.set_color(self.fill);
        paint.anti_alias = true;

        match self.mode {
            // Unbounded: everything outside the shape must be cleared too, so
            // the shape is rendered to a layer and the whole layer composited.
            CompositeMode::DestinationIn => {
                let mut layer = Pixmap::new(self.pixmap.width(), self.pixmap.height())
                    .ok_or_else(|| SceneError::Surface("failed to allocate mask layer".into()))?;
                layer.fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
                let layer_paint = PixmapPaint {
                    blend_mode: BlendMode::DestinationIn,
                    ..PixmapPaint::default()
                };
                self.pixmap.draw_pixmap(
                    0,
                    0,
                    layer.as_ref(),
                    &layer_paint,
                    Transform::identity(),
                    None,
                );
            }
            CompositeMode::SourceOver | CompositeMode::DestinationOver => {
                paint.blend_mode = blend_mode(self.mode);
                self.pixmap
                    .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
            }
        }
        Ok(())
    }
}

impl Drawable for PixmapSurface {
    /// Alpha is clamped to `[0, 1]`. A non-finite alpha makes the color
    /// invalid, and the previous fill color stays in effect.
    fn set_fill_color(&mut self, color: &Color) {
        let alpha = color.opacity();
        if !alpha.is_finite() {
            trace!(%color, "ignoring fill color with non-finite alpha");
            return;
        }
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.fill = tiny_skia::Color::from_rgba8(color.r, color.g, color.b, a);
    }

    fn begin_path(&mut self) {
        self.segments.clear();
        self.cursor = None;
        self.subpath_start = None;
    }

    fn close_path(&mut self) {
        if self.cursor.is_some() {
            self.segments.push(Segment::Close);
            self.cursor = self.subpath_start;
        }
    }

    /// Non-finite arguments make the call a no-op; a negative radius is an
    /// error.
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), SceneError> {
        if ![x, y, radius, start_angle, end_angle]
            .iter()
            .all(|v| v.is_finite())
        {
            trace!(x, y, radius, "skipping arc with non-finite arguments");
            return Ok(());
        }
        if radius < 0.0 {
            return Err(SceneError::Surface(format!(
                "arc radius must be non-negative, got {radius}"
            )));
        }

        let center = DVec2::new(x, y);
        let on_circle = |angle: f64| center + radius * DVec2::from_angle(angle);
        let sweep = clockwise_sweep(start_angle, end_angle);

        let start = self.device(on_circle(start_angle));
        self.connect(start);

        let pieces = (sweep / FRAC_PI_2).ceil() as usize;
        if pieces == 0 {
            return Ok(());
        }
        let step = sweep / pieces as f64;
        // Control-point distance for a circular cubic spanning `step`.
        let handle = radius * 4.0 / 3.0 * (step / 4.0).tan();
        for i in 0..pieces {
            let a0 = start_angle + step * i as f64;
            let a1 = a0 + step;
            let p0 = on_circle(a0);
            let p3 = on_circle(a1);
            let c1 = p0 + handle * DVec2::from_angle(a0).perp();
            let c2 = p3 - handle * DVec2::from_angle(a1).perp();
            let seg = Segment::CubicTo(self.device(c1), self.device(c2), self.device(p3));
            self.segments.push(seg);
        }
        self.cursor = Some(self.device(on_circle(start_angle + sweep)));
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            let p = self.device(DVec2::new(x, y));
            self.connect(p);
        }
    }

    fn fill(&mut self) -> Result<(), SceneError> {
        match self.build_path() {
            Some(path) => self.paint_path(&path),
            None => Ok(()),
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), SceneError> {
        let finite = [x, y, width, height].iter().all(|v| v.is_finite());
        if !finite || width == 0.0 || height == 0.0 {
            return Ok(());
        }
        let corners = [
            DVec2::new(x, y),
            DVec2::new(x + width, y),
            DVec2::new(x + width, y + height),
            DVec2::new(x, y + height),
        ]
        .map(|p| self.device(p));

        let mut pb = PathBuilder::new();
        pb.move_to(corners[0].x as f32, corners[0].y as f32);
        for p in &corners[1..] {
            pb.line_to(p.x as f32, p.y as f32);
        }
        pb.close();
        match pb.finish() {
            Some(path) => self.paint_path(&path),
            None => Ok(()),
        }
    }

    fn rotate(&mut self, radians: f64) {
        if radians.is_finite() {
            self.transform = self.transform * DAffine2::from_angle(radians);
        }
    }

    fn reset_transform(&mut self) {
        self.transform = DAffine2::IDENTITY;
    }

    fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.mode = mode;
    }
}

/// Clockwise sweep from `start` to `end`: a full turn when the span reaches
/// `TAU`, otherwise the span reduced into `[0, TAU)`.
fn clockwise_sweep(start: f64, end: f64) -> f64 {
    let span = end - start;
    if span >= TAU {
        TAU
    } else {
        span.rem_euclid(TAU)
    }
}

fn blend_mode(mode: CompositeMode) -> BlendMode {
    match mode {
        CompositeMode::SourceOver => BlendMode::SourceOver,
        CompositeMode::DestinationIn => BlendMode::DestinationIn,
        CompositeMode::DestinationOver => BlendMode::DestinationOver,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const RED: Color = Color::rgb(230, 50, 40);
    const YELLOW: Color = Color::rgb(236, 167, 44);

    fn surface(size: u32) -> PixmapSurface {
        PixmapSurface::new(size, size).unwrap()
    }

    fn disc(s: &mut PixmapSurface, x: f64, y: f64, r: f64, start: f64, end: f64) {
        s.begin_path();
        s.arc(x, y, r, start, end).unwrap();
        s.line_to(x, y);
        s.close_path();
        s.fill().unwrap();
    }

    fn covered(s: &PixmapSurface) -> usize {
        s.to_rgba().chunks(4).filter(|p| p[3] > 127).count()
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(
            PixmapSurface::new(0, 10),
            Err(SceneError::InvalidDimensions)
        ));
        assert!(matches!(
            PixmapSurface::new(10, 0),
            Err(SceneError::InvalidDimensions)
        ));
    }

    #[test]
    fn new_reports_oversized_surface_as_allocation_failure() {
        match PixmapSurface::new(u32::MAX, u32::MAX) {
            Err(SceneError::Surface(msg)) => assert!(msg.contains("failed to allocate")),
            other => panic!("expected allocation failure, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn new_surface_is_transparent() {
        let s = surface(8);
        assert!(s.to_rgba().iter().all(|&b| b == 0));
        assert_eq!(s.to_rgba().len(), 8 * 8 * 4);
        assert_eq!(s.composite_mode(), CompositeMode::SourceOver);
    }

    #[test]
    fn fill_rect_paints_opaque_color() {
        let mut s = surface(10);
        s.set_fill_color(&RED);
        s.fill_rect(0.0, 0.0, 10.0, 10.0).unwrap();
        assert_eq!(s.pixel(5, 5), Some([230, 50, 40, 255]));
    }

    #[test]
    fn translucent_fill_keeps_alpha() {
        let mut s = surface(10);
        s.set_fill_color(&Color::rgba(230, 50, 40, 0.5));
        s.fill_rect(0.0, 0.0, 10.0, 10.0).unwrap();
        let [_, _, _, a] = s.pixel(5, 5).unwrap();
        assert!((127..=129).contains(&a), "alpha {a}");
    }

    #[test]
    fn alpha_above_one_is_clamped() {
        let mut s = surface(10);
        s.set_fill_color(&Color::rgba(230, 50, 40, 3.0));
        s.fill_rect(0.0, 0.0, 10.0, 10.0).unwrap();
        assert_eq!(s.pixel(5, 5), Some([230, 50, 40, 255]));
    }

    #[test]
    fn non_finite_alpha_keeps_previous_fill() {
        let mut s = surface(10);
        s.set_fill_color(&YELLOW);
        s.set_fill_color(&Color::rgba(0, 0, 0, f64::NAN));
        s.fill_rect(0.0, 0.0, 10.0, 10.0).unwrap();
        assert_eq!(s.pixel(5, 5), Some([236, 167, 44, 255]));
    }

    #[test]
    fn full_disc_covers_pi_r_squared() {
        let mut s = surface(200);
        s.set_fill_color(&RED);
        disc(&mut s, 100.0, 100.0, 50.0, 0.0, TAU);
        let expected = PI * 50.0 * 50.0;
        let got = covered(&s) as f64;
        assert!(
            (got - expected).abs() / expected < 0.02,
            "covered {got} pixels, expected ~{expected}"
        );
    }

    #[test]
    fn quarter_wedge_fills_only_its_quadrant() {
        // From straight up, clockwise to the right: the upper-right quadrant.
        let mut s = surface(100);
        s.set_fill_color(&RED);
        disc(&mut s, 50.0, 50.0, 40.0, 1.5 * PI, 0.0);
        assert_eq!(s.pixel(70, 30).unwrap()[3], 255);
        assert_eq!(s.pixel(30, 30).unwrap()[3], 0);
        assert_eq!(s.pixel(30, 70).unwrap()[3], 0);
        assert_eq!(s.pixel(70, 70).unwrap()[3], 0);
        let expected = PI * 40.0 * 40.0 / 4.0;
        let got = covered(&s) as f64;
        assert!((got - expected).abs() / expected < 0.05, "covered {got}");
    }

    #[test]
    fn lower_left_wedge_from_half_pi_to_pi() {
        let mut s = surface(100);
        s.set_fill_color(&RED);
        disc(&mut s, 50.0, 50.0, 40.0, 0.5 * PI, PI);
        assert_eq!(s.pixel(30, 70).unwrap()[3], 255);
        assert_eq!(s.pixel(70, 30).unwrap()[3], 0);
    }

    #[test]
    fn nan_radius_draws_nothing() {
        let mut s = surface(50);
        s.set_fill_color(&RED);
        disc(&mut s, 25.0, 25.0, f64::NAN, 0.0, TAU);
        assert_eq!(covered(&s), 0);
    }

    #[test]
    fn negative_radius_is_rejected() {
        let mut s = surface(50);
        s.begin_path();
        assert!(matches!(
            s.arc(25.0, 25.0, -1.0, 0.0, TAU),
            Err(SceneError::Surface(_))
        ));
    }

    #[test]
    fn destination_in_clears_outside_the_shape() {
        let mut s = surface(100);
        s.set_fill_color(&RED);
        s.fill_rect(0.0, 0.0, 100.0, 100.0).unwrap();
        s.set_composite_mode(CompositeMode::DestinationIn);
        s.set_fill_color(&YELLOW);
        disc(&mut s, 50.0, 50.0, 30.0, 0.0, TAU);
        // Inside keeps the destination color, not the mask color.
        assert_eq!(s.pixel(50, 50), Some([230, 50, 40, 255]));
        assert_eq!(s.pixel(2, 2).unwrap()[3], 0);
        assert_eq!(s.pixel(97, 97).unwrap()[3], 0);
    }

    #[test]
    fn destination_over_paints_behind() {
        let mut s = surface(100);
        s.set_fill_color(&RED);
        s.fill_rect(0.0, 0.0, 50.0, 100.0).unwrap();
        s.set_composite_mode(CompositeMode::DestinationOver);
        s.set_fill_color(&YELLOW);
        s.fill_rect(0.0, 0.0, 100.0, 100.0).unwrap();
        assert_eq!(s.pixel(25, 50), Some([230, 50, 40, 255]));
        assert_eq!(s.pixel(75, 50), Some([236, 167, 44, 255]));
    }

    #[test]
    fn rotate_applies_about_origin_until_reset() {
        let mut s = surface(40);
        s.set_fill_color(&RED);
        // A quarter turn maps (x, y) to (-y, x).
        s.rotate(FRAC_PI_2);
        s.fill_rect(10.0, -30.0, 10.0, 10.0).unwrap();
        assert_eq!(s.pixel(25, 15).unwrap()[3], 255);
        assert_eq!(s.pixel(15, 25).unwrap()[3], 0);

        s.reset_transform();
        s.fill_rect(10.0, 20.0, 10.0, 10.0).unwrap();
        assert_eq!(s.pixel(15, 25).unwrap()[3], 255);
    }

    #[test]
    fn rotations_accumulate() {
        let mut s = surface(40);
        s.set_fill_color(&RED);
        s.rotate(FRAC_PI_2 / 2.0);
        s.rotate(FRAC_PI_2 / 2.0);
        s.fill_rect(10.0, -30.0, 10.0, 10.0).unwrap();
        assert_eq!(s.pixel(25, 15).unwrap()[3], 255);
    }

    #[test]
    fn zero_and_non_finite_rects_are_ignored() {
        let mut s = surface(10);
        s.set_fill_color(&RED);
        s.fill_rect(0.0, 0.0, 0.0, 10.0).unwrap();
        s.fill_rect(0.0, 0.0, f64::INFINITY, 10.0).unwrap();
        assert_eq!(covered(&s), 0);
    }

    #[test]
    fn negative_rect_extent_is_normalized() {
        let mut s = surface(10);
        s.set_fill_color(&RED);
        s.fill_rect(10.0, 10.0, -10.0, -10.0).unwrap();
        assert_eq!(s.pixel(5, 5), Some([230, 50, 40, 255]));
    }

    #[test]
    fn clockwise_sweep_matches_canvas_rules() {
        assert_eq!(clockwise_sweep(0.0, TAU), TAU);
        assert_eq!(clockwise_sweep(0.0, 3.0 * TAU), TAU);
        assert!((clockwise_sweep(1.5 * PI, 0.0) - 0.5 * PI).abs() < 1e-12);
        assert!((clockwise_sweep(0.5 * PI, PI) - 0.5 * PI).abs() < 1e-12);
        assert_eq!(clockwise_sweep(1.0, 1.0), 0.0);
    }
}
