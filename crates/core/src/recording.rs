//! A [`Drawable`] that paints nothing and remembers every call.
//!
//! Used to inspect what a scene asks of its surface, both in tests and from
//! the CLI `record` subcommand, which prints the calls as JSON.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::SceneError;
use crate::surface::{CompositeMode, Drawable};

/// One captured surface call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCall {
    SetFillColor {
        color: Color,
    },
    BeginPath,
    ClosePath,
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Fill,
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Rotate {
        radians: f64,
    },
    ResetTransform,
    SetCompositeMode {
        mode: CompositeMode,
    },
}

/// Records draw calls in order.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls so far, oldest first.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    /// Radii of every recorded arc, in call order.
    pub fn arc_radii(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Arc { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect()
    }
}

impl Drawable for Recorder {
    fn set_fill_color(&mut self, color: &Color) {
        self.calls.push(DrawCall::SetFillColor { color: *color });
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn close_path(&mut self) {
        self.calls.push(DrawCall::ClosePath);
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), SceneError> {
        self.calls.push(DrawCall::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
        });
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::LineTo { x, y });
    }

    fn fill(&mut self) -> Result<(), SceneError> {
        self.calls.push(DrawCall::Fill);
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), SceneError> {
        self.calls.push(DrawCall::FillRect {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn rotate(&mut self, radians: f64) {
        self.calls.push(DrawCall::Rotate { radians });
    }

    fn reset_transform(&mut self) {
        self.calls.push(DrawCall::ResetTransform);
    }

    fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.calls.push(DrawCall::SetCompositeMode { mode });
    }
}
