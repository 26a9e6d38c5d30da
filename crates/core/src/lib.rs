#![deny(unsafe_code)]
//! Core types for the image-gen scene generator.
//!
//! Provides the `Drawable` surface capability and its `Recorder` test double,
//! the circle/rectangle/target primitives, `Color` and the eight-color
//! `Palette`, the seedable `Xorshift64` PRNG with `rand_range`, `Ink` (palette
//! plus random source), and the reproducible `Seed`.

pub mod color;
pub mod error;
pub mod ink;
pub mod palette;
pub mod prng;
pub mod recording;
pub mod seed;
pub mod shapes;
pub mod surface;

pub use color::Color;
pub use error::SceneError;
pub use ink::Ink;
pub use palette::{NamedColor, Palette};
pub use prng::{rand_range, RandomSource, Xorshift64};
pub use recording::{DrawCall, Recorder};
pub use seed::Seed;
pub use shapes::{circle, rectangle, target, CircleSpec, RectSpec, TargetSpec};
pub use surface::{with_rotation, CompositeMode, Drawable};
