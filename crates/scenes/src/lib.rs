#![deny(unsafe_code)]
//! Scene registry: maps scene names to compositions and renders them.
//!
//! Each scene is a fixed recipe of primitive calls from `image-gen-core`.
//! [`render`] paints one onto a [`PixmapSurface`]; [`record`] captures its
//! draw calls instead. Both the CLI and tests go through [`SceneKind`] so the
//! name table lives in one place.

mod async_iterators;
mod clean_promise_chains;
mod electron_node_docker;
mod mongo_export;
mod server_sent_events;
mod unit_testing_with_node;

pub mod raster;

#[cfg(feature = "png")]
pub mod snapshot;

use std::f64::consts::PI;

use image_gen_core::{DrawCall, Drawable, Ink, Recorder, SceneError, Seed};
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

pub use async_iterators::async_iterators;
pub use clean_promise_chains::clean_promise_chains;
pub use electron_node_docker::electron_node_docker;
pub use mongo_export::mongo_export;
pub use raster::PixmapSurface;
pub use server_sent_events::server_sent_events;
pub use unit_testing_with_node::unit_testing_with_node;

/// Horizontal extent that rows of bars are spread across.
pub(crate) const BAR_SPAN: f64 = 590.0;

/// Converts degrees to radians as `d * PI / 180`.
pub(crate) fn degrees(d: f64) -> f64 {
    d * PI / 180.0
}

/// Signature shared by every scene.
pub type SceneFn = fn(&mut dyn Drawable, &mut Ink) -> Result<(), SceneError>;

/// All available scene names, in [`SceneKind::ALL`] order.
const SCENE_NAMES: &[&str] = &[
    "clean-promise-chains",
    "electron-node-docker",
    "mongo-export",
    "server-sent-events",
    "unit-testing-with-node",
    "async-iterators",
];

/// Enumeration of all registered scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneKind {
    CleanPromiseChains,
    ElectronNodeDocker,
    MongoExport,
    ServerSentEvents,
    UnitTestingWithNode,
    AsyncIterators,
}

impl SceneKind {
    pub const ALL: [SceneKind; 6] = [
        SceneKind::CleanPromiseChains,
        SceneKind::ElectronNodeDocker,
        SceneKind::MongoExport,
        SceneKind::ServerSentEvents,
        SceneKind::UnitTestingWithNode,
        SceneKind::AsyncIterators,
    ];

    /// Looks up a scene by its kebab-case name.
    ///
    /// Returns `SceneError::UnknownScene` if the name is not registered.
    pub fn from_name(name: &str) -> Result<Self, SceneError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| SceneError::UnknownScene(name.to_string()))
    }

    /// Returns a slice of all registered scene names.
    pub fn list_scenes() -> &'static [&'static str] {
        SCENE_NAMES
    }

    pub fn name(self) -> &'static str {
        SCENE_NAMES[self as usize]
    }

    /// The composition function behind this scene.
    pub fn scene_fn(self) -> SceneFn {
        match self {
            SceneKind::CleanPromiseChains => clean_promise_chains,
            SceneKind::ElectronNodeDocker => electron_node_docker,
            SceneKind::MongoExport => mongo_export,
            SceneKind::ServerSentEvents => server_sent_events,
            SceneKind::UnitTestingWithNode => unit_testing_with_node,
            SceneKind::AsyncIterators => async_iterators,
        }
    }

    /// Draws this scene onto `surface`, taking colors and sizes from `ink`.
    pub fn draw(self, surface: &mut dyn Drawable, ink: &mut Ink) -> Result<(), SceneError> {
        debug!(scene = self.name(), "drawing scene");
        (self.scene_fn())(surface, ink)
    }
}

/// Renders the scene described by `seed` onto a fresh raster surface.
pub fn render(seed: &Seed) -> Result<PixmapSurface, SceneError> {
    let _span = info_span!("render", scene = %seed.scene, seed = seed.seed).entered();
    seed.validate()?;
    let kind = SceneKind::from_name(&seed.scene)?;
    let mut surface = PixmapSurface::new(seed.width, seed.height)?;
    let mut ink = Ink::seeded(seed.palette()?, seed.seed);
    kind.draw(&mut surface, &mut ink)?;
    Ok(surface)
}

/// Runs the scene described by `seed` against a [`Recorder`] and returns the
/// captured calls.
pub fn record(seed: &Seed) -> Result<Vec<DrawCall>, SceneError> {
    let _span = info_span!("record", scene = %seed.scene, seed = seed.seed).entered();
    seed.validate()?;
    let kind = SceneKind::from_name(&seed.scene)?;
    let mut recorder = Recorder::new();
    let mut ink = Ink::seeded(seed.palette()?, seed.seed);
    kind.draw(&mut recorder, &mut ink)?;
    Ok(recorder.into_calls())
}
