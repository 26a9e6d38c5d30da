//! Failures of the `image-gen` binary and the exit code each one ends with.
//!
//! | code | cause |
//! |------|-------|
//! | 0    | image or output written |
//! | 2    | bad command line (reported by clap) |
//! | 10   | the scene could not be drawn: unknown name, zero size, surface failure |
//! | 11   | a seed file could not be read, or a PNG/seed file could not be written |
//! | 12   | a palette name or seed file the user supplied is not valid |
//! | 13   | JSON output could not be produced |

use image_gen_core::SceneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Scene(SceneError),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Input(String),
    #[error("cannot encode output: {0}")]
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Scene(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

/// Library errors are sorted by who can fix them: file problems become
/// `Io`, an unknown palette is the user's `Input`, anything else is the scene.
impl From<SceneError> for CliError {
    fn from(e: SceneError) -> Self {
        match e {
            SceneError::Io(msg) => CliError::Io(msg),
            SceneError::InvalidPalette(_) => CliError::Input(e.to_string()),
            other => CliError::Scene(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
