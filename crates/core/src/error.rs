//! Error types for the image-gen core.

use thiserror::Error;

/// Errors produced while building or drawing a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Width or height was zero when creating a surface or seed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// An inclusive random range had its bounds reversed.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    /// A requested scene name is not registered.
    #[error("unknown scene: {0}")]
    UnknownScene(String),

    /// A palette name could not be resolved.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// The drawing surface rejected a call.
    #[error("surface error: {0}")]
    Surface(String),

    /// Reading or writing an image or seed file failed.
    #[error("i/o error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = SceneError::InvalidDimensions.to_string();
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn invalid_range_includes_both_bounds() {
        let msg = SceneError::InvalidRange { min: 9, max: -3 }.to_string();
        assert!(msg.contains('9'), "missing min in: {msg}");
        assert!(msg.contains("-3"), "missing max in: {msg}");
    }

    #[test]
    fn unknown_scene_includes_name() {
        let msg = SceneError::UnknownScene("tea-party".into()).to_string();
        assert!(msg.contains("tea-party"), "missing name in: {msg}");
    }

    #[test]
    fn surface_error_includes_message() {
        let msg = SceneError::Surface("negative radius".into()).to_string();
        assert!(msg.contains("negative radius"), "missing message in: {msg}");
    }

    #[test]
    fn scene_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SceneError>();
    }

    #[test]
    fn scene_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<SceneError>();
    }
}
