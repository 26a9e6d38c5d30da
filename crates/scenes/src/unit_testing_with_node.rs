use image_gen_core::{
    rectangle, target, with_rotation, Drawable, Ink, RectSpec, SceneError, TargetSpec,
};

use crate::degrees;

/// Rotation, post origin, and `(x, y, circle_count)` of the cap for each of
/// the four tilted posts.
const POSTS: [(f64, (f64, f64), (f64, f64, u32)); 4] = [
    (15.0, (295.0, 300.0), (300.0, 300.0, 3)),
    (-25.0, (150.0, 400.0), (150.0, 400.0, 4)),
    (-5.0, (5.0, 300.0), (0.0, 300.0, 3)),
    (5.0, (595.0, 300.0), (600.0, 300.0, 3)),
];

/// Two large targets top and bottom, crossed by four posts tilted about the
/// surface origin, each capped with a small target.
pub fn unit_testing_with_node(surface: &mut dyn Drawable, ink: &mut Ink) -> Result<(), SceneError> {
    target(surface, ink, &TargetSpec::new(300.0, 150.0, 400.0, 5))?;
    target(surface, ink, &TargetSpec::new(300.0, 690.0, 400.0, 3))?;

    for (angle, (px, py), (cx, cy, rings)) in POSTS {
        with_rotation(surface, degrees(angle), |s| {
            rectangle(s, ink, &RectSpec::new(px, py, 10.0, 500.0))?;
            target(s, ink, &TargetSpec::new(cx, cy, 50.0, rings))
        })?;
    }
    Ok(())
}
