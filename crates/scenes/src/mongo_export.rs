use image_gen_core::{target, Drawable, Ink, SceneError, TargetSpec};

/// `(x, y, radius, circle_count)` of each target, drawn in order.
pub(crate) const TARGETS: [(f64, f64, f64, u32); 7] = [
    (400.0, 400.0, 600.0, 4),
    (0.0, 0.0, 200.0, 4),
    (0.0, 400.0, 200.0, 4),
    (0.0, 20.0, 200.0, 4),
    (300.0, 100.0, 100.0, 4),
    (500.0, 100.0, 100.0, 4),
    (500.0, 500.0, 100.0, 2),
];

/// Seven overlapping targets: one huge, three hugging the left edge, three
/// small ones across the top and bottom right.
pub fn mongo_export(surface: &mut dyn Drawable, ink: &mut Ink) -> Result<(), SceneError> {
    for (x, y, radius, rings) in TARGETS {
        target(surface, ink, &TargetSpec::new(x, y, radius, rings))?;
    }
    Ok(())
}
