use image_gen_core::{rectangle, target, Drawable, Ink, NamedColor, RectSpec, SceneError, TargetSpec};

use crate::BAR_SPAN;

/// A giant target rising from the bottom edge behind twelve tall posts.
/// The first post is always blue.
pub fn electron_node_docker(surface: &mut dyn Drawable, ink: &mut Ink) -> Result<(), SceneError> {
    target(surface, ink, &TargetSpec::new(300.0, 580.0, 600.0, 5))?;

    let posts = 11;
    let spacing = BAR_SPAN / f64::from(posts);
    for i in 0..=posts {
        let width = ink.range(2, 10)? as f64;
        let top = ink.range(200, 300)? as f64;
        let fill = (i == 0).then(|| ink.named(NamedColor::Blue));
        let post = RectSpec::new(f64::from(i) * spacing, top, width, 500.0).with_fill(fill);
        rectangle(surface, ink, &post)?;
    }
    Ok(())
}
