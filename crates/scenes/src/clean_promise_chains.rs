use std::f64::consts::PI;

use image_gen_core::{
    circle, rectangle, target, CircleSpec, Drawable, Ink, NamedColor, RectSpec, SceneError,
    TargetSpec,
};

use crate::BAR_SPAN;

/// `(x, start_angle, end_angle, color)` of the six radius-200 wedges centered
/// on `y = 200`. `None` picks a random color.
const WEDGES: [(f64, f64, f64, Option<NamedColor>); 6] = [
    (0.0, 1.5 * PI, 0.0, Some(NamedColor::Black)),
    (200.0, 1.5 * PI, 0.0, Some(NamedColor::Yellow)),
    (400.0, 1.5 * PI, 0.0, None),
    (200.0, 0.5 * PI, PI, Some(NamedColor::Gray)),
    (400.0, 0.5 * PI, PI, Some(NamedColor::Red)),
    (600.0, 0.5 * PI, PI, Some(NamedColor::Blue)),
];

/// Quarter-circle wedges over a pink ground and a target, with two rows of
/// translucent bars meeting along `y = 200`.
pub fn clean_promise_chains(surface: &mut dyn Drawable, ink: &mut Ink) -> Result<(), SceneError> {
    let pink = ink.named(NamedColor::Pink);
    rectangle(surface, ink, &RectSpec::new(0.0, 0.0, 600.0, 600.0).with_color(pink))?;
    target(surface, ink, &TargetSpec::new(400.0, 400.0, 300.0, 5))?;

    for (x, start, end, named) in WEDGES {
        let mut wedge = CircleSpec::new(x, 200.0, 200.0).with_angles(start, end);
        wedge.color = named.map(|n| ink.named(n));
        circle(surface, ink, &wedge)?;
    }

    // Bars hanging down from y = 200.
    let bars = 30;
    let spacing = BAR_SPAN / f64::from(bars);
    for i in 0..=bars {
        let height = ink.range(100, 400)? as f64;
        let bar = RectSpec::new(f64::from(i) * spacing, 200.0, 4.0, height).with_alpha(0.85);
        rectangle(surface, ink, &bar)?;
    }

    // Bars standing on y = 200.
    let bars = 60;
    let spacing = BAR_SPAN / f64::from(bars);
    for i in 0..=bars {
        let top = ink.range(40, 150)? as f64;
        let bar = RectSpec::new(f64::from(i) * spacing, top, 5.0, 200.0 - top).with_alpha(0.85);
        rectangle(surface, ink, &bar)?;
    }
    Ok(())
}
