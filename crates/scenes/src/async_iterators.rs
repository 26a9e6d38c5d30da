use image_gen_core::{
    rectangle, target, with_rotation, CompositeMode, Drawable, Ink, NamedColor, RectSpec,
    SceneError, TargetSpec,
};

use crate::{degrees, BAR_SPAN};

/// Skyline of translucent bars with a target and a gray ground slid in
/// behind them, crossed by two tilted black pillars.
pub fn async_iterators(surface: &mut dyn Drawable, ink: &mut Ink) -> Result<(), SceneError> {
    let bars = 40;
    let spacing = BAR_SPAN / f64::from(bars);
    for i in 0..=bars {
        let height = ink.range(150, 450)? as f64;
        let bar = RectSpec::new(f64::from(i) * spacing, 600.0 - height, 6.0, height)
            .with_alpha(0.7);
        rectangle(surface, ink, &bar)?;
    }

    surface.set_composite_mode(CompositeMode::DestinationOver);
    target(surface, ink, &TargetSpec::new(300.0, 300.0, 420.0, 6))?;
    let gray = ink.named(NamedColor::Gray);
    rectangle(surface, ink, &RectSpec::new(0.0, 0.0, 600.0, 600.0).with_color(gray))?;
    surface.set_composite_mode(CompositeMode::SourceOver);

    let black = ink.named(NamedColor::Black);
    with_rotation(surface, degrees(10.0), |s| {
        rectangle(s, ink, &RectSpec::new(450.0, 0.0, 20.0, 420.0).with_color(black))?;
        target(s, ink, &TargetSpec::new(460.0, 420.0, 40.0, 3))
    })?;
    with_rotation(surface, degrees(-10.0), |s| {
        rectangle(s, ink, &RectSpec::new(150.0, 120.0, 20.0, 420.0).with_color(black))?;
        target(s, ink, &TargetSpec::new(160.0, 540.0, 40.0, 3))
    })
}
