use image_gen_core::{
    circle, rectangle, CircleSpec, CompositeMode, Drawable, Ink, NamedColor, RectSpec, SceneError,
};

use crate::BAR_SPAN;

/// A dense field of random bars cut down to a disc and laid over yellow.
///
/// The bars are drawn on black, then `destination-in` keeps only what falls
/// inside a centered circle, and `destination-over` slides the yellow
/// background in underneath. The surface is left in `destination-over`.
pub fn server_sent_events(surface: &mut dyn Drawable, ink: &mut Ink) -> Result<(), SceneError> {
    let black = ink.named(NamedColor::Black);
    rectangle(surface, ink, &RectSpec::new(0.0, 0.0, 600.0, 600.0).with_color(black))?;

    let bars = 150;
    let spacing = BAR_SPAN / f64::from(bars);
    for i in 0..=bars {
        let width = ink.range(2, 5)? as f64;
        let height = ink.range(20, 580)? as f64;
        let bar = RectSpec::new(f64::from(i) * spacing, 0.0, width, height);
        rectangle(surface, ink, &bar)?;
    }

    surface.set_composite_mode(CompositeMode::DestinationIn);
    circle(surface, ink, &CircleSpec::new(300.0, 300.0, 300.0))?;

    surface.set_composite_mode(CompositeMode::DestinationOver);
    let yellow = ink.named(NamedColor::Yellow);
    rectangle(surface, ink, &RectSpec::new(0.0, 0.0, 600.0, 600.0).with_color(yellow))
}
