//! Fixed eight-color palettes.
//!
//! Every palette has the same eight slots in the same order, addressable by
//! index or by [`NamedColor`]. `refined` is the default; `classic` keeps the
//! earlier, more saturated table.

use crate::color::Color;
use crate::error::SceneError;
use crate::prng::{rand_range, RandomSource};

/// Number of entries in every palette.
pub const PALETTE_SIZE: usize = 8;

/// All built-in palette names.
const PALETTE_NAMES: &[&str] = &["refined", "classic"];

/// Semantic names for the eight palette slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Gray,
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Pink,
}

impl NamedColor {
    /// All named colors in table order.
    pub const ALL: [NamedColor; PALETTE_SIZE] = [
        NamedColor::Black,
        NamedColor::Gray,
        NamedColor::Red,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Orange,
        NamedColor::Pink,
    ];

    /// Table index of this color.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// An ordered table of eight RGB triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    name: &'static str,
    table: [[u8; 3]; PALETTE_SIZE],
}

impl Palette {
    /// Muted tones. Used unless another palette is asked for.
    pub const fn refined() -> Self {
        Self {
            name: "refined",
            table: [
                [34, 30, 34],
                [150, 150, 150],
                [230, 50, 40],
                [0, 67, 206],
                [150, 197, 176],
                [236, 167, 44],
                [238, 86, 34],
                [248, 195, 189],
            ],
        }
    }

    /// Saturated primaries.
    pub const fn classic() -> Self {
        Self {
            name: "classic",
            table: [
                [0, 0, 0],
                [150, 150, 150],
                [230, 50, 40],
                [20, 110, 170],
                [0, 130, 90],
                [240, 200, 0],
                [240, 140, 40],
                [248, 195, 189],
            ],
        }
    }

    /// Looks up a built-in palette by name.
    ///
    /// Returns `SceneError::InvalidPalette` for unknown names.
    pub fn from_name(name: &str) -> Result<Self, SceneError> {
        match name {
            "refined" => Ok(Self::refined()),
            "classic" => Ok(Self::classic()),
            other => Err(SceneError::InvalidPalette(format!(
                "unknown palette '{other}', expected one of: {}",
                PALETTE_NAMES.join(", ")
            ))),
        }
    }

    /// Returns the names of all built-in palettes.
    pub fn list_names() -> &'static [&'static str] {
        PALETTE_NAMES
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the RGB triple at `index`, or `None` past the end.
    pub fn entry(&self, index: usize) -> Option<[u8; 3]> {
        self.table.get(index).copied()
    }

    /// Returns the opaque `rgb(...)` color for a named slot.
    pub fn named(&self, color: NamedColor) -> Color {
        let [r, g, b] = self.table[color.index()];
        Color::rgb(r, g, b)
    }

    /// Picks one of the eight entries uniformly and attaches `alpha`.
    pub fn random_color<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        alpha: f64,
    ) -> Result<Color, SceneError> {
        let index = rand_range(rng, 0, PALETTE_SIZE as i64 - 1)? as usize;
        let [r, g, b] = self.table[index];
        Ok(Color::rgba(r, g, b, alpha))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::refined()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::Xorshift64;

    #[test]
    fn named_colors_follow_table_order() {
        let p = Palette::refined();
        for (i, named) in NamedColor::ALL.iter().enumerate() {
            let [r, g, b] = p.entry(i).unwrap();
            assert_eq!(p.named(*named), Color::rgb(r, g, b));
        }
    }

    #[test]
    fn refined_named_colors_format_as_rgb() {
        let p = Palette::refined();
        assert_eq!(p.named(NamedColor::Black).to_string(), "rgb(34,30,34)");
        assert_eq!(p.named(NamedColor::Pink).to_string(), "rgb(248,195,189)");
        assert_eq!(p.named(NamedColor::Yellow).to_string(), "rgb(236,167,44)");
    }

    #[test]
    fn entry_past_end_is_none() {
        assert!(Palette::refined().entry(PALETTE_SIZE).is_none());
    }

    #[test]
    fn from_name_resolves_builtins() {
        assert_eq!(Palette::from_name("refined").unwrap(), Palette::refined());
        assert_eq!(Palette::from_name("classic").unwrap(), Palette::classic());
    }

    #[test]
    fn from_name_unknown_lists_choices() {
        let err = Palette::from_name("sepia").unwrap_err();
        assert!(matches!(err, SceneError::InvalidPalette(_)));
        assert!(err.to_string().contains("refined"));
    }

    #[test]
    fn default_is_refined() {
        assert_eq!(Palette::default().name(), "refined");
    }

    #[test]
    fn random_color_is_a_table_entry_with_given_alpha() {
        let p = Palette::refined();
        let mut rng = Xorshift64::new(11);
        for _ in 0..200 {
            let c = p.random_color(&mut rng, 0.85).unwrap();
            assert_eq!(c.alpha, Some(0.85));
            assert!(
                (0..PALETTE_SIZE).any(|i| p.entry(i) == Some(c.channels())),
                "{c} is not in the palette"
            );
        }
    }

    #[test]
    fn random_color_distribution_is_uniform() {
        let p = Palette::refined();
        let mut rng = Xorshift64::new(2024);
        let mut counts = [0u32; PALETTE_SIZE];
        for _ in 0..16_000 {
            let c = p.random_color(&mut rng, 1.0).unwrap();
            let idx = (0..PALETTE_SIZE)
                .find(|&i| p.entry(i) == Some(c.channels()))
                .unwrap();
            counts[idx] += 1;
        }
        // Expected 2000 per color.
        for (i, &n) in counts.iter().enumerate() {
            assert!((1600..=2400).contains(&n), "color {i} drawn {n} times");
        }
    }
}
