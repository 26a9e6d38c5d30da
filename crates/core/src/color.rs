//! Fill colors in CSS functional notation.
//!
//! A [`Color`] is an 8-bit RGB triple with an optional alpha. Colors built
//! without an alpha format as `rgb(r,g,b)`; colors carrying one format as
//! `rgba(r,g,b, a)`. The alpha is kept as given: clamping out-of-range values
//! is left to the surface that paints with it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SceneError;

/// An RGB fill color with an optional opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: Option<f64>,
}

impl Color {
    /// Creates a fully opaque color that formats as `rgb(...)`.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    /// Creates a color that formats as `rgba(...)` with the given alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self {
            r,
            g,
            b,
            alpha: Some(alpha),
        }
    }

    /// Effective opacity: the carried alpha, or 1.0 for `rgb(...)` colors.
    pub fn opacity(&self) -> f64 {
        self.alpha.unwrap_or(1.0)
    }

    /// Returns the RGB components as an array.
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alpha {
            None => write!(f, "rgb({},{},{})", self.r, self.g, self.b),
            Some(a) => write!(f, "rgba({},{},{}, {a})", self.r, self.g, self.b),
        }
    }
}

impl FromStr for Color {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (body, with_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(SceneError::InvalidColor(format!(
                "expected rgb(...) or rgba(...), got '{s}'"
            )));
        };
        let body = body
            .strip_suffix(')')
            .ok_or_else(|| SceneError::InvalidColor(format!("missing ')' in '{s}'")))?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(SceneError::InvalidColor(format!(
                "expected {expected} components, got {}",
                parts.len()
            )));
        }

        let channel = |name: &str, v: &str| {
            v.parse::<u8>()
                .map_err(|e| SceneError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        let r = channel("red", parts[0])?;
        let g = channel("green", parts[1])?;
        let b = channel("blue", parts[2])?;

        if !with_alpha {
            return Ok(Color::rgb(r, g, b));
        }
        let alpha = parts[3]
            .parse::<f64>()
            .map_err(|e| SceneError::InvalidColor(format!("invalid alpha component: {e}")))?;
        Ok(Color::rgba(r, g, b, alpha))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_color_formats_without_spaces() {
        assert_eq!(Color::rgb(34, 30, 34).to_string(), "rgb(34,30,34)");
    }

    #[test]
    fn translucent_color_formats_alpha_after_space() {
        assert_eq!(
            Color::rgba(230, 50, 40, 0.85).to_string(),
            "rgba(230,50,40, 0.85)"
        );
        assert_eq!(Color::rgba(0, 67, 206, 1.0).to_string(), "rgba(0,67,206, 1)");
    }

    #[test]
    fn out_of_range_alpha_is_passed_through() {
        let c = Color::rgba(1, 2, 3, 1.5);
        assert_eq!(c.opacity(), 1.5);
        assert_eq!(c.to_string(), "rgba(1,2,3, 1.5)");
    }

    #[test]
    fn opacity_defaults_to_one_for_rgb() {
        assert_eq!(Color::rgb(0, 0, 0).opacity(), 1.0);
    }

    #[test]
    fn parse_accepts_both_notations() {
        assert_eq!(
            "rgb(248,195,189)".parse::<Color>().unwrap(),
            Color::rgb(248, 195, 189)
        );
        assert_eq!(
            " rgba(236, 167, 44, 0.5) ".parse::<Color>().unwrap(),
            Color::rgba(236, 167, 44, 0.5)
        );
    }

    #[test]
    fn parse_rejects_unknown_notation() {
        assert!(matches!(
            "#ff0000".parse::<Color>(),
            Err(SceneError::InvalidColor(_))
        ));
    }

    #[test]
    fn parse_rejects_wrong_component_count() {
        assert!("rgb(1,2)".parse::<Color>().is_err());
        assert!("rgba(1,2,3)".parse::<Color>().is_err());
    }

    #[test]
    fn parse_rejects_channel_overflow() {
        assert!("rgb(256,0,0)".parse::<Color>().is_err());
    }

    #[test]
    fn parse_rejects_missing_paren() {
        assert!("rgb(1,2,3".parse::<Color>().is_err());
    }

    #[test]
    fn serializes_as_css_string() {
        let json = serde_json::to_string(&Color::rgba(150, 150, 150, 0.25)).unwrap();
        assert_eq!(json, "\"rgba(150,150,150, 0.25)\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgba(150, 150, 150, 0.25));
    }
}
