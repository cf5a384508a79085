use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::css::parse_var;
use crate::error::ValueError;

/// A CSS color value.
///
/// `Var` holds the name of a custom property without its leading `--`, so
/// `Color::var("border")` renders as `var(--border)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    Var(String),
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub fn oklcha(l: f32, c: f32, h: f32, a: f32) -> Self {
        Self::Oklch { l, c, h, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Translucent sRGB color. A fully opaque alpha collapses to [`Color::Rgb`].
    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        if a >= 1.0 {
            Self::Rgb { r, g, b }
        } else {
            Self::Rgba { r, g, b, a }
        }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Self::Var(_))
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Oklch { l, c, h, a } => {
                if *a >= 1.0 {
                    write!(f, "oklch({l} {c} {h})")
                } else {
                    write!(f, "oklch({l} {c} {h} / {a})")
                }
            }
            Self::Rgb { r, g, b } => write!(f, "rgb({r}, {g}, {b})"),
            Self::Rgba { r, g, b, a } => write!(f, "rgba({r}, {g}, {b}, {a})"),
            Self::Var(name) => write!(f, "var(--{name})"),
        }
    }
}

impl From<csscolorparser::Color> for Color {
    fn from(color: csscolorparser::Color) -> Self {
        let [r, g, b, _] = color.to_rgba8();
        Self::rgba(r, g, b, color.a as f32)
    }
}

impl FromStr for Color {
    type Err = ValueError;

    /// Accepts `var(--name)` plus any CSS color `csscolorparser` understands:
    /// named colors, hex, `rgb()`/`rgba()`, `hsl()`, `hwb()`, `oklab()` and
    /// `oklch()`. Concrete colors are stored as sRGB.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(name) = parse_var(s) {
            return Ok(Self::var(name));
        }

        s.parse::<csscolorparser::Color>()
            .map(Self::from)
            .map_err(|_| ValueError::Color(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
