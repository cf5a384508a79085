use std::collections::HashMap;

use crate::error::ConfigError;
use crate::types::{BoxShadow, Color, Length, StyleDescriptor};

/// Theme values used when a column is stuck to an edge.
///
/// The defaults reference the stylesheet's custom properties, so the output
/// follows whatever light/dark theme the page has active.
#[derive(Debug, Clone, PartialEq)]
pub struct PinTheme {
    /// Background painted behind sticky cells so scrolled content is hidden.
    pub background: Color,
    /// Color of the separation shadow on the group edge column.
    pub border: Color,
    /// Corner radius applied on the pinned side.
    pub radius: Length,
    /// Offset, blur and (negated) spread of the separation shadow, in pixels.
    pub shadow_size: f32,
}

impl PinTheme {
    pub const DEFAULT_SHADOW_SIZE: f32 = 4.0;

    pub fn new() -> Self {
        Self {
            background: Color::var("background"),
            border: Color::var("border"),
            radius: Length::var("radius"),
            shadow_size: Self::DEFAULT_SHADOW_SIZE,
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn border(mut self, color: Color) -> Self {
        self.border = color;
        self
    }

    pub fn radius(mut self, radius: Length) -> Self {
        self.radius = radius;
        self
    }

    pub fn shadow_size(mut self, size: f32) -> Self {
        self.shadow_size = size;
        self
    }
}

impl Default for PinTheme {
    fn default() -> Self {
        Self::new()
    }
}

/// A palette provides concrete values for color variables.
pub trait Palette: Send + Sync {
    /// Resolve a variable name (without the leading `--`) to a color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Palette that resolves nothing.
pub struct EmptyPalette;

impl Palette for EmptyPalette {
    fn resolve(&self, _name: &str) -> Option<&Color> {
        None
    }
}

/// Palette backed by a fixed name → color map.
#[derive(Debug, Clone, Default)]
pub struct StaticPalette {
    colors: HashMap<String, Color>,
}

impl StaticPalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, color: Color) -> Self {
        self.insert(name, color);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, color: Color) {
        self.colors.insert(name.into(), color);
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Build from unparsed color strings, e.g. a deserialized palette file.
    /// A leading `--` on names is accepted and stripped.
    pub fn from_strings<I, K, V>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut palette = Self::new();
        for (name, value) in entries {
            let name = name.as_ref();
            let name = name.strip_prefix("--").unwrap_or(name);
            let color = value
                .as_ref()
                .parse()
                .map_err(|source| ConfigError::Palette {
                    name: name.to_string(),
                    source,
                })?;
            palette.insert(name, color);
        }
        log::debug!("Loaded palette with {} colors", palette.len());
        Ok(palette)
    }
}

impl Palette for StaticPalette {
    fn resolve(&self, name: &str) -> Option<&Color> {
        self.colors.get(name)
    }
}

/// Context for resolving color variables against a palette.
pub struct ColorContext<'a> {
    palette: &'a dyn Palette,
}

impl<'a> ColorContext<'a> {
    /// Longest chain of variables referencing variables that is followed.
    const MAX_DEPTH: usize = 16;

    pub fn new(palette: &'a dyn Palette) -> Self {
        Self { palette }
    }

    /// Resolve a color, following variables that point at other variables.
    /// Unknown variables, and chains that loop or run too deep, are returned
    /// as the last variable reached.
    pub fn resolve(&self, color: &Color) -> Color {
        let mut current = color;
        for _ in 0..Self::MAX_DEPTH {
            let Color::Var(name) = current else {
                break;
            };
            match self.palette.resolve(name) {
                Some(next) => current = next,
                None => break,
            }
        }
        current.clone()
    }

    /// Resolve every color in a style.
    pub fn resolve_style(&self, style: &StyleDescriptor) -> StyleDescriptor {
        StyleDescriptor {
            background: style.background.as_ref().map(|color| self.resolve(color)),
            box_shadow: style.box_shadow.as_ref().map(|shadow| BoxShadow {
                color: self.resolve(&shadow.color),
                ..shadow.clone()
            }),
            ..style.clone()
        }
    }
}
