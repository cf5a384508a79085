use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::css::parse_var;
use crate::error::ValueError;

/// A CSS length: either pixels or a custom property reference.
#[derive(Debug, Clone, PartialEq)]
pub enum Length {
    Px(f32),
    Var(String),
}

impl Length {
    pub const fn px(value: f32) -> Self {
        Self::Px(value)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(value) => write!(f, "{value}px"),
            Self::Var(name) => write!(f, "var(--{name})"),
        }
    }
}

impl FromStr for Length {
    type Err = ValueError;

    /// Accepts `12px`, a bare number (pixels) or `var(--name)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(name) = parse_var(s) {
            return Ok(Self::var(name));
        }
        let number = s.strip_suffix("px").unwrap_or(s).trim_end();
        number
            .parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Self::Px)
            .ok_or_else(|| ValueError::Length(s.to_string()))
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
