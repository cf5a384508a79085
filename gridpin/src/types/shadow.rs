use std::fmt;

use serde::{Serialize, Serializer};

use super::css::bare_px;
use super::{Color, PinSide};

/// A single `box-shadow` layer.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
    pub inset: bool,
}

impl BoxShadow {
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
            inset: false,
        }
    }

    pub fn inset(mut self) -> Self {
        self.inset = true;
        self
    }

    /// Inset shadow that draws a thin line along one vertical edge of a cell.
    ///
    /// The negative spread cancels the blur everywhere except the edge the
    /// horizontal offset points away from. `Left` renders as
    /// `-4px 0 4px -4px <color> inset` for a size of 4.
    pub fn edge_fade(side: PinSide, size: f32, color: Color) -> Self {
        let offset_x = match side {
            PinSide::Left => -size,
            PinSide::Right => size,
        };
        Self::new(offset_x, 0.0, size, -size, color).inset()
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            bare_px(self.offset_x),
            bare_px(self.offset_y),
            bare_px(self.blur),
            bare_px(self.spread),
            self.color
        )?;
        if self.inset {
            f.write_str(" inset")?;
        }
        Ok(())
    }
}

impl Serialize for BoxShadow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
