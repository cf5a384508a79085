mod color;
mod corners;
mod css;
mod enums;
mod length;
mod shadow;
mod style;
mod theme;

pub use color::Color;
pub use corners::Corners;
pub use enums::{Pin, PinSide, Position};
pub use length::Length;
pub use shadow::BoxShadow;
pub use style::StyleDescriptor;
pub use theme::{ColorContext, EmptyPalette, Palette, PinTheme, StaticPalette};
