use serde::{Deserialize, Serialize};

/// Width and height of a viewport or its content, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Whether a scroll viewport currently has content overflowing on each axis.
///
/// Computed by the caller and passed in fresh for every render. Only
/// `horizontal` affects column styling; `vertical` is carried for row-level
/// stickiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OverflowState {
    pub horizontal: bool,
    pub vertical: bool,
}

impl OverflowState {
    pub const fn new(horizontal: bool, vertical: bool) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const fn none() -> Self {
        Self::new(false, false)
    }

    /// Compare content against the viewport it scrolls inside.
    pub fn measure(viewport: Size, content: Size) -> Self {
        Self {
            horizontal: content.width > viewport.width,
            vertical: content.height > viewport.height,
        }
    }
}
