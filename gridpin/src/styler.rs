//! Sticky column style computation.
//!
//! Pinning only takes effect while the table overflows horizontally. Without
//! horizontal overflow every column renders as a normal in-flow cell,
//! whatever its pin side. Vertical overflow never changes a column's style.

use crate::column::Column;
use crate::layout::{OverflowState, PinnedLayout};
use crate::types::{BoxShadow, Corners, Length, PinSide, PinTheme, Position, StyleDescriptor};

/// Computes cell styles for pinned columns against a fixed theme.
#[derive(Debug, Clone, Default)]
pub struct StickyColumnStyler {
    theme: PinTheme,
}

impl StickyColumnStyler {
    pub fn new(theme: PinTheme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &PinTheme {
        &self.theme
    }

    pub fn compute_style<C: Column + ?Sized>(
        &self,
        column: &C,
        overflow: OverflowState,
    ) -> StyleDescriptor {
        compute_style(column, overflow, &self.theme)
    }

    /// Styles for every column of a layout, in definition order.
    pub fn compute_layout<'a>(
        &self,
        layout: &'a PinnedLayout,
        overflow: OverflowState,
    ) -> Vec<(&'a str, StyleDescriptor)> {
        layout
            .columns()
            .iter()
            .map(|column| (column.id.as_str(), self.compute_style(column, overflow)))
            .collect()
    }
}

/// The side a column is currently stuck to, if sticky positioning is active.
pub fn sticky_side<C: Column + ?Sized>(column: &C, overflow: OverflowState) -> Option<PinSide> {
    if !overflow.horizontal {
        return None;
    }
    column.pin().side()
}

/// Separation shadow for a column stuck to `side`. Only the column at the
/// edge of its group gets one, so adjacent pinned columns never show a line
/// between them.
pub fn edge_shadow_for<C: Column + ?Sized>(
    column: &C,
    side: PinSide,
    theme: &PinTheme,
) -> Option<BoxShadow> {
    column
        .is_group_edge(side)
        .then(|| BoxShadow::edge_fade(side, theme.shadow_size, theme.border.clone()))
}

/// Corner rounding for a column stuck to `side`.
pub fn corner_radius_for(side: PinSide, theme: &PinTheme) -> Corners {
    Corners::side(side, theme.radius.clone())
}

/// Compute the style for one column.
///
/// Pure: identical inputs always produce equal descriptors. Widths and
/// offsets are passed through without validation.
pub fn compute_style<C: Column + ?Sized>(
    column: &C,
    overflow: OverflowState,
    theme: &PinTheme,
) -> StyleDescriptor {
    let mut style = StyleDescriptor::in_flow(column.width());

    let Some(side) = sticky_side(column, overflow) else {
        return style;
    };

    let offset = Some(Length::px(column.offset_from_edge(side)));
    match side {
        PinSide::Left => style.left = offset,
        PinSide::Right => style.right = offset,
    }
    style.position = Position::Sticky;
    style.background = Some(theme.background.clone());
    style.box_shadow = edge_shadow_for(column, side, theme);
    style.corners = corner_radius_for(side, theme);
    style.z_index = 1;

    style
}
