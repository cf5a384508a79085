//! The column contract consumed by the styler.

use crate::types::{Pin, PinSide};

/// A table column as seen by [`compute_style`](crate::compute_style).
///
/// Implementors expose derived pinning properties; the styler never inspects
/// anything else. [`PinnedColumn`](crate::PinnedColumn) is the implementation
/// produced by [`PinnedLayout`](crate::PinnedLayout), but any table model that
/// tracks pinning can implement this directly.
pub trait Column {
    /// The edge this column is pinned to.
    fn pin(&self) -> Pin;

    /// True if this column is the outermost column of its pinned group on
    /// `side`: the last column of the left group or the first column of the
    /// right group. Always false when the column is not pinned to `side`.
    fn is_group_edge(&self, side: PinSide) -> bool;

    /// Cumulative pixel offset from the table edge on `side` to this column.
    fn offset_from_edge(&self, side: PinSide) -> f32;

    /// Column width in pixels.
    fn width(&self) -> f32;
}

impl<C: Column + ?Sized> Column for &C {
    fn pin(&self) -> Pin {
        (**self).pin()
    }

    fn is_group_edge(&self, side: PinSide) -> bool {
        (**self).is_group_edge(side)
    }

    fn offset_from_edge(&self, side: PinSide) -> f32 {
        (**self).offset_from_edge(side)
    }

    fn width(&self) -> f32 {
        (**self).width()
    }
}
