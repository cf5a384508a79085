mod overflow;
mod pinned;

pub use overflow::{OverflowState, Size};
pub use pinned::{ColumnDef, PinnedColumn, PinnedLayout};
