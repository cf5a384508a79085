//! Sticky column styling for data tables.
//!
//! Columns pinned to the left or right edge of a horizontally scrolling table
//! stay in place while the body scrolls beneath them. This crate derives the
//! style properties that make that happen: sticky positioning, edge offsets,
//! a separation shadow on the outermost pinned column, background, corner
//! rounding and stacking order.
//!
//! ```
//! use gridpin::{ColumnDef, OverflowState, Pin, PinnedLayout, StickyColumnStyler};
//!
//! let layout = PinnedLayout::new(vec![
//!     ColumnDef::new("select", 40.0).pin(Pin::Left),
//!     ColumnDef::new("name", 120.0).pin(Pin::Left),
//!     ColumnDef::new("email", 240.0),
//!     ColumnDef::new("actions", 80.0).pin(Pin::Right),
//! ])
//! .unwrap();
//!
//! let styler = StickyColumnStyler::default();
//! let overflow = OverflowState::new(true, false);
//!
//! let name = styler.compute_style(layout.get("name").unwrap(), overflow);
//! assert!(name.is_sticky());
//! assert!(name.to_inline_css().contains("left: 40px;"));
//! ```

pub mod column;
pub mod config;
pub mod error;
pub mod layout;
pub mod styler;
pub mod types;

pub use column::Column;
pub use config::{TableConfig, ThemeConfig};
pub use error::{ConfigError, LayoutError, ValueError};
pub use layout::{ColumnDef, OverflowState, PinnedColumn, PinnedLayout, Size};
pub use styler::{compute_style, StickyColumnStyler};
pub use types::*;
