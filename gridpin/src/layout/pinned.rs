//! Pinned column groups and their offsets.
//!
//! Left-pinned columns form the left group and right-pinned columns the right
//! group, each in definition order. Within the left group a column's offset is
//! the total width of the left-pinned columns before it; within the right
//! group it is the total width of the right-pinned columns after it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::error::LayoutError;
use crate::types::{Pin, PinSide};

/// Column definition: id, width and pin side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub id: String,
    pub width: f32,
    #[serde(default)]
    pub pin: Pin,
}

impl ColumnDef {
    pub fn new(id: impl Into<String>, width: f32) -> Self {
        Self {
            id: id.into(),
            width,
            pin: Pin::None,
        }
    }

    pub fn pin(mut self, pin: Pin) -> Self {
        self.pin = pin;
        self
    }
}

/// A column with its pinning properties resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PinnedColumn {
    pub id: String,
    pub width: f32,
    pub pin: Pin,
    /// Offset from the pinned edge. Zero when unpinned.
    pub offset: f32,
    /// Outermost column of its group. False when unpinned.
    pub group_edge: bool,
}

impl PinnedColumn {
    /// An unpinned column.
    pub fn new(id: impl Into<String>, width: f32) -> Self {
        Self {
            id: id.into(),
            width,
            pin: Pin::None,
            offset: 0.0,
            group_edge: false,
        }
    }

    /// Pin to `side` with precomputed group properties.
    pub fn pinned(mut self, side: PinSide, offset: f32, group_edge: bool) -> Self {
        self.pin = side.into();
        self.offset = offset;
        self.group_edge = group_edge;
        self
    }

    fn from_def(def: &ColumnDef) -> Self {
        Self {
            pin: def.pin,
            ..Self::new(def.id.clone(), def.width)
        }
    }
}

impl Column for PinnedColumn {
    fn pin(&self) -> Pin {
        self.pin
    }

    fn is_group_edge(&self, side: PinSide) -> bool {
        self.pin.side() == Some(side) && self.group_edge
    }

    fn offset_from_edge(&self, side: PinSide) -> f32 {
        if self.pin.side() == Some(side) {
            self.offset
        } else {
            0.0
        }
    }

    fn width(&self) -> f32 {
        self.width
    }
}

/// An ordered set of columns with resolved pin groups.
///
/// Every mutation recomputes offsets and group edges for the whole table, so
/// the columns handed out always reflect the current pinning.
#[derive(Debug, Clone, Default)]
pub struct PinnedLayout {
    columns: Vec<PinnedColumn>,
}

impl PinnedLayout {
    /// Build a layout from column definitions in table order.
    ///
    /// Fails if two definitions share an id.
    pub fn new(defs: Vec<ColumnDef>) -> Result<Self, LayoutError> {
        let mut seen = HashSet::new();
        for def in &defs {
            if !seen.insert(def.id.as_str()) {
                return Err(LayoutError::duplicate(&def.id));
            }
        }

        let mut layout = Self {
            columns: defs.iter().map(PinnedColumn::from_def).collect(),
        };
        layout.recompute();
        Ok(layout)
    }

    /// Columns in definition order.
    pub fn columns(&self) -> &[PinnedColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PinnedColumn> {
        self.columns.iter().find(|column| column.id == id)
    }

    /// Columns pinned to `side`, in definition order.
    pub fn group(&self, side: PinSide) -> impl Iterator<Item = &PinnedColumn> {
        self.columns
            .iter()
            .filter(move |column| column.pin.side() == Some(side))
    }

    /// Columns that scroll with the body, in definition order.
    pub fn center(&self) -> impl Iterator<Item = &PinnedColumn> {
        self.columns.iter().filter(|column| !column.pin.is_pinned())
    }

    /// Columns in render order: left group, unpinned, right group.
    pub fn visual_order(&self) -> impl Iterator<Item = &PinnedColumn> {
        self.group(PinSide::Left)
            .chain(self.center())
            .chain(self.group(PinSide::Right))
    }

    /// Combined width of every column; the content width of the table.
    pub fn total_width(&self) -> f32 {
        self.columns.iter().map(|column| column.width).sum()
    }

    /// Combined width of the group pinned to `side`.
    pub fn pinned_width(&self, side: PinSide) -> f32 {
        self.group(side).map(|column| column.width).sum()
    }

    /// Change the pin side of a column.
    pub fn set_pin(&mut self, id: &str, pin: Pin) -> Result<(), LayoutError> {
        let column = self.column_mut(id)?;
        if column.pin == pin {
            return Ok(());
        }
        log::debug!("[layout] Pinning column {} {:?} -> {:?}", id, column.pin, pin);
        column.pin = pin;
        self.recompute();
        Ok(())
    }

    pub fn unpin(&mut self, id: &str) -> Result<(), LayoutError> {
        self.set_pin(id, Pin::None)
    }

    /// Change the width of a column.
    pub fn set_width(&mut self, id: &str, width: f32) -> Result<(), LayoutError> {
        let column = self.column_mut(id)?;
        log::debug!("[layout] Resizing column {} {} -> {}", id, column.width, width);
        column.width = width;
        self.recompute();
        Ok(())
    }

    fn column_mut(&mut self, id: &str) -> Result<&mut PinnedColumn, LayoutError> {
        self.columns
            .iter_mut()
            .find(|column| column.id == id)
            .ok_or_else(|| LayoutError::unknown(id))
    }

    fn recompute(&mut self) {
        let left = self.indices(PinSide::Left);
        let right = self.indices(PinSide::Right);

        for column in &mut self.columns {
            column.offset = 0.0;
            column.group_edge = false;
        }

        let mut start = 0.0;
        for (pos, &i) in left.iter().enumerate() {
            let column = &mut self.columns[i];
            column.offset = start;
            column.group_edge = pos + 1 == left.len();
            start += column.width;
        }

        let mut after = 0.0;
        for (pos, &i) in right.iter().enumerate().rev() {
            let column = &mut self.columns[i];
            column.offset = after;
            column.group_edge = pos == 0;
            after += column.width;
        }
    }

    fn indices(&self, side: PinSide) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, column)| column.pin.side() == Some(side))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PinnedLayout {
        PinnedLayout::new(vec![
            ColumnDef::new("a", 100.0).pin(Pin::Left),
            ColumnDef::new("b", 50.0).pin(Pin::Left),
            ColumnDef::new("c", 200.0),
            ColumnDef::new("x", 80.0).pin(Pin::Right),
            ColumnDef::new("y", 40.0).pin(Pin::Right),
        ])
        .unwrap()
    }

    #[test]
    fn test_left_group() {
        let layout = layout();
        let a = layout.get("a").unwrap();
        let b = layout.get("b").unwrap();

        assert_eq!(a.offset_from_edge(PinSide::Left), 0.0);
        assert_eq!(b.offset_from_edge(PinSide::Left), 100.0);
        assert!(!a.is_group_edge(PinSide::Left));
        assert!(b.is_group_edge(PinSide::Left));
    }

    #[test]
    fn test_right_group() {
        let layout = layout();
        let x = layout.get("x").unwrap();
        let y = layout.get("y").unwrap();

        assert_eq!(x.offset_from_edge(PinSide::Right), 40.0);
        assert_eq!(y.offset_from_edge(PinSide::Right), 0.0);
        assert!(x.is_group_edge(PinSide::Right));
        assert!(!y.is_group_edge(PinSide::Right));
    }

    #[test]
    fn test_other_side_queries() {
        let layout = layout();
        let b = layout.get("b").unwrap();
        assert_eq!(b.offset_from_edge(PinSide::Right), 0.0);
        assert!(!b.is_group_edge(PinSide::Right));

        let c = layout.get("c").unwrap();
        assert!(!c.is_group_edge(PinSide::Left));
        assert!(!c.is_group_edge(PinSide::Right));
    }

    #[test]
    fn test_duplicate_id() {
        let err = PinnedLayout::new(vec![ColumnDef::new("a", 1.0), ColumnDef::new("a", 2.0)])
            .unwrap_err();
        assert_eq!(err, LayoutError::duplicate("a"));
    }
}
