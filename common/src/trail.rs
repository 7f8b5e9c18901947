use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::cycle::Position;

/// Every cell entered during the current round. Cells are only ever added;
/// the whole set is dropped when the next round is set up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailSet {
    cells: HashSet<Position>,
}

impl TrailSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the cell was already marked.
    pub fn mark(&mut self, position: Position) -> bool {
        self.cells.insert(position)
    }

    pub fn contains(&self, position: &Position) -> bool {
        self.cells.contains(position)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }

    pub(crate) fn clear(&mut self) {
        self.cells.clear();
    }
}
