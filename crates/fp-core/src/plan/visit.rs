//! Visited-cell tracker for one full scan

use super::{Cell, Grid};
use crate::config::WallSet;

/// Same-shaped boolean matrix recording which cells already belong to a
/// region. A cell is marked when it is queued, so no cell is queued twice.
#[derive(Debug, Clone)]
pub struct VisitMap {
    visited: Vec<Vec<bool>>,
}

impl VisitMap {
    /// All cells unvisited
    pub fn new(grid: &Grid) -> Self {
        Self {
            visited: vec![vec![false; grid.cols()]; grid.rows()],
        }
    }

    /// In bounds, not yet visited and not a wall
    pub fn is_visitable(&self, grid: &Grid, walls: &WallSet, cell: Cell) -> bool {
        match grid.get(cell) {
            Some(symbol) => !self.is_visited(cell) && !walls.contains(symbol),
            None => false,
        }
    }

    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .copied()
            .unwrap_or(false)
    }

    pub fn mark(&mut self, cell: Cell) {
        if let Some(slot) = self.visited.get_mut(cell.row).and_then(|row| row.get_mut(cell.col)) {
            *slot = true;
        }
    }

    /// Number of cells marked so far
    pub fn visited_count(&self) -> usize {
        self.visited.iter().flatten().filter(|&&v| v).count()
    }
}
