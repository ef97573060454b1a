//! Floor plan model
//!
//! The character grid, cell coordinates and the visited-cell tracker.

mod cell;
mod grid;
mod visit;

pub use cell::Cell;
pub use grid::Grid;
pub use visit::VisitMap;
