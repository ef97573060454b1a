//! Room discovery
//!
//! A full scan seeds one flood fill per unvisited floor cell, in row-major
//! order, and folds every region into a [`RoomRegistry`].

mod explore;
mod label;
mod registry;

pub use explore::{RegionSurvey, explore_region};
pub use label::{Label, labels_in_row, room_name_at};
pub use registry::RoomRegistry;

use tracing::{debug, info};

use crate::config::{ChairSet, PlanConfig};
use crate::furniture::ChairKind;
use crate::plan::{Grid, VisitMap};

/// Scans a grid for rooms with a fixed configuration
#[derive(Debug, Clone, Copy)]
pub struct FloorPlanParser<'a> {
    grid: &'a Grid,
    config: &'a PlanConfig,
}

impl<'a> FloorPlanParser<'a> {
    pub fn new(grid: &'a Grid, config: &'a PlanConfig) -> Self {
        Self { grid, config }
    }

    /// Explore every region of the grid and merge them by room name
    pub fn parse(&self) -> RoomRegistry {
        debug!("Starting to parse the floor plan.");
        debug!(
            "Walls: '{}', chairs: {}",
            self.config.wall_separators.iter().collect::<String>(),
            describe_chairs(&self.config.chair_kinds)
        );

        let mut visits = VisitMap::new(self.grid);
        let mut registry = RoomRegistry::new();
        let mut regions = 0;

        for cell in self.grid.cells() {
            if !visits.is_visitable(self.grid, &self.config.wall_separators, cell) {
                continue;
            }
            debug!("Exploring from cell {}", cell);
            registry.absorb(explore_region(self.grid, self.config, &mut visits, cell));
            regions += 1;
        }

        info!(
            "Parsed {}x{} plan: {} regions, {} rooms, {} unnamed",
            self.grid.rows(),
            self.grid.cols(),
            regions,
            registry.len(),
            registry.unnamed_regions()
        );
        if !registry.unclaimed().is_empty() {
            debug!("Chairs outside any named room: {}", registry.unclaimed());
        }

        registry
    }
}

/// `W (wooden chair), X (custom)` style listing of the chair kinds
fn describe_chairs(chairs: &ChairSet) -> String {
    chairs
        .iter()
        .map(|symbol| match ChairKind::from_symbol(symbol) {
            Some(kind) => format!("{} ({})", symbol, kind),
            None => format!("{} (custom)", symbol),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
