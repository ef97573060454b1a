//! Region explorer: breadth-first flood fill from one seed cell

use std::collections::VecDeque;

use tracing::trace;

use super::label::room_name_at;
use crate::config::PlanConfig;
use crate::furniture::ChairTally;
use crate::plan::{Cell, Grid, VisitMap};

/// What one flood fill found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSurvey {
    /// Seed cell of the region
    pub origin: Cell,
    /// First room label met in visiting order, if any
    pub name: Option<String>,
    /// Chairs inside the region
    pub chairs: ChairTally,
    /// Number of cells in the region
    pub size: usize,
}

impl RegionSurvey {
    fn empty(origin: Cell) -> Self {
        Self {
            origin,
            name: None,
            chairs: ChairTally::default(),
            size: 0,
        }
    }
}

/// Flood fill the 4-connected open area around `start`.
///
/// Cells are marked in `visits` as they are queued. Chairs are counted and
/// the first `(` that opens a label on its row names the region. An empty
/// grid, or a start cell that is a wall, out of bounds or already visited,
/// yields an unnamed survey with an empty tally.
pub fn explore_region(
    grid: &Grid,
    config: &PlanConfig,
    visits: &mut VisitMap,
    start: Cell,
) -> RegionSurvey {
    if grid.is_empty() || !visits.is_visitable(grid, &config.wall_separators, start) {
        return RegionSurvey::empty(start);
    }

    let mut survey = RegionSurvey {
        origin: start,
        name: None,
        chairs: ChairTally::zeroed(&config.chair_kinds),
        size: 0,
    };

    let mut queue = VecDeque::from([start]);
    visits.mark(start);

    while let Some(cell) = queue.pop_front() {
        survey.size += 1;

        if let Some(symbol) = grid.get(cell) {
            if config.chair_kinds.contains(symbol) {
                survey.chairs.record(symbol);
            } else if symbol == '(' && survey.name.is_none() {
                survey.name = room_name_at(grid.row(cell.row), cell.col);
                if let Some(name) = &survey.name {
                    trace!("Label '{}' found at {}", name, cell);
                }
            }
        }

        for next in cell.neighbors(grid.rows(), grid.cols()) {
            if visits.is_visitable(grid, &config.wall_separators, next) {
                visits.mark(next);
                queue.push_back(next);
            }
        }
    }

    survey
}
