//! Reading floor plans from disk

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{PlanError, Result};
use crate::plan::Grid;

/// Read a plan file into a padded [`Grid`].
///
/// A missing file is reported as [`PlanError::NotFound`]; every other
/// failure, including text that is not UTF-8, as [`PlanError::Unreadable`].
pub fn load_plan(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            PlanError::NotFound {
                path: path.to_path_buf(),
                source,
            }
        } else {
            PlanError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let grid = Grid::parse(&text);
    debug!("Loaded '{}': {}x{}", path.display(), grid.rows(), grid.cols());
    Ok(grid)
}
