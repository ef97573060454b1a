//! fp-core: Room discovery for ASCII floor plans
//!
//! Reads a floor plan drawn with wall glyphs, finds every room by flood
//! filling the open floor between walls, names each room from the
//! `(label)` printed inside it and counts the chairs it contains.
//!
//! Apart from the [`load`] module, this crate does no I/O.

pub mod config;
pub mod error;
pub mod furniture;
pub mod load;
pub mod plan;
pub mod report;
pub mod survey;

pub use config::{ChairSet, PlanConfig, WallSet};
pub use error::{PlanError, Result};
pub use furniture::{ChairKind, ChairTally};
pub use load::load_plan;
pub use plan::{Cell, Grid, VisitMap};
pub use report::Report;
pub use survey::{FloorPlanParser, RegionSurvey, RoomRegistry};
