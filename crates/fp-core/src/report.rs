//! Final chair report: a total plus one block per room

use serde::Serialize;

use crate::config::ChairSet;
use crate::error::Result;
use crate::furniture::ChairTally;
use crate::survey::RoomRegistry;

/// Chairs of one named room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomChairs {
    pub name: String,
    pub chairs: ChairTally,
}

/// Totals and rooms ready for display.
///
/// Rooms are sorted by name and every tally lists the configured chair
/// kinds in configuration order, zero-filled. The total is kept apart from
/// the rooms so a room called `total` is still reported as a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total: ChairTally,
    pub rooms: Vec<RoomChairs>,
}

impl Report {
    pub fn from_registry(registry: &RoomRegistry, chairs: &ChairSet) -> Self {
        let mut total = ChairTally::zeroed(chairs);
        let rooms = registry
            .iter()
            .map(|(name, tally)| {
                let tally = tally.ordered_by(chairs);
                total.absorb(&tally);
                RoomChairs {
                    name: name.to_string(),
                    chairs: tally,
                }
            })
            .collect();

        Self { total, rooms }
    }

    /// Pretty-printed JSON form of the report
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn room(&self, name: &str) -> Option<&ChairTally> {
        self.rooms.iter().find(|room| room.name == name).map(|room| &room.chairs)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "total:")?;
        writeln!(f, "{}", self.total)?;
        for room in &self.rooms {
            writeln!(f, "{}:", room.name)?;
            writeln!(f, "{}", room.chairs)?;
        }
        Ok(())
    }
}
