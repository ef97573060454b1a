//! Room registry: merges region surveys by room name

use std::collections::BTreeMap;

use tracing::debug;

use super::RegionSurvey;
use crate::furniture::ChairTally;

/// Chair counts per room name, accumulated over a full scan.
///
/// Names are kept exactly as written, so case and spacing matter. A room
/// split into several regions is summed into one entry. Regions without a
/// name never reach `rooms`; their chairs are only kept in `unclaimed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomRegistry {
    rooms: BTreeMap<String, ChairTally>,
    unclaimed: ChairTally,
    unnamed_regions: usize,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one region into the registry
    pub fn absorb(&mut self, survey: RegionSurvey) {
        let RegionSurvey { origin, name, chairs, .. } = survey;

        match name {
            Some(name) => match self.rooms.get_mut(&name) {
                Some(existing) => {
                    debug!("Updating room: {} with chairs: {}", name, chairs);
                    existing.absorb(&chairs);
                }
                None => {
                    debug!("New room is found: {} with chairs: {}", name, chairs);
                    self.rooms.insert(name, chairs);
                }
            },
            None => {
                debug!("Unnamed area starting at {}; skipping", origin);
                self.unnamed_regions += 1;
                self.unclaimed.absorb(&chairs);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ChairTally> {
        self.rooms.get(name)
    }

    /// Rooms in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChairTally)> {
        self.rooms.iter().map(|(name, chairs)| (name.as_str(), chairs))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Chairs found in regions that had no room name
    pub fn unclaimed(&self) -> &ChairTally {
        &self.unclaimed
    }

    pub fn unnamed_regions(&self) -> usize {
        self.unnamed_regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChairSet;
    use crate::plan::Cell;

    fn survey(name: Option<&str>, chairs: &[char]) -> RegionSurvey {
        let mut tally = ChairTally::zeroed(&ChairSet::default());
        for &c in chairs {
            tally.record(c);
        }
        RegionSurvey {
            origin: Cell::new(0, 0),
            name: name.map(str::to_string),
            chairs: tally,
            size: 1,
        }
    }

    #[test]
    fn test_same_name_is_merged() {
        let mut registry = RoomRegistry::new();
        registry.absorb(survey(Some("kitchen"), &['W', 'W']));
        registry.absorb(survey(Some("kitchen"), &['W', 'S']));

        assert_eq!(registry.len(), 1);
        let kitchen = registry.get("kitchen").unwrap();
        assert_eq!(kitchen.get('W'), 3);
        assert_eq!(kitchen.get('S'), 1);
    }

    #[test]
    fn test_names_are_exact() {
        let mut registry = RoomRegistry::new();
        registry.absorb(survey(Some("office"), &['P']));
        registry.absorb(survey(Some("Office"), &['P']));
        registry.absorb(survey(Some("office "), &['P']));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_unnamed_region_is_dropped() {
        let mut registry = RoomRegistry::new();
        registry.absorb(survey(None, &['C', 'C']));
        registry.absorb(survey(Some("toilet"), &[]));

        assert_eq!(registry.len(), 1);
        assert!(registry.get("toilet").unwrap().is_empty());
        assert_eq!(registry.unclaimed().get('C'), 2);
        assert_eq!(registry.unnamed_regions(), 1);
    }

    #[test]
    fn test_iter_is_alphabetical() {
        let mut registry = RoomRegistry::new();
        for name in ["toilet", "balcony", "living room", "kitchen"] {
            registry.absorb(survey(Some(name), &[]));
        }
        let names: Vec<_> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["balcony", "kitchen", "living room", "toilet"]);
    }
}
