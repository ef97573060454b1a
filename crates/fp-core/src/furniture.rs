//! Chair kinds and per-region chair counters

use serde::ser::{Serialize, SerializeMap, Serializer};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::config::ChairSet;

/// The chair kinds drawn on a standard floor plan.
///
/// Iteration order is the display order of a report: `W, P, S, C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ChairKind {
    #[strum(serialize = "wooden chair")]
    Wooden,
    #[strum(serialize = "plastic chair")]
    Plastic,
    #[strum(serialize = "sofa")]
    Sofa,
    #[strum(serialize = "china chair")]
    China,
}

impl ChairKind {
    /// Character used for this chair on the plan
    pub const fn symbol(&self) -> char {
        match self {
            ChairKind::Wooden => 'W',
            ChairKind::Plastic => 'P',
            ChairKind::Sofa => 'S',
            ChairKind::China => 'C',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::iter().find(|kind| kind.symbol() == symbol)
    }

    /// Symbols of all standard kinds, in display order
    pub fn symbols() -> Vec<char> {
        Self::iter().map(|kind| kind.symbol()).collect()
    }
}

/// Count of each chair kind, keyed by the chair's plan symbol.
///
/// A tally created from a [`ChairSet`] holds every kind of the set, in
/// the set's order, starting at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChairTally {
    counts: Vec<(char, u32)>,
}

impl ChairTally {
    /// All kinds of `chairs` at zero
    pub fn zeroed(chairs: &ChairSet) -> Self {
        Self {
            counts: chairs.iter().map(|symbol| (symbol, 0)).collect(),
        }
    }

    /// Count one chair. Returns false if `symbol` is not a tracked kind.
    pub fn record(&mut self, symbol: char) -> bool {
        match self.counts.iter_mut().find(|(s, _)| *s == symbol) {
            Some((_, count)) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, symbol: char) -> u32 {
        self.counts
            .iter()
            .find(|(s, _)| *s == symbol)
            .map_or(0, |(_, count)| *count)
    }

    /// Add every count of `other` into this tally.
    ///
    /// Kinds unknown to this tally are appended after the existing ones.
    pub fn absorb(&mut self, other: &ChairTally) {
        for &(symbol, count) in &other.counts {
            match self.counts.iter_mut().find(|(s, _)| *s == symbol) {
                Some((_, existing)) => *existing += count,
                None => self.counts.push((symbol, count)),
            }
        }
    }

    /// Same counts, laid out in `chairs` order with missing kinds at zero.
    /// Kinds outside `chairs` are dropped.
    pub fn ordered_by(&self, chairs: &ChairSet) -> Self {
        Self {
            counts: chairs.iter().map(|symbol| (symbol, self.get(symbol))).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.counts.iter().copied()
    }

    /// Sum over all kinds
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl std::fmt::Display for ChairTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (symbol, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", symbol, count)?;
        }
        Ok(())
    }
}

impl Serialize for ChairTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (symbol, count) in self.iter() {
            map.serialize_entry(&symbol, &count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_symbols_in_display_order() {
        assert_eq!(ChairKind::symbols(), vec!['W', 'P', 'S', 'C']);
        assert_eq!(ChairKind::from_symbol('S'), Some(ChairKind::Sofa));
        assert_eq!(ChairKind::from_symbol('x'), None);
        assert_eq!(ChairKind::China.to_string(), "china chair");
    }

    #[test]
    fn test_zeroed_tally_has_every_kind() {
        let tally = ChairTally::zeroed(&ChairSet::default());
        assert_eq!(tally.to_string(), "W: 0, P: 0, S: 0, C: 0");
        assert!(tally.is_empty());
    }

    #[test]
    fn test_record_ignores_unknown_symbols() {
        let mut tally = ChairTally::zeroed(&ChairSet::default());
        assert!(tally.record('P'));
        assert!(tally.record('P'));
        assert!(!tally.record('x'));
        assert_eq!(tally.get('P'), 2);
        assert_eq!(tally.get('x'), 0);
        assert_eq!(tally.total(), 2);
    }

    #[test]
    fn test_absorb_sums_counts() {
        let chairs = ChairSet::default();
        let mut a = ChairTally::zeroed(&chairs);
        a.record('W');
        a.record('S');
        let mut b = ChairTally::zeroed(&chairs);
        b.record('W');
        b.record('C');

        a.absorb(&b);
        assert_eq!(a.to_string(), "W: 2, P: 0, S: 1, C: 1");
    }

    #[test]
    fn test_ordered_by_reorders_and_fills() {
        let mut tally = ChairTally::zeroed(&ChairSet::from_symbols(['C', 'W']));
        tally.record('C');
        let ordered = tally.ordered_by(&ChairSet::default());
        assert_eq!(ordered.to_string(), "W: 0, P: 0, S: 0, C: 1");
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let mut tally = ChairTally::zeroed(&ChairSet::default());
        tally.record('S');
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(json, r#"{"W":0,"P":0,"S":1,"C":0}"#);
    }
}
