//! Parser configuration: which glyphs are walls and which are chairs

use crate::error::{PlanError, Result};
use crate::furniture::ChairKind;

/// Default wall glyphs
pub const DEFAULT_WALL_SEPARATORS: [char; 4] = ['|', '-', '+', '/'];

/// Characters that block traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallSet {
    symbols: Vec<char>,
}

impl WallSet {
    pub fn from_symbols(symbols: impl IntoIterator<Item = char>) -> Self {
        let mut set = Self { symbols: Vec::new() };
        for symbol in symbols {
            if !set.symbols.contains(&symbol) {
                set.symbols.push(symbol);
            }
        }
        set
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for WallSet {
    fn default() -> Self {
        Self::from_symbols(DEFAULT_WALL_SEPARATORS)
    }
}

/// Characters counted as chairs, in report order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChairSet {
    symbols: Vec<char>,
}

impl ChairSet {
    /// Build a set keeping the first position of each symbol
    pub fn from_symbols(symbols: impl IntoIterator<Item = char>) -> Self {
        let mut set = Self { symbols: Vec::new() };
        for symbol in symbols {
            if !set.symbols.contains(&symbol) {
                set.symbols.push(symbol);
            }
        }
        set
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for ChairSet {
    fn default() -> Self {
        Self::from_symbols(ChairKind::symbols())
    }
}

/// Settings fixed for the lifetime of a parser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanConfig {
    pub wall_separators: WallSet,
    pub chair_kinds: ChairSet,
}

impl PlanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wall_separators(mut self, walls: impl IntoIterator<Item = char>) -> Self {
        self.wall_separators = WallSet::from_symbols(walls);
        self
    }

    pub fn with_chair_kinds(mut self, chairs: impl IntoIterator<Item = char>) -> Self {
        self.chair_kinds = ChairSet::from_symbols(chairs);
        self
    }

    /// Reject configurations that cannot count anything
    pub fn validate(&self) -> Result<()> {
        if self.chair_kinds.is_empty() {
            return Err(PlanError::InvalidConfig(
                "at least one chair kind is required".to_string(),
            ));
        }
        if let Some(symbol) = self.chair_kinds.iter().find(|s| self.wall_separators.contains(*s)) {
            return Err(PlanError::InvalidConfig(format!(
                "'{}' cannot be both a wall separator and a chair kind",
                symbol
            )));
        }
        Ok(())
    }
}
