//! Chore name ↔ position mapping.

use std::collections::HashMap;

use super::Chore;

/// Bijection between chore names and their position in the canonical
/// chore list.
///
/// Built once at construction. Positions index difficulty vectors and
/// preference sets; names are what users see in the output.
#[derive(Debug, Clone, Default)]
pub struct ChoreIndex {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl ChoreIndex {
    /// Builds the index from the canonical chore order.
    ///
    /// If a name repeats, the first position wins; duplicate names are
    /// rejected earlier by validation.
    pub fn new(chores: &[Chore]) -> Self {
        let mut positions = HashMap::with_capacity(chores.len());
        for (i, chore) in chores.iter().enumerate() {
            positions.entry(chore.name.clone()).or_insert(i);
        }
        Self {
            names: chores.iter().map(|c| c.name.clone()).collect(),
            positions,
        }
    }

    /// Position of a chore by name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Name of the chore at a position.
    pub fn name(&self, position: usize) -> Option<&str> {
        self.names.get(position).map(|s| s.as_str())
    }

    /// Number of distinct chores.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
