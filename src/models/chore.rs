//! Chore model.
//!
//! A chore is a recurring piece of household work that must be performed
//! `amount` times per scheduling period. Each repetition is an *instance*;
//! instances of the same chore are interchangeable, but every instance is
//! assigned to exactly one user.

use serde::{Deserialize, Serialize};

/// A chore with its required number of instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    /// Unique chore name.
    pub name: String,
    /// Number of instances that must be assigned (positive).
    pub amount: u32,
}

impl Chore {
    /// Creates a chore with the given repetition count.
    pub fn new(name: impl Into<String>, amount: u32) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Total number of instances across all chores.
pub fn total_instances(chores: &[Chore]) -> usize {
    chores.iter().map(|c| c.amount as usize).sum()
}
