//! User model.
//!
//! Users are the participants chores are distributed to. Each user has a
//! capacity (`max_chores`) and optional signals about individual chores:
//! a difficulty vector aligned to the canonical chore order, and sets of
//! loved and hated chore indices.
//!
//! # Difficulty Convention
//! Positive values mean the chore is easy or pleasant for this user,
//! negative values mean hard or unpleasant. A missing vector is neutral.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A participant who receives chore instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user name.
    pub name: String,
    /// Maximum number of chore instances this user should take on.
    pub max_chores: u32,
    /// Per-chore difficulty, indexed by chore position. `None` = no signal.
    #[serde(default)]
    pub difficulty: Option<Vec<f64>>,
    /// Indices of chores this user dislikes.
    #[serde(default)]
    pub hated_chores: BTreeSet<usize>,
    /// Indices of chores this user prefers.
    #[serde(default)]
    pub loved_chores: BTreeSet<usize>,
}

impl User {
    /// Creates a user with no preference or difficulty data.
    pub fn new(name: impl Into<String>, max_chores: u32) -> Self {
        Self {
            name: name.into(),
            max_chores,
            difficulty: None,
            hated_chores: BTreeSet::new(),
            loved_chores: BTreeSet::new(),
        }
    }

    /// Sets the difficulty vector.
    ///
    /// An empty or all-zero vector carries no information and is stored
    /// as `None`.
    pub fn with_difficulty(mut self, difficulty: Vec<f64>) -> Self {
        self.difficulty = Some(difficulty);
        self.normalize_difficulty();
        self
    }

    /// Drops an empty or all-zero difficulty vector.
    ///
    /// Applied by [`with_difficulty`](Self::with_difficulty) and again when
    /// a problem is constructed, so deserialized users behave the same.
    pub fn normalize_difficulty(&mut self) {
        if self
            .difficulty
            .as_ref()
            .is_some_and(|d| d.iter().all(|&v| v == 0.0))
        {
            self.difficulty = None;
        }
    }

    /// Sets the hated chore indices.
    pub fn with_hated(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.hated_chores = indices.into_iter().collect();
        self
    }

    /// Sets the loved chore indices.
    pub fn with_loved(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.loved_chores = indices.into_iter().collect();
        self
    }

    /// Whether this user supplied difficulty data.
    #[inline]
    pub fn has_difficulty(&self) -> bool {
        self.difficulty.is_some()
    }

    /// Difficulty of a chore for this user (0.0 if unknown).
    #[inline]
    pub fn difficulty_of(&self, chore: usize) -> f64 {
        self.difficulty
            .as_ref()
            .and_then(|d| d.get(chore))
            .copied()
            .unwrap_or(0.0)
    }

    /// Whether this user loves the given chore.
    #[inline]
    pub fn loves(&self, chore: usize) -> bool {
        self.loved_chores.contains(&chore)
    }

    /// Whether this user hates the given chore.
    #[inline]
    pub fn hates(&self, chore: usize) -> bool {
        self.hated_chores.contains(&chore)
    }
}
