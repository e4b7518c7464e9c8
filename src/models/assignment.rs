//! Assignment (solution) model.
//!
//! An assignment maps every user to the ordered list of chore instances
//! they must perform. Users are addressed by their position in the
//! canonical user order and chores by their position in the canonical
//! chore order, so the structure is a plain `Vec<Vec<usize>>`.
//!
//! # Conservation
//! The multiset union of all users' lists always equals the multiset of
//! all chore instances. Builders and neighbor moves only ever move or
//! exchange instances; see [`Assignment::instance_histogram`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ChoreIndex, User};

/// A complete chore assignment.
///
/// `Clone` produces a fully independent deep copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    loads: Vec<Vec<usize>>,
}

/// Named form of an assignment: user name → chore names.
pub type NamedSchedule = BTreeMap<String, Vec<String>>;

impl Assignment {
    /// Creates an assignment with `user_count` empty lists.
    pub fn empty(user_count: usize) -> Self {
        Self {
            loads: vec![Vec::new(); user_count],
        }
    }

    /// Creates an assignment from per-user chore index lists.
    pub fn from_loads(loads: Vec<Vec<usize>>) -> Self {
        Self { loads }
    }

    /// Number of users.
    #[inline]
    pub fn user_count(&self) -> usize {
        self.loads.len()
    }

    /// Chore instances assigned to a user.
    #[inline]
    pub fn load(&self, user: usize) -> &[usize] {
        &self.loads[user]
    }

    /// Mutable chore instances of a user.
    #[inline]
    pub(crate) fn load_mut(&mut self, user: usize) -> &mut Vec<usize> {
        &mut self.loads[user]
    }

    /// Adds one chore instance to a user.
    pub fn push(&mut self, user: usize, chore: usize) {
        self.loads[user].push(chore);
    }

    /// Number of instances assigned to a user.
    #[inline]
    pub fn count(&self, user: usize) -> usize {
        self.loads[user].len()
    }

    /// Per-user instance counts.
    pub fn counts(&self) -> Vec<usize> {
        self.loads.iter().map(|l| l.len()).collect()
    }

    /// Total number of assigned instances.
    pub fn total_instances(&self) -> usize {
        self.loads.iter().map(|l| l.len()).sum()
    }

    /// Iterates over `(user position, instances)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.loads.iter().enumerate().map(|(i, l)| (i, l.as_slice()))
    }

    /// Number of assigned instances per chore position.
    ///
    /// Two assignments over the same chores conserve instances iff their
    /// histograms are equal.
    pub fn instance_histogram(&self, chore_count: usize) -> Vec<usize> {
        let mut histogram = vec![0; chore_count];
        for load in &self.loads {
            for &chore in load {
                if let Some(slot) = histogram.get_mut(chore) {
                    *slot += 1;
                }
            }
        }
        histogram
    }

    /// Converts to the named form using the canonical user and chore order.
    pub fn to_named(&self, users: &[User], index: &ChoreIndex) -> NamedSchedule {
        users
            .iter()
            .zip(&self.loads)
            .map(|(user, load)| {
                let chores = load
                    .iter()
                    .filter_map(|&c| index.name(c).map(str::to_string))
                    .collect();
                (user.name.clone(), chores)
            })
            .collect()
    }
}
