//! Local-search moves over assignments.
//!
//! # Moves
//!
//! | Move | Precondition | Effect |
//! |------|-------------|--------|
//! | Swap | both users hold ≥ 1 instance | exchange one random instance each |
//! | Reassign | source holds ≥ 1 instance | move one random instance source → target |
//!
//! The move kind is drawn uniformly; if it is not applicable to the
//! sampled pair the other kind is tried, and if neither applies the copy
//! is left unchanged. Both moves conserve the global instance multiset.

use rand::Rng;

use crate::models::Assignment;

/// Kind of local mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Exchange one instance between two users.
    Swap,
    /// Move one instance from one user to another.
    Reassign,
}

/// Proposes randomly mutated copies of an assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborGenerator;

impl NeighborGenerator {
    /// Creates a generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates `count` independent neighbors, each one move away.
    ///
    /// With fewer than two users no move exists and a single unchanged
    /// copy is returned.
    pub fn neighbors<R: Rng>(
        &self,
        assignment: &Assignment,
        count: usize,
        rng: &mut R,
    ) -> Vec<Assignment> {
        if assignment.user_count() < 2 {
            return vec![assignment.clone()];
        }

        (0..count)
            .map(|_| {
                let mut neighbor = assignment.clone();
                self.mutate(&mut neighbor, rng);
                neighbor
            })
            .collect()
    }

    /// Applies one random move in place.
    ///
    /// Returns the move applied, or `None` if the sampled pair admits no
    /// move (both users empty) or there are fewer than two users.
    pub fn mutate<R: Rng>(&self, assignment: &mut Assignment, rng: &mut R) -> Option<MoveKind> {
        let user_count = assignment.user_count();
        if user_count < 2 {
            return None;
        }

        let source = rng.random_range(0..user_count);
        let mut target = rng.random_range(0..user_count - 1);
        if target >= source {
            target += 1;
        }

        let preferred = if rng.random_bool(0.5) {
            MoveKind::Swap
        } else {
            MoveKind::Reassign
        };

        let can_swap = assignment.count(source) > 0 && assignment.count(target) > 0;
        let can_reassign = assignment.count(source) > 0;

        let kind = match preferred {
            MoveKind::Swap if can_swap => MoveKind::Swap,
            MoveKind::Reassign if can_reassign => MoveKind::Reassign,
            _ if can_swap => MoveKind::Swap,
            _ if can_reassign => MoveKind::Reassign,
            _ => return None,
        };

        match kind {
            MoveKind::Swap => swap(assignment, source, target, rng),
            MoveKind::Reassign => reassign(assignment, source, target, rng),
        }
        Some(kind)
    }
}

fn swap<R: Rng>(assignment: &mut Assignment, a: usize, b: usize, rng: &mut R) {
    let i = rng.random_range(0..assignment.count(a));
    let j = rng.random_range(0..assignment.count(b));
    let from_a = assignment.load(a)[i];
    let from_b = assignment.load(b)[j];
    assignment.load_mut(a)[i] = from_b;
    assignment.load_mut(b)[j] = from_a;
}

fn reassign<R: Rng>(assignment: &mut Assignment, source: usize, target: usize, rng: &mut R) {
    let i = rng.random_range(0..assignment.count(source));
    let chore = assignment.load_mut(source).remove(i);
    assignment.push(target, chore);
}
