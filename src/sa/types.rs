//! Problem definition trait for simulated annealing.

use rand::Rng;

/// An optimization problem solvable by [`SaRunner`](super::SaRunner).
///
/// # Score Convention
/// **Higher score = better.** `evaluate` must be a pure function of its
/// input: calling it twice on the same solution yields the same value.
pub trait SaProblem {
    /// Candidate solution type. `Clone` must be a deep copy.
    type Solution: Clone;

    /// Objective value of a solution.
    fn evaluate(&self, solution: &Self::Solution) -> f64;

    /// Number of neighbors to generate per iteration.
    fn candidate_count(&self, current: &Self::Solution) -> usize;

    /// Generates up to `count` independent neighbors of `current`.
    ///
    /// Each neighbor is a single local mutation of `current`, not a chain.
    /// Returning an empty list means the step is skipped.
    fn neighbors<R: Rng>(
        &self,
        current: &Self::Solution,
        count: usize,
        rng: &mut R,
    ) -> Vec<Self::Solution>;
}
