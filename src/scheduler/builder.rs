//! Initial assignment construction.
//!
//! # Algorithm
//!
//! 1. Flatten chores into instances, preserving chore order.
//! 2. Deal instance `i` to user `i mod N` in canonical user order.
//!
//! Because users are ordered by capacity descending, higher-capacity
//! users receive the extra instance when the split is uneven.
//!
//! # Complexity
//! O(I) where I = total chore instances.

use crate::models::Assignment;

use super::ChoreProblem;

/// Builds the deterministic round-robin starting assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleBuilder;

impl ScheduleBuilder {
    /// Deals every chore instance round-robin over the canonical users.
    pub fn build(problem: &ChoreProblem) -> Assignment {
        let user_count = problem.users().len();
        let mut assignment = Assignment::empty(user_count);
        for (i, chore) in problem.instances().enumerate() {
            assignment.push(i % user_count, chore);
        }
        assignment
    }
}
