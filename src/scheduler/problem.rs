//! Validated chore scheduling problem.
//!
//! Bundles the entities with the derived lookup structures every
//! component needs: the canonical user order, the chore index, and the
//! total instance count.

use tracing::debug;

use crate::models::{total_instances, Chore, ChoreIndex, User};
use crate::validation::{validate_input, InvalidInputError};

/// A validated, immutable chore scheduling problem.
///
/// # Canonical User Order
/// Users are stably sorted by `max_chores` descending. Assignment user
/// positions refer to this order.
#[derive(Debug, Clone)]
pub struct ChoreProblem {
    chores: Vec<Chore>,
    users: Vec<User>,
    index: ChoreIndex,
    total_instances: usize,
}

impl ChoreProblem {
    /// Validates the entities and builds the problem.
    ///
    /// # Errors
    /// Returns [`InvalidInputError`] if the chore or user list is empty,
    /// or any other validation check fails.
    pub fn new(chores: Vec<Chore>, mut users: Vec<User>) -> Result<Self, InvalidInputError> {
        for user in &mut users {
            user.normalize_difficulty();
        }
        validate_input(&chores, &users)?;

        users.sort_by(|a, b| b.max_chores.cmp(&a.max_chores));
        let index = ChoreIndex::new(&chores);
        let total_instances = total_instances(&chores);

        debug!(
            chores = chores.len(),
            users = users.len(),
            total_instances,
            "chore problem constructed"
        );

        Ok(Self {
            chores,
            users,
            index,
            total_instances,
        })
    }

    /// Chores in canonical order.
    pub fn chores(&self) -> &[Chore] {
        &self.chores
    }

    /// Users in canonical (capacity-descending) order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Chore name ↔ position index.
    pub fn index(&self) -> &ChoreIndex {
        &self.index
    }

    /// Total number of chore instances.
    pub fn total_instances(&self) -> usize {
        self.total_instances
    }

    /// Sum of all users' capacities.
    pub fn total_capacity(&self) -> u64 {
        self.users.iter().map(|u| u64::from(u.max_chores)).sum()
    }

    /// All chore instances in chore order, each chore repeated `amount` times.
    pub fn instances(&self) -> impl Iterator<Item = usize> + '_ {
        self.chores
            .iter()
            .enumerate()
            .flat_map(|(i, c)| std::iter::repeat(i).take(c.amount as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::QualityReporter;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_users_sorted_by_capacity() {
        let problem = ChoreProblem::new(
            vec![Chore::new("dishes", 1)],
            vec![User::new("A", 1), User::new("B", 5), User::new("C", 3), User::new("D", 5)],
        )
        .unwrap();

        let names: Vec<_> = problem.users().iter().map(|u| u.name.as_str()).collect();
        // Stable: B before D
        assert_eq!(names, vec!["B", "D", "C", "A"]);
        assert_eq!(problem.total_capacity(), 14);
    }

    #[test]
    fn test_instances_flatten() {
        let problem = ChoreProblem::new(
            vec![Chore::new("dishes", 2), Chore::new("trash", 1), Chore::new("mop", 3)],
            vec![User::new("A", 1)],
        )
        .unwrap();

        let instances: Vec<_> = problem.instances().collect();
        assert_eq!(instances, vec![0, 0, 1, 2, 2, 2]);
        assert_eq!(problem.total_instances(), 6);
    }

    #[test]
    fn test_zero_difficulty_normalized_on_construction() {
        let chores = vec![Chore::new("dishes", 1), Chore::new("trash", 1)];
        let built = vec![
            User::new("A", 1).with_difficulty(vec![5.0, 10.0]),
            User::new("B", 1).with_difficulty(vec![0.0, 0.0]),
        ];
        let deserialized: Vec<User> = serde_json::from_str(
            r#"[
                {"name": "A", "max_chores": 1, "difficulty": [5.0, 10.0]},
                {"name": "B", "max_chores": 1, "difficulty": [0.0, 0.0]}
            ]"#,
        )
        .unwrap();

        let from_builder = ChoreProblem::new(chores.clone(), built).unwrap();
        let from_serde = ChoreProblem::new(chores, deserialized).unwrap();
        assert!(from_serde.users()[1].difficulty.is_none());

        let assignment = crate::models::Assignment::from_loads(vec![vec![0], vec![1]]);
        let a = QualityReporter::report(&from_builder, &assignment);
        let b = QualityReporter::report(&from_serde, &assignment);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_chores_rejected() {
        let err = ChoreProblem::new(vec![], vec![User::new("A", 3)]).unwrap_err();
        assert!(err.has(ValidationErrorKind::EmptyChores));
    }

    #[test]
    fn test_empty_users_rejected() {
        let err = ChoreProblem::new(vec![Chore::new("dishes", 1)], vec![]).unwrap_err();
        assert!(err.has(ValidationErrorKind::EmptyUsers));
    }
}
