//! Chore scheduling facade.
//!
//! Wires the builder, evaluator, neighbor generator, and reporter to the
//! generic annealing runner.
//!
//! # Flow
//!
//! ```text
//! entities → ScheduleBuilder → SaRunner (NeighborGenerator + FairnessEvaluator)
//!          → best assignment → QualityReporter
//! ```

use rand::Rng;

use crate::models::{Assignment, Chore, NamedSchedule, User};
use crate::sa::{SaConfig, SaProblem, SaResult, SaRunner};
use crate::validation::{validate_assignment, InvalidInputError};

use super::{
    ChoreProblem, FairnessEvaluator, FairnessWeights, NeighborGenerator, QualityReport,
    QualityReporter, ScheduleBuilder,
};

/// Upper bound on neighbors generated per annealing step.
const MAX_CANDIDATES: usize = 20;

/// Fair chore scheduler.
///
/// # Example
/// ```
/// use chore_schedule::models::{Chore, User};
/// use chore_schedule::sa::SaConfig;
/// use chore_schedule::scheduler::ChoreScheduler;
///
/// let scheduler = ChoreScheduler::new(
///     vec![Chore::new("dishes", 2), Chore::new("cooking", 2)],
///     vec![
///         User::new("Alice", 2).with_loved([1]),
///         User::new("Ben", 2).with_loved([0]),
///     ],
/// )
/// .unwrap();
///
/// let result = scheduler.search(&SaConfig::default().with_seed(1));
/// assert_eq!(result.best.total_instances(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct ChoreScheduler {
    problem: ChoreProblem,
    evaluator: FairnessEvaluator,
    generator: NeighborGenerator,
    initial: Assignment,
}

impl ChoreScheduler {
    /// Validates the entities and builds the initial assignment.
    ///
    /// # Errors
    /// Returns [`InvalidInputError`] if the chore or user list is empty,
    /// or the entities are otherwise malformed.
    pub fn new(chores: Vec<Chore>, users: Vec<User>) -> Result<Self, InvalidInputError> {
        let problem = ChoreProblem::new(chores, users)?;
        let initial = ScheduleBuilder::build(&problem);
        Ok(Self {
            problem,
            evaluator: FairnessEvaluator::new(),
            generator: NeighborGenerator::new(),
            initial,
        })
    }

    /// Sets the objective weights.
    pub fn with_weights(mut self, weights: FairnessWeights) -> Self {
        self.evaluator = self.evaluator.with_weights(weights);
        self
    }

    /// The validated problem.
    pub fn problem(&self) -> &ChoreProblem {
        &self.problem
    }

    /// The round-robin starting assignment.
    pub fn initial_assignment(&self) -> &Assignment {
        &self.initial
    }

    /// Objective value of an assignment (higher is better).
    pub fn evaluate(&self, assignment: &Assignment) -> f64 {
        self.evaluator.score(&self.problem, assignment)
    }

    /// Anneals from the initial assignment.
    pub fn search(&self, config: &SaConfig) -> SaResult<Assignment> {
        SaRunner::run(self, self.initial.clone(), config)
    }

    /// Anneals from the initial assignment with an injected random source.
    pub fn search_with_rng<R: Rng>(&self, config: &SaConfig, rng: &mut R) -> SaResult<Assignment> {
        SaRunner::run_with_rng(self, self.initial.clone(), config, rng)
    }

    /// Anneals from a caller-supplied starting assignment.
    ///
    /// # Errors
    /// Returns [`InvalidInputError`] if `initial` does not have one list
    /// per user or does not hold exactly the problem's chore instances.
    pub fn search_from<R: Rng>(
        &self,
        initial: Assignment,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<Assignment>, InvalidInputError> {
        validate_assignment(self.problem.chores(), self.problem.users().len(), &initial)?;
        Ok(SaRunner::run_with_rng(self, initial, config, rng))
    }

    /// Quality report for an assignment.
    pub fn report(&self, assignment: &Assignment) -> QualityReport {
        QualityReporter::report(&self.problem, assignment)
    }

    /// Named form of an assignment (user name → chore names).
    pub fn named(&self, assignment: &Assignment) -> NamedSchedule {
        assignment.to_named(self.problem.users(), self.problem.index())
    }
}

impl SaProblem for ChoreScheduler {
    type Solution = Assignment;

    fn evaluate(&self, solution: &Assignment) -> f64 {
        ChoreScheduler::evaluate(self, solution)
    }

    fn candidate_count(&self, _current: &Assignment) -> usize {
        (self.problem.total_instances() * 2).min(MAX_CANDIDATES)
    }

    fn neighbors<R: Rng>(&self, current: &Assignment, count: usize, rng: &mut R) -> Vec<Assignment> {
        self.generator.neighbors(current, count, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ScoreGrade;
    use crate::validation::ValidationErrorKind;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn seeded(seed: u64) -> SaConfig {
        SaConfig::default().with_seed(seed)
    }

    fn scheduler(chores: Vec<Chore>, users: Vec<User>) -> ChoreScheduler {
        ChoreScheduler::new(chores, users).unwrap()
    }

    fn count_of(named: &NamedSchedule, user: &str, chore: &str) -> usize {
        named[user].iter().filter(|c| *c == chore).count()
    }

    #[test]
    fn test_empty_chores_rejected() {
        let err = ChoreScheduler::new(vec![], vec![User::new("A", 3)]).unwrap_err();
        assert!(err.has(ValidationErrorKind::EmptyChores));
    }

    #[test]
    fn test_empty_users_rejected() {
        let err = ChoreScheduler::new(vec![Chore::new("dishes", 1)], vec![]).unwrap_err();
        assert!(err.has(ValidationErrorKind::EmptyUsers));
    }

    #[test]
    fn test_candidate_count() {
        let small = scheduler(vec![Chore::new("a", 3)], vec![User::new("A", 3)]);
        assert_eq!(small.candidate_count(small.initial_assignment()), 6);

        let big = scheduler(vec![Chore::new("a", 50)], vec![User::new("A", 3)]);
        assert_eq!(big.candidate_count(big.initial_assignment()), 20);
    }

    #[test]
    fn test_zero_iterations_returns_initial() {
        let s = scheduler(
            vec![Chore::new("dishes", 3), Chore::new("trash", 1)],
            vec![User::new("A", 1), User::new("B", 5)],
        );
        let result = s.search(&seeded(1).with_max_iterations(0));

        assert_eq!(&result.best, s.initial_assignment());
        assert_eq!(result.best_score, s.evaluate(s.initial_assignment()));
    }

    #[test]
    fn test_search_conserves_instances() {
        let s = scheduler(
            vec![Chore::new("a", 4), Chore::new("b", 3), Chore::new("c", 2)],
            vec![User::new("A", 2), User::new("B", 3), User::new("C", 4)],
        );
        let expected = s.initial_assignment().instance_histogram(3);
        let result = s.search(&seeded(17));

        assert_eq!(result.best.total_instances(), 9);
        assert_eq!(result.best.instance_histogram(3), expected);
    }

    #[test]
    fn test_best_score_monotonic() {
        let s = scheduler(
            vec![Chore::new("a", 5), Chore::new("b", 5)],
            vec![
                User::new("A", 2).with_difficulty(vec![-4.0, 3.0]),
                User::new("B", 6).with_hated([0]),
                User::new("C", 3),
            ],
        );
        let result = s.search(&seeded(5).with_history(true));

        for pair in result.best_history.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert!(result.best_score >= s.evaluate(s.initial_assignment()));
        assert!((s.evaluate(&result.best) - result.best_score).abs() < 1e-9);
    }

    #[test]
    fn test_injected_rng_is_reproducible() {
        let s = scheduler(
            vec![Chore::new("a", 3), Chore::new("b", 3)],
            vec![User::new("A", 3).with_loved([1]), User::new("B", 3)],
        );
        let config = SaConfig::default().with_max_iterations(200);
        let a = s.search_with_rng(&config, &mut SmallRng::seed_from_u64(8));
        let b = s.search_with_rng(&config, &mut SmallRng::seed_from_u64(8));
        assert_eq!(a.best, b.best);
        assert_eq!(a.best_score, b.best_score);
    }

    #[test]
    fn test_search_from_rejects_mismatched_assignment() {
        let s = scheduler(
            vec![Chore::new("dishes", 2)],
            vec![User::new("A", 1), User::new("B", 1), User::new("C", 1)],
        );
        let mut rng = SmallRng::seed_from_u64(1);
        let config = seeded(1).with_max_iterations(10);

        let err = s
            .search_from(Assignment::from_loads(vec![vec![0, 0]]), &config, &mut rng)
            .unwrap_err();
        assert!(err.has(ValidationErrorKind::AssignmentMismatch));

        let err = s
            .search_from(Assignment::from_loads(vec![vec![0], vec![], vec![]]), &config, &mut rng)
            .unwrap_err();
        assert!(err.has(ValidationErrorKind::AssignmentMismatch));
    }

    #[test]
    fn test_search_from_custom_start() {
        let s = scheduler(
            vec![Chore::new("dishes", 2)],
            vec![User::new("A", 1), User::new("B", 1)],
        );
        let start = Assignment::from_loads(vec![vec![], vec![0, 0]]);
        let mut rng = SmallRng::seed_from_u64(6);
        let result = s
            .search_from(start, &seeded(6).with_max_iterations(200), &mut rng)
            .unwrap();
        assert_eq!(result.best.counts(), vec![1, 1]);
    }

    #[test]
    fn test_scenario_perfect_balance() {
        let s = scheduler(
            vec![Chore::new("dishes", 2), Chore::new("cooking", 2), Chore::new("trash", 2)],
            vec![
                User::new("User_1", 3).with_difficulty(vec![0.0, 0.0, 0.0]),
                User::new("User_2", 3).with_difficulty(vec![0.0, 0.0, 0.0]),
            ],
        );
        let result = s.search(&seeded(42));
        let report = s.report(&result.best);

        assert!(report.score >= 90.0 && report.score <= 100.0);
        assert_eq!(report.user_loads["User_1"].assigned, 3);
        assert_eq!(report.user_loads["User_2"].assigned, 3);
        assert_eq!(report.score_results, ScoreGrade::Excellent);
    }

    #[test]
    fn test_scenario_single_chore_many_users() {
        let s = scheduler(
            vec![Chore::new("dishes", 1)],
            (1..=4).map(|i| User::new(format!("User_{i}"), 3)).collect(),
        );
        let result = s.search(&seeded(3));
        let report = s.report(&result.best);

        let busy = report.user_loads.values().filter(|l| l.assigned > 0).count();
        assert_eq!(busy, 1);
        // 70 / 4 fairness + 5 + 5 + 20
        assert!((report.score - 47.5).abs() < 1e-10);
    }

    #[test]
    fn test_scenario_strong_preference_conflict() {
        let s = scheduler(
            vec![Chore::new("dishes", 2), Chore::new("cooking", 2), Chore::new("trash", 2)],
            vec![
                User::new("A", 3).with_hated([0]).with_loved([1]),
                User::new("B", 3).with_hated([1]).with_loved([0]),
            ],
        );
        let result = s.search(&seeded(11));
        let named = s.named(&result.best);

        assert_eq!(count_of(&named, "A", "cooking"), 2);
        assert_eq!(count_of(&named, "B", "dishes"), 2);
        assert_eq!(count_of(&named, "A", "dishes"), 0);
        assert_eq!(count_of(&named, "B", "cooking"), 0);
    }

    #[test]
    fn test_scenario_difficulty_routing() {
        let s = scheduler(
            vec![
                Chore::new("dishes", 1),
                Chore::new("cooking", 1),
                Chore::new("trash", 1),
                Chore::new("laundry", 1),
                Chore::new("vacuum", 1),
                Chore::new("mop", 1),
            ],
            vec![
                User::new("A", 3).with_difficulty(vec![5.0, 5.0, 5.0, -5.0, -5.0, -5.0]),
                User::new("B", 3).with_difficulty(vec![-5.0, -5.0, -5.0, 5.0, 5.0, 5.0]),
            ],
        );
        let result = s.search(&seeded(23));
        let named = s.named(&result.best);

        let mut a = named["A"].clone();
        a.sort();
        assert_eq!(a, vec!["cooking", "dishes", "trash"]);
        let report = s.report(&result.best);
        assert!((report.score - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_even_overload_stays_fair() {
        let s = scheduler(
            (0..5).map(|i| Chore::new(format!("chore_{i}"), 3)).collect(),
            vec![User::new("A", 3), User::new("B", 3)],
        );
        let result = s.search(&seeded(2));
        let report = s.report(&result.best);

        let counts: Vec<_> = report.user_loads.values().map(|l| l.assigned).collect();
        assert_eq!(counts.iter().sum::<usize>(), 15);
        assert!(counts.iter().all(|&c| c == 7 || c == 8));
        assert_eq!(report.situation, crate::scheduler::Situation::SevereOverload);
    }

    #[test]
    fn test_report_bounds_over_random_neighbors() {
        let s = scheduler(
            vec![Chore::new("a", 3), Chore::new("b", 2)],
            vec![
                User::new("A", 0).with_difficulty(vec![-10.0, 2.0]),
                User::new("B", 1).with_hated([0, 1]),
                User::new("C", 4).with_loved([0]),
            ],
        );
        let mut rng = SmallRng::seed_from_u64(4);
        let mut current = s.initial_assignment().clone();
        for _ in 0..200 {
            let report = s.report(&current);
            assert!(report.score >= 0.0 && report.score <= 100.0);
            current = s
                .neighbors(&current, 1, &mut rng)
                .pop()
                .unwrap_or(current);
        }
    }
}
