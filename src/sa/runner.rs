//! Simulated annealing runner.
//!
//! # Algorithm
//!
//! ```text
//! current ← initial, best ← initial, T ← T₀
//! repeat max_iterations times:
//!     candidate ← uniform pick among neighbors(current)
//!     Δ ← f(candidate) − f(current)
//!     accept if Δ > 0, else with probability exp(Δ / T) (0 when T = 0)
//!     if f(current) > f(best): best ← current
//!     T ← cool(T)
//! return best
//! ```
//!
//! The loop has no convergence detection; it always runs the configured
//! number of iterations. The best solution is returned rather than the
//! current one, since accepted worsening moves can leave `current` below
//! the best seen.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::{SaConfig, SaProblem};

/// Outcome of an annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S> {
    /// Best solution seen.
    pub best: S,
    /// Score of `best`.
    pub best_score: f64,
    /// Iterations executed.
    pub iterations: usize,
    /// Candidates accepted (improving or not).
    pub accepted: usize,
    /// Times the best solution was replaced.
    pub improved: usize,
    /// Temperature after the last iteration.
    pub final_temperature: f64,
    /// Best score after each iteration (empty unless history is recorded).
    pub best_history: Vec<f64>,
}

/// Executes simulated annealing over an [`SaProblem`].
pub struct SaRunner;

impl SaRunner {
    /// Runs annealing from `initial`.
    ///
    /// Uses a `SmallRng` seeded from `config.seed` when present, the
    /// thread RNG otherwise.
    pub fn run<P: SaProblem>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
    ) -> SaResult<P::Solution> {
        match config.seed {
            Some(seed) => {
                let mut rng = SmallRng::seed_from_u64(seed);
                Self::run_with_rng(problem, initial, config, &mut rng)
            }
            None => {
                let mut rng = rand::rng();
                Self::run_with_rng(problem, initial, config, &mut rng)
            }
        }
    }

    /// Runs annealing with an injected random source.
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
        rng: &mut R,
    ) -> SaResult<P::Solution> {
        let mut current_score = problem.evaluate(&initial);
        let mut current = initial;
        let mut best = current.clone();
        let mut best_score = current_score;
        let mut temperature = config.initial_temperature;

        let mut accepted = 0;
        let mut improved = 0;
        let mut best_history = Vec::new();
        if config.record_history {
            best_history.reserve(config.max_iterations);
        }

        for iteration in 0..config.max_iterations {
            let count = problem.candidate_count(&current);
            let mut neighbors = problem.neighbors(&current, count, rng);

            if !neighbors.is_empty() {
                let pick = rng.random_range(0..neighbors.len());
                let candidate = neighbors.swap_remove(pick);
                let candidate_score = problem.evaluate(&candidate);
                let delta = candidate_score - current_score;

                let accept = if delta > 0.0 {
                    true
                } else {
                    let probability = if temperature > 0.0 {
                        (delta / temperature).exp()
                    } else {
                        0.0
                    };
                    rng.random::<f64>() < probability
                };

                if accept {
                    trace!(iteration, delta, temperature, "candidate accepted");
                    current = candidate;
                    current_score = candidate_score;
                    accepted += 1;
                }

                if current_score > best_score {
                    best = current.clone();
                    best_score = current_score;
                    improved += 1;
                }
            }

            if config.record_history {
                best_history.push(best_score);
            }
            temperature = config.cooling.cool(temperature);
        }

        debug!(
            iterations = config.max_iterations,
            accepted,
            improved,
            best_score,
            final_temperature = temperature,
            "annealing finished"
        );

        SaResult {
            best,
            best_score,
            iterations: config.max_iterations,
            accepted,
            improved,
            final_temperature: temperature,
            best_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::CoolingSchedule;

    /// Maximize -(x - target)² over integers with ±1 steps.
    struct Parabola {
        target: i64,
    }

    impl SaProblem for Parabola {
        type Solution = i64;

        fn evaluate(&self, x: &i64) -> f64 {
            -((x - self.target) as f64).powi(2)
        }

        fn candidate_count(&self, _current: &i64) -> usize {
            2
        }

        fn neighbors<R: Rng>(&self, current: &i64, count: usize, rng: &mut R) -> Vec<i64> {
            (0..count)
                .map(|_| if rng.random_bool(0.5) { current + 1 } else { current - 1 })
                .collect()
        }
    }

    /// Neighborhood that never produces candidates.
    struct Frozen;

    impl SaProblem for Frozen {
        type Solution = i64;

        fn evaluate(&self, x: &i64) -> f64 {
            *x as f64
        }

        fn candidate_count(&self, _current: &i64) -> usize {
            0
        }

        fn neighbors<R: Rng>(&self, _current: &i64, _count: usize, _rng: &mut R) -> Vec<i64> {
            Vec::new()
        }
    }

    #[test]
    fn test_zero_iterations_returns_initial() {
        let problem = Parabola { target: 10 };
        let config = SaConfig::default().with_max_iterations(0).with_seed(1);
        let result = SaRunner::run(&problem, 3, &config);

        assert_eq!(result.best, 3);
        assert!((result.best_score - problem.evaluate(&3)).abs() < 1e-10);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.accepted, 0);
        assert!((result.final_temperature - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_converges_on_parabola() {
        let problem = Parabola { target: 10 };
        let config = SaConfig::default()
            .with_max_iterations(2000)
            .with_initial_temperature(5.0)
            .with_seed(42);
        let result = SaRunner::run(&problem, -20, &config);

        assert_eq!(result.best, 10);
        assert!((result.best_score - 0.0).abs() < 1e-10);
        assert!(result.improved > 0);
    }

    #[test]
    fn test_best_history_non_decreasing() {
        let problem = Parabola { target: 0 };
        let config = SaConfig::default()
            .with_max_iterations(300)
            .with_seed(7)
            .with_history(true);
        let result = SaRunner::run(&problem, 40, &config);

        assert_eq!(result.best_history.len(), 300);
        for pair in result.best_history.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert!((result.best_history[299] - result.best_score).abs() < 1e-10);
    }

    #[test]
    fn test_zero_temperature_rejects_worse() {
        // At T = 0 only improving moves are accepted, so current never
        // moves away from the optimum once reached.
        let problem = Parabola { target: 0 };
        let config = SaConfig::default()
            .with_max_iterations(100)
            .with_initial_temperature(0.0)
            .with_seed(3);
        let result = SaRunner::run(&problem, 0, &config);

        assert_eq!(result.best, 0);
        assert_eq!(result.accepted, 0);
    }

    #[test]
    fn test_cooling_applied_each_iteration() {
        let config = SaConfig::default()
            .with_max_iterations(10)
            .with_initial_temperature(100.0)
            .with_cooling(CoolingSchedule::Linear { step: 5.0 });
        let result = SaRunner::run(&Frozen, 1, &config);

        assert!((result.final_temperature - 50.0).abs() < 1e-10);
        assert_eq!(result.best, 1);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let problem = Parabola { target: 5 };
        let config = SaConfig::default()
            .with_max_iterations(200)
            .with_seed(99)
            .with_history(true);
        let a = SaRunner::run(&problem, -5, &config);
        let b = SaRunner::run(&problem, -5, &config);

        assert_eq!(a.best, b.best);
        assert_eq!(a.accepted, b.accepted);
        assert_eq!(a.best_history, b.best_history);
    }
}
