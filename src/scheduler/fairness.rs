//! Fairness objective for the annealing search.
//!
//! # Score
//!
//! | Term | Definition |
//! |------|-----------|
//! | Base | `J(ratios) × 100`, ratio = assigned / capacity (0 if capacity 0) |
//! | Overload | `−Σ max(0, ratio − 1) × (1 + (1 − J) × 1000)` when some ratio > 1 and J < 1 |
//! | Loved | `+5` per assigned instance of a loved chore |
//! | Hated | `−5` per assigned instance of a hated chore |
//! | Difficulty | `D` if `D ≥ 0`, else `−(D / 3)²`, D = sum of assigned difficulty |
//!
//! Jain's index alone cannot tell "everyone equally overloaded" from
//! "one person overloaded"; the overload term grows with unevenness so
//! only the latter is punished hard.
//!
//! The score is unbounded and never normalized. For a bounded,
//! human-facing number see [`QualityReporter`](super::QualityReporter).
//!
//! # Reference
//! Jain, Chiu & Hawe (1984), DEC-TR-301

use serde::{Deserialize, Serialize};

use crate::models::Assignment;

use super::ChoreProblem;

/// Weights of the fairness objective.
///
/// Defaults reproduce the canonical scoring rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FairnessWeights {
    /// Multiplier of Jain's index.
    pub base: f64,
    /// Bonus per loved instance.
    pub love: f64,
    /// Penalty per hated instance (positive number, subtracted).
    pub hate: f64,
    /// Divisor applied to negative difficulty sums before squaring.
    pub difficulty_scale: f64,
    /// How sharply overload penalty grows with unfairness.
    pub overload_steepness: f64,
}

impl Default for FairnessWeights {
    fn default() -> Self {
        Self {
            base: 100.0,
            love: 5.0,
            hate: 5.0,
            difficulty_scale: 3.0,
            overload_steepness: 1000.0,
        }
    }
}

/// Jain's fairness index: `(Σx)² / (n · Σx²)`.
///
/// Returns 1.0 when the denominator is zero (empty input or all zeros).
/// Otherwise the value lies in `(0, 1]`, reaching 1 iff all values are equal.
pub fn jain_index(values: &[f64]) -> f64 {
    let sum: f64 = values.iter().sum();
    let sum_sq: f64 = values.iter().map(|x| x * x).sum();
    let denominator = values.len() as f64 * sum_sq;
    if denominator == 0.0 {
        return 1.0;
    }
    sum * sum / denominator
}

/// Per-user `assigned / max_chores` in canonical user order.
///
/// Zero-capacity users get a ratio of 0.
pub fn load_ratios(problem: &ChoreProblem, assignment: &Assignment) -> Vec<f64> {
    problem
        .users()
        .iter()
        .enumerate()
        .map(|(i, user)| {
            if user.max_chores == 0 {
                0.0
            } else {
                assignment.count(i) as f64 / f64::from(user.max_chores)
            }
        })
        .collect()
}

/// Scores candidate assignments; used as the optimization objective.
#[derive(Debug, Clone, Default)]
pub struct FairnessEvaluator {
    weights: FairnessWeights,
}

impl FairnessEvaluator {
    /// Creates an evaluator with default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weights.
    pub fn with_weights(mut self, weights: FairnessWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Current weights.
    pub fn weights(&self) -> &FairnessWeights {
        &self.weights
    }

    /// Scores an assignment. Higher is better.
    pub fn score(&self, problem: &ChoreProblem, assignment: &Assignment) -> f64 {
        let w = &self.weights;
        let ratios = load_ratios(problem, assignment);
        let fairness = jain_index(&ratios);
        let mut score = fairness * w.base;

        if fairness < 1.0 && ratios.iter().any(|&r| r > 1.0) {
            let excess: f64 = ratios.iter().map(|&r| (r - 1.0).max(0.0)).sum();
            score -= excess * (1.0 + (1.0 - fairness) * w.overload_steepness);
        }

        for (i, user) in problem.users().iter().enumerate() {
            let load = assignment.load(i);
            let loved = load.iter().filter(|&&c| user.loves(c)).count() as f64;
            let hated = load.iter().filter(|&&c| user.hates(c)).count() as f64;
            score += loved * w.love - hated * w.hate;

            if user.has_difficulty() {
                let total: f64 = load.iter().map(|&c| user.difficulty_of(c)).sum();
                score += self.difficulty_term(total);
            }
        }

        score
    }

    /// Quadratic penalty below zero, linear bonus at or above.
    fn difficulty_term(&self, total: f64) -> f64 {
        if total < 0.0 {
            let scaled = total / self.weights.difficulty_scale;
            -(scaled * scaled)
        } else {
            total
        }
    }
}
