//! Human-facing schedule quality report.
//!
//! Recomputes a bounded 0-100 score for a final assignment. This is a
//! diagnostic only; it is never fed back into the search objective.
//!
//! # Composition
//!
//! | Component | Points | Definition |
//! |-----------|--------|-----------|
//! | Fairness | 0-70 | `J(ratios) × 70` |
//! | Loved | 0-5 | share of loved-chore instances that went to a lover (5 if none loved) |
//! | Hated | 0-5 | `5 × (1 − hated assigned / hated available)` (5 if none hated) |
//! | Difficulty | 0-20 | closeness of each user's mean difficulty to their ideal mean |
//!
//! The total is clamped to `[0, 100]`.
//!
//! # Ideal Difficulty
//! For a user assigned N instances, the ideal mean is the mean of the N
//! most favorable difficulty values over all chore instances: the best
//! that user could get in isolation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Assignment;

use super::fairness::{jain_index, load_ratios};
use super::ChoreProblem;

const FAIRNESS_POINTS: f64 = 70.0;
const PREFERENCE_POINTS: f64 = 5.0;
const DIFFICULTY_POINTS: f64 = 20.0;
/// Fallback deviation weight when nobody supplies difficulty data.
const DEFAULT_DIFFICULTY_WEIGHT: f64 = 3.0;

/// Global load classification from `total instances / total capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Situation {
    /// Capacity ratio above 1.5.
    #[serde(rename = "Severe Overload")]
    SevereOverload,
    /// Capacity ratio above 1.0.
    Overload,
    /// Capacity ratio below 0.6.
    Underload,
    /// Everything else.
    Normal,
}

impl Situation {
    /// Classifies a capacity ratio.
    pub fn from_capacity_ratio(ratio: f64) -> Self {
        if ratio > 1.5 {
            Situation::SevereOverload
        } else if ratio > 1.0 {
            Situation::Overload
        } else if ratio < 0.6 {
            Situation::Underload
        } else {
            Situation::Normal
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Situation::SevereOverload => "Severe Overload",
            Situation::Overload => "Overload",
            Situation::Underload => "Underload",
            Situation::Normal => "Normal",
        }
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Verbal grade of a quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreGrade {
    /// Below 50.
    Bad,
    /// 50 or more.
    Poor,
    /// 60 or more.
    Fair,
    /// 70 or more.
    Acceptable,
    /// 80 or more.
    Good,
    /// 90 or more.
    Excellent,
}

impl ScoreGrade {
    /// Grades a 0-100 score.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            ScoreGrade::Excellent
        } else if score >= 80.0 {
            ScoreGrade::Good
        } else if score >= 70.0 {
            ScoreGrade::Acceptable
        } else if score >= 60.0 {
            ScoreGrade::Fair
        } else if score >= 50.0 {
            ScoreGrade::Poor
        } else {
            ScoreGrade::Bad
        }
    }
}

impl fmt::Display for ScoreGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One user's load relative to capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLoad {
    /// Assigned instances.
    pub assigned: usize,
    /// Capacity (`max_chores`).
    pub capacity: u32,
    /// `assigned / capacity` rounded to 0.01 (0 if capacity is 0).
    pub ratio: f64,
    /// `ratio × 100` rounded to 0.1.
    pub percentage: f64,
}

/// Unrounded points per component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityBreakdown {
    /// Fairness points (0-70).
    pub fairness: f64,
    /// Loved-chore points (0-5).
    pub loved: f64,
    /// Hated-chore points (0-5).
    pub hated: f64,
    /// Difficulty points (0-20).
    pub difficulty: f64,
}

/// Quality report for an assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Total score in `[0, 100]`, rounded to 0.1.
    pub score: f64,
    /// Global load classification.
    pub situation: Situation,
    /// Verbal grade of the score.
    pub score_results: ScoreGrade,
    /// Per-user load, keyed by user name.
    pub user_loads: BTreeMap<String, UserLoad>,
    /// `total instances / total capacity` rounded to 0.01 (0 if no capacity).
    pub capacity_ratio: f64,
    /// Points per component.
    pub breakdown: QualityBreakdown,
}

impl QualityReport {
    /// Whether the report meets a minimum grade.
    pub fn meets_grade(&self, minimum: ScoreGrade) -> bool {
        self.score_results >= minimum
    }
}

/// Computes [`QualityReport`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityReporter;

impl QualityReporter {
    /// Reports on an assignment of the given problem.
    pub fn report(problem: &ChoreProblem, assignment: &Assignment) -> QualityReport {
        let ratios = load_ratios(problem, assignment);
        let fairness = jain_index(&ratios) * FAIRNESS_POINTS;
        let (loved, hated) = preference_points(problem, assignment);
        let difficulty = difficulty_points(problem, assignment);

        let total = (fairness + loved + hated + difficulty).clamp(0.0, 100.0);
        let capacity_ratio = safe_divide(
            problem.total_instances() as f64,
            problem.total_capacity() as f64,
        );
        let situation = Situation::from_capacity_ratio(capacity_ratio);
        if matches!(situation, Situation::Overload | Situation::SevereOverload) {
            warn!(capacity_ratio, %situation, "chores exceed total user capacity");
        }

        let user_loads = problem
            .users()
            .iter()
            .enumerate()
            .map(|(i, user)| {
                let assigned = assignment.count(i);
                let ratio = safe_divide(assigned as f64, f64::from(user.max_chores));
                let load = UserLoad {
                    assigned,
                    capacity: user.max_chores,
                    ratio: round_to(ratio, 2),
                    percentage: round_to(ratio * 100.0, 1),
                };
                (user.name.clone(), load)
            })
            .collect();

        QualityReport {
            score: round_to(total, 1),
            situation,
            score_results: ScoreGrade::from_score(total),
            user_loads,
            capacity_ratio: round_to(capacity_ratio, 2),
            breakdown: QualityBreakdown {
                fairness,
                loved,
                hated,
                difficulty,
            },
        }
    }

    /// Mean of the `count` most favorable difficulty values a user could
    /// receive across all chore instances. 0 without data or assignment,
    /// `None` if `user` is not a position in the problem.
    pub fn ideal_difficulty(problem: &ChoreProblem, user: usize, count: usize) -> Option<f64> {
        let user = problem.users().get(user)?;
        if !user.has_difficulty() || count == 0 {
            return Some(0.0);
        }
        let mut values: Vec<f64> = problem
            .instances()
            .map(|c| user.difficulty_of(c))
            .collect();
        values.sort_by(|a, b| b.total_cmp(a));
        let best = &values[..count.min(values.len())];
        Some(mean(best))
    }
}

/// Loved and hated points.
fn preference_points(problem: &ChoreProblem, assignment: &Assignment) -> (f64, f64) {
    let users = problem.users();

    let mut loved_available = 0usize;
    let mut hated_available = 0usize;
    for (idx, chore) in problem.chores().iter().enumerate() {
        if users.iter().any(|u| u.loves(idx)) {
            loved_available += chore.amount as usize;
        }
        if users.iter().any(|u| u.hates(idx)) {
            hated_available += chore.amount as usize;
        }
    }

    let mut loved_assigned = 0usize;
    let mut hated_assigned = 0usize;
    for (i, load) in assignment.iter() {
        let user = &users[i];
        loved_assigned += load.iter().filter(|&&c| user.loves(c)).count();
        hated_assigned += load.iter().filter(|&&c| user.hates(c)).count();
    }

    let loved = if loved_available > 0 {
        let ratio = loved_assigned as f64 / loved_available as f64;
        (ratio * PREFERENCE_POINTS).clamp(0.0, PREFERENCE_POINTS)
    } else {
        PREFERENCE_POINTS
    };

    let hated = if hated_available > 0 {
        let ratio = hated_assigned as f64 / hated_available as f64;
        (PREFERENCE_POINTS * (1.0 - ratio)).max(0.0)
    } else {
        PREFERENCE_POINTS
    };

    (loved, hated)
}

/// Difficulty points from mean deviation between actual and ideal means.
fn difficulty_points(problem: &ChoreProblem, assignment: &Assignment) -> f64 {
    let mut deviations = Vec::new();
    let mut all_values: Vec<f64> = Vec::new();

    for (i, user) in problem.users().iter().enumerate() {
        let Some(difficulty) = &user.difficulty else {
            continue;
        };
        all_values.extend(difficulty.iter().copied());

        let load = assignment.load(i);
        if load.is_empty() {
            deviations.push(0.0);
            continue;
        }
        let actual: Vec<f64> = load.iter().map(|&c| user.difficulty_of(c)).collect();
        let ideal = QualityReporter::ideal_difficulty(problem, i, load.len()).unwrap_or(0.0);
        deviations.push((mean(&actual) - ideal).abs());
    }

    if deviations.is_empty() {
        return DIFFICULTY_POINTS;
    }

    let weight = if all_values.is_empty() {
        DEFAULT_DIFFICULTY_WEIGHT
    } else {
        let max = all_values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = all_values.iter().copied().fold(f64::INFINITY, f64::min);
        ((max - min) * 0.3).max(1.0)
    };

    (DIFFICULTY_POINTS * (1.0 - mean(&deviations) / weight)).max(0.0)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Rounds half to even at the given number of decimals.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
