//! Chore assignment optimization.
//!
//! Builds a starting assignment, searches for a fairer one with simulated
//! annealing, and reports on the result.
//!
//! # Components
//!
//! - `ScheduleBuilder`: deterministic round-robin starting point
//! - `FairnessEvaluator`: unbounded objective (Jain's index, overload,
//!   preferences, difficulty)
//! - `NeighborGenerator`: swap / reassign moves
//! - `QualityReporter`: bounded 0-100 report for humans
//! - `ChoreScheduler`: facade driving [`SaRunner`](crate::sa::SaRunner)
//!
//! # References
//!
//! - Jain, Chiu & Hawe (1984), "A Quantitative Measure of Fairness and
//!   Discrimination for Resource Allocation in Shared Computer Systems"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod builder;
mod chore_scheduler;
mod fairness;
mod neighbor;
mod problem;
mod quality;

pub use builder::ScheduleBuilder;
pub use chore_scheduler::ChoreScheduler;
pub use fairness::{jain_index, load_ratios, FairnessEvaluator, FairnessWeights};
pub use neighbor::{MoveKind, NeighborGenerator};
pub use problem::ChoreProblem;
pub use quality::{
    QualityBreakdown, QualityReport, QualityReporter, ScoreGrade, Situation, UserLoad,
};
