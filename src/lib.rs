//! Fair chore scheduling.
//!
//! Assigns a fixed pool of recurring chores, each with a repetition count,
//! to users with a chore capacity and optional preference/difficulty
//! signals. The assignment is optimized for capacity-relative fairness and
//! pleasantness with simulated annealing, then scored by a 0-100 quality
//! report for humans.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Chore`, `User`, `ChoreIndex`, `Assignment`
//! - **`validation`**: Input integrity checks (empty lists, duplicate names,
//!   difficulty shape, preference references, annealing parameters)
//! - **`sa`**: Generic simulated annealing runner with pluggable cooling
//! - **`scheduler`**: Initial round-robin builder, fairness evaluator,
//!   neighbor moves, quality reporter, and the `ChoreScheduler` facade
//! - **`request`**: Name-based request/response boundary and [`request::solve`]
//!
//! # Example
//!
//! ```
//! use chore_schedule::models::{Chore, User};
//! use chore_schedule::sa::SaConfig;
//! use chore_schedule::scheduler::ChoreScheduler;
//!
//! let chores = vec![Chore::new("dishes", 2), Chore::new("trash", 2)];
//! let users = vec![User::new("Alice", 2), User::new("Ben", 2)];
//! let scheduler = ChoreScheduler::new(chores, users).unwrap();
//!
//! let result = scheduler.search(&SaConfig::default().with_seed(7));
//! let report = scheduler.report(&result.best);
//! assert!(report.score >= 0.0 && report.score <= 100.0);
//! ```
//!
//! # References
//!
//! - Jain, Chiu & Hawe (1984), "A Quantitative Measure of Fairness and
//!   Discrimination for Resource Allocation in Shared Computer Systems"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

pub mod models;
pub mod request;
pub mod sa;
pub mod scheduler;
pub mod validation;
