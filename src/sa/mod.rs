//! Annealing search used by the chore scheduler.
//!
//! Walks one solution at a time. Each step draws a handful of neighbors,
//! picks one at random, and keeps it if it scores higher; a lower-scoring
//! neighbor is kept with probability `exp(delta / T)`, where `T` falls
//! according to the configured [`CoolingSchedule`]. The best assignment
//! seen is tracked separately from the current one.
//!
//! Nothing here knows about chores; [`SaProblem`] supplies the objective
//! and the neighborhood.
//!
//! # Convention
//! **Higher score = better solution** (maximization).
//!
//! # References
//!
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines" (acceptance rule)

mod config;
mod runner;
mod types;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};
pub use types::SaProblem;
