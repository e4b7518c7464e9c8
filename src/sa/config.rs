//! Annealing configuration.

use serde::{Deserialize, Serialize};

/// Temperature update rule applied once per iteration.
///
/// Every schedule keeps the temperature non-increasing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoolingSchedule {
    /// `T ← T × rate`, with `0 < rate < 1`.
    Geometric {
        /// Multiplicative cooling rate.
        rate: f64,
    },
    /// `T ← max(0, T − step)`, with `step > 0`.
    Linear {
        /// Subtractive cooling step.
        step: f64,
    },
}

impl CoolingSchedule {
    /// Next temperature after one iteration.
    #[inline]
    pub fn cool(&self, temperature: f64) -> f64 {
        match *self {
            CoolingSchedule::Geometric { rate } => temperature * rate,
            CoolingSchedule::Linear { step } => (temperature - step).max(0.0),
        }
    }
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { rate: 0.95 }
    }
}

/// Simulated annealing parameters.
///
/// # Example
/// ```
/// use chore_schedule::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_max_iterations(500)
///     .with_initial_temperature(50.0)
///     .with_cooling_rate(0.9)
///     .with_seed(42);
/// assert_eq!(config.cooling, CoolingSchedule::Geometric { rate: 0.9 });
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaConfig {
    /// Fixed number of iterations (no early exit).
    pub max_iterations: usize,
    /// Starting temperature.
    pub initial_temperature: f64,
    /// Temperature update rule.
    pub cooling: CoolingSchedule,
    /// RNG seed for reproducible runs. `None` = thread RNG.
    pub seed: Option<u64>,
    /// Record the best score after every iteration.
    pub record_history: bool,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            initial_temperature: 100.0,
            cooling: CoolingSchedule::default(),
            seed: None,
            record_history: false,
        }
    }
}

impl SaConfig {
    /// Sets the iteration count.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the starting temperature.
    pub fn with_initial_temperature(mut self, temperature: f64) -> Self {
        self.initial_temperature = temperature;
        self
    }

    /// Uses geometric cooling with the given rate.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling = CoolingSchedule::Geometric { rate };
        self
    }

    /// Sets the cooling schedule.
    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables best-score history recording.
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }
}
