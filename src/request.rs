//! Name-based request/response boundary.
//!
//! Transport layers (HTTP handlers, CLIs) deserialize a
//! [`ScheduleRequest`], call [`solve`], and serialize the
//! [`ScheduleResponse`]. Preferences arrive as chore *names* here and are
//! translated to chore positions before the entities are built; the
//! scheduler itself only ever sees positions.
//!
//! # Document Shape
//!
//! ```json
//! {
//!   "chores": [{"name": "dishes", "amount": 2}],
//!   "users": [{"name": "Alice", "max_chores": 2, "loved": ["dishes"]}],
//!   "annealing": {"max_iterations": 1000, "seed": 7},
//!   "weights": {"love": 5.0}
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{Chore, ChoreIndex, NamedSchedule, User};
use crate::sa::SaConfig;
use crate::scheduler::{ChoreScheduler, FairnessWeights, QualityReport};
use crate::validation::{
    validate_config, InvalidInputError, ValidationError, ValidationErrorKind,
};

/// A chore as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoreSpec {
    /// Unique chore name.
    pub name: String,
    /// Number of instances.
    pub amount: u32,
}

/// A user as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSpec {
    /// Unique user name.
    pub name: String,
    /// Capacity.
    pub max_chores: u32,
    /// Difficulty per chore, aligned to the request's chore order.
    #[serde(default)]
    pub difficulty: Option<Vec<f64>>,
    /// Names of hated chores.
    #[serde(default)]
    pub hated: Vec<String>,
    /// Names of loved chores.
    #[serde(default)]
    pub loved: Vec<String>,
}

/// A complete scheduling request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Chores in canonical order.
    pub chores: Vec<ChoreSpec>,
    /// Participants.
    pub users: Vec<UserSpec>,
    /// Search parameters.
    #[serde(default)]
    pub annealing: SaConfig,
    /// Objective weights.
    #[serde(default)]
    pub weights: FairnessWeights,
}

/// Result of [`solve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// User name → assigned chore names.
    pub schedule: NamedSchedule,
    /// Quality report for `schedule`.
    pub quality: QualityReport,
}

impl ScheduleRequest {
    /// Creates a request with default search parameters and weights.
    pub fn new(chores: Vec<ChoreSpec>, users: Vec<UserSpec>) -> Self {
        Self {
            chores,
            users,
            annealing: SaConfig::default(),
            weights: FairnessWeights::default(),
        }
    }

    /// Translates the request into domain entities.
    ///
    /// Hated and loved chore names are resolved against the chore order.
    ///
    /// # Errors
    /// Every name that matches no chore is reported as
    /// [`ValidationErrorKind::UnknownChore`].
    pub fn into_entities(&self) -> Result<(Vec<Chore>, Vec<User>), InvalidInputError> {
        let chores: Vec<Chore> = self
            .chores
            .iter()
            .map(|c| Chore::new(c.name.clone(), c.amount))
            .collect();
        let index = ChoreIndex::new(&chores);
        let mut errors = Vec::new();

        let users = self
            .users
            .iter()
            .map(|spec| {
                let hated = resolve(&index, spec, "hated", &spec.hated, &mut errors);
                let loved = resolve(&index, spec, "loved", &spec.loved, &mut errors);
                let mut user = User::new(spec.name.clone(), spec.max_chores)
                    .with_hated(hated)
                    .with_loved(loved);
                if let Some(difficulty) = &spec.difficulty {
                    user = user.with_difficulty(difficulty.clone());
                }
                user
            })
            .collect();

        if errors.is_empty() {
            Ok((chores, users))
        } else {
            Err(errors.into())
        }
    }
}

fn resolve(
    index: &ChoreIndex,
    spec: &UserSpec,
    label: &str,
    names: &[String],
    errors: &mut Vec<ValidationError>,
) -> Vec<usize> {
    names
        .iter()
        .filter_map(|name| {
            let position = index.position(name);
            if position.is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownChore,
                    format!("User '{}' {} unknown chore '{}'", spec.name, label, name),
                ));
            }
            position
        })
        .collect()
}

/// Validates, optimizes, and reports on a request.
///
/// # Errors
/// Returns [`InvalidInputError`] when the entities or annealing
/// parameters are invalid; nothing is searched in that case.
///
/// # Example
/// ```
/// use chore_schedule::request::{solve, ChoreSpec, ScheduleRequest, UserSpec};
///
/// let request = ScheduleRequest::new(
///     vec![ChoreSpec { name: "dishes".into(), amount: 2 }],
///     vec![
///         UserSpec { name: "Alice".into(), max_chores: 1, difficulty: None, hated: vec![], loved: vec![] },
///         UserSpec { name: "Ben".into(), max_chores: 1, difficulty: None, hated: vec![], loved: vec![] },
///     ],
/// );
/// let response = solve(&request).unwrap();
/// assert_eq!(response.schedule["Alice"].len(), 1);
/// ```
pub fn solve(request: &ScheduleRequest) -> Result<ScheduleResponse, InvalidInputError> {
    validate_config(&request.annealing)?;
    let (chores, users) = request.into_entities()?;

    let scheduler = ChoreScheduler::new(chores, users)?.with_weights(request.weights.clone());
    let result = scheduler.search(&request.annealing);
    let quality = scheduler.report(&result.best);

    info!(
        users = request.users.len(),
        chores = request.chores.len(),
        objective = result.best_score,
        quality = quality.score,
        grade = %quality.score_results,
        "schedule solved"
    );

    Ok(ScheduleResponse {
        schedule: scheduler.named(&result.best),
        quality,
    })
}
