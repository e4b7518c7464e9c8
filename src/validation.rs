//! Input validation for chore scheduling problems.
//!
//! Checks structural integrity of chores, users, and annealing
//! parameters before any search begins. Detects:
//! - Empty chore or user lists
//! - Duplicate names
//! - Chores with zero instances
//! - Difficulty vectors that do not match the chore list
//! - Preference indices that reference no chore
//! - Out-of-range annealing parameters
//!
//! All checks run and every problem is reported, so a caller can fix
//! the whole request at once.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{total_instances, Assignment, Chore, User};
use crate::sa::{CoolingSchedule, SaConfig};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No chores were supplied.
    EmptyChores,
    /// No users were supplied.
    EmptyUsers,
    /// Two chores or two users share the same name.
    DuplicateName,
    /// A chore has no instances to assign.
    ZeroAmount,
    /// A difficulty vector does not have one value per chore.
    DifficultyLength,
    /// A difficulty value is NaN or infinite.
    NonFiniteDifficulty,
    /// A preference references a chore that does not exist.
    UnknownChore,
    /// An annealing parameter is out of range.
    InvalidParameter,
    /// An assignment does not fit the problem's users or chore instances.
    AssignmentMismatch,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Rejected scheduling input.
///
/// Returned by fallible constructors; carries every detected problem.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid scheduling input: {}", join_messages(.errors))]
pub struct InvalidInputError {
    /// All detected problems (never empty).
    pub errors: Vec<ValidationError>,
}

impl InvalidInputError {
    /// Whether any error has the given kind.
    pub fn has(&self, kind: ValidationErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }
}

impl From<Vec<ValidationError>> for InvalidInputError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validates the entities of a chore scheduling problem.
///
/// Checks:
/// 1. At least one chore and at least one user
/// 2. No duplicate chore names, no duplicate user names
/// 3. Every chore has a positive amount
/// 4. Difficulty vectors have exactly one finite value per chore
/// 5. Loved/hated indices refer to existing chores
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(chores: &[Chore], users: &[User]) -> ValidationResult {
    let mut errors = Vec::new();

    if chores.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyChores,
            "Cannot create schedule with no chores",
        ));
    }
    if users.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyUsers,
            "Cannot create schedule with no users",
        ));
    }

    let mut chore_names = HashSet::new();
    for chore in chores {
        if !chore_names.insert(chore.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate chore name: {}", chore.name),
            ));
        }
        if chore.amount == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroAmount,
                format!("Chore '{}' has an amount of zero", chore.name),
            ));
        }
    }

    let mut user_names = HashSet::new();
    for user in users {
        if !user_names.insert(user.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate user name: {}", user.name),
            ));
        }

        if let Some(difficulty) = &user.difficulty {
            if difficulty.len() != chores.len() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DifficultyLength,
                    format!(
                        "User '{}' has {} difficulty values for {} chores",
                        user.name,
                        difficulty.len(),
                        chores.len()
                    ),
                ));
            }
            if difficulty.iter().any(|d| !d.is_finite()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonFiniteDifficulty,
                    format!("User '{}' has a non-finite difficulty value", user.name),
                ));
            }
        }

        for (label, set) in [("hated", &user.hated_chores), ("loved", &user.loved_chores)] {
            for &idx in set {
                if idx >= chores.len() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownChore,
                        format!(
                            "User '{}' {} chore index {} is out of range",
                            user.name, label, idx
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an externally supplied assignment against a problem.
///
/// Checks:
/// 1. One instance list per user
/// 2. The assigned instances are exactly the chore instances, each chore
///    appearing `amount` times
pub fn validate_assignment(
    chores: &[Chore],
    user_count: usize,
    assignment: &Assignment,
) -> ValidationResult {
    let mut errors = Vec::new();

    if assignment.user_count() != user_count {
        errors.push(ValidationError::new(
            ValidationErrorKind::AssignmentMismatch,
            format!(
                "Assignment has {} user lists for {} users",
                assignment.user_count(),
                user_count
            ),
        ));
    }

    let histogram = assignment.instance_histogram(chores.len());
    let expected: Vec<usize> = chores.iter().map(|c| c.amount as usize).collect();
    if histogram != expected || assignment.total_instances() != total_instances(chores) {
        errors.push(ValidationError::new(
            ValidationErrorKind::AssignmentMismatch,
            "Assignment does not hold exactly the chore instances",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates annealing parameters.
///
/// Checks:
/// 1. Initial temperature is finite and non-negative
/// 2. Geometric cooling rate lies strictly between 0 and 1
/// 3. Linear cooling step is finite and positive
pub fn validate_config(config: &SaConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let temp = config.initial_temperature;
    if !temp.is_finite() || temp < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidParameter,
            format!("Initial temperature must be finite and non-negative, got {temp}"),
        ));
    }

    match config.cooling {
        CoolingSchedule::Geometric { rate } => {
            if !(rate > 0.0 && rate < 1.0) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidParameter,
                    format!("Cooling rate must be in (0, 1), got {rate}"),
                ));
            }
        }
        CoolingSchedule::Linear { step } => {
            if !step.is_finite() || step <= 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidParameter,
                    format!("Cooling step must be positive, got {step}"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
