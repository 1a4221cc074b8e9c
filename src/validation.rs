//! Input validation for rostering runs.
//!
//! Checks structural integrity of a [`RosterConfig`] before any model
//! is built. Detects:
//! - Empty roster, zero shifts, empty task catalog
//! - Duplicate person or task names
//! - Shift-window indices outside the horizon
//! - Base cost tables or shift labels of the wrong length
//!
//! Deliberately NOT checked: empty shift windows. An empty window is a
//! contradiction the solving engine must report as infeasible, so it is
//! left to surface at solve time.

use crate::models::{CostTable, RosterConfig, ShiftWindow};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The roster has no persons.
    EmptyRoster,
    /// The day has no shifts.
    NoShifts,
    /// The task catalog is empty.
    NoTasks,
    /// Two persons or two tasks share a name.
    DuplicateName,
    /// A shift window references a shift outside the horizon.
    WindowOutOfRange,
    /// A base cost table or label list has the wrong length.
    LengthMismatch,
    /// A supplied cost table does not match the configured dimensions.
    CostDimensionMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a run configuration.
///
/// Checks:
/// 1. Non-empty roster, at least one shift, at least one task
/// 2. No duplicate person names
/// 3. No duplicate task names
/// 4. All shift-window indices within `0..shift_count`
/// 5. `shift_costs` / `task_costs` lengths match the grid
/// 6. `shift_labels`, when present, has one label per shift
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &RosterConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.roster.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "Roster is empty",
        ));
    }
    if config.shift_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoShifts,
            "Shift count is zero",
        ));
    }
    if config.tasks.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoTasks,
            "Task catalog is empty",
        ));
    }

    let mut person_names = HashSet::new();
    for name in &config.roster {
        if !person_names.insert(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate person name: {name}"),
            ));
        }
    }

    let mut task_names = HashSet::new();
    for task in &config.tasks {
        if !task_names.insert(task.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate task name: {}", task.name),
            ));
        }

        if let ShiftWindow::RestrictedTo(shifts) = &task.window {
            for &shift in shifts {
                if shift >= config.shift_count {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::WindowOutOfRange,
                        format!(
                            "Task '{}' window references shift {shift}, horizon is {}",
                            task.name, config.shift_count
                        ),
                    ));
                }
            }
        }
    }

    if config.shift_costs.len() != config.shift_count {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "shift_costs has {} entries, expected {}",
                config.shift_costs.len(),
                config.shift_count
            ),
        ));
    }
    if config.task_costs.len() != config.tasks.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "task_costs has {} entries, expected {}",
                config.task_costs.len(),
                config.tasks.len()
            ),
        ));
    }
    if !config.shift_labels.is_empty() && config.shift_labels.len() != config.shift_count {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "shift_labels has {} entries, expected {}",
                config.shift_labels.len(),
                config.shift_count
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a caller-supplied initial cost table against the configuration.
pub fn validate_costs(config: &RosterConfig, costs: &CostTable) -> ValidationResult {
    if costs.has_dims(config.roster_len(), config.shift_count, config.task_count()) {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::CostDimensionMismatch,
            format!(
                "Cost table is {}x{}x{}, configuration is {}x{}x{}",
                costs.person_count(),
                costs.shift_count(),
                costs.task_count(),
                config.roster_len(),
                config.shift_count,
                config.task_count()
            ),
        )])
    }
}
