//! Run-level error taxonomy.
//!
//! Only two conditions abort a whole run: a malformed configuration
//! (caught before any model is built) and a solving-engine failure.
//! Per-day infeasibility is deliberately NOT an error; it is reported
//! as [`DayOutcome::Infeasible`](crate::scheduler::DayOutcome) so a
//! failed day stays distinguishable from a solved zero-cost day.

use thiserror::Error;

use crate::mip::OracleError;
use crate::validation::ValidationError;

/// Fatal errors for a rostering run.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The configuration failed validation; carries every detected issue.
    #[error("invalid configuration: {}", join_messages(.0))]
    Configuration(Vec<ValidationError>),
    /// The solving engine could not be used at all.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_config, ValidationErrorKind};
    use crate::models::RosterConfig;

    #[test]
    fn test_configuration_error_lists_all_messages() {
        let errors = validate_config(&RosterConfig::new(vec![], 0, vec![])).unwrap_err();
        assert!(errors.len() >= 2);

        let err = ScheduleError::Configuration(errors.clone());
        let text = err.to_string();
        assert!(text.starts_with("invalid configuration:"));
        for e in &errors {
            assert!(text.contains(&e.message));
        }
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyRoster));
    }

    #[test]
    fn test_oracle_error_display() {
        let err = ScheduleError::Oracle(OracleError::Engine("backend missing".into()));
        assert_eq!(err.to_string(), "solving engine failed: backend missing");
    }
}
