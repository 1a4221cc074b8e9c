//! Solving-engine adapter.
//!
//! Submits a [`DayModel`](super::DayModel) to the external MILP engine
//! and translates the result. The engine is a black box behind
//! `good_lp`'s backend-agnostic `default_solver`; this module never
//! inspects it beyond the solve call.
//!
//! Indicator values come back as floats and may be fractional-looking
//! near the 0/1 bounds, so a value counts as "set" only when it exceeds
//! 0.5. Infeasibility is a per-day outcome, not an adapter error, and
//! no retries happen here.

use good_lp::{default_solver, ResolutionError, Solution, SolverModel};
use thiserror::Error;

use super::DayModel;
use crate::models::{CostTable, DayAssignment};

/// Result of submitting one day's model to the engine.
#[derive(Debug, Clone)]
pub enum SolveOutcome {
    /// The engine found an optimal or feasible assignment.
    Solved(SolvedDay),
    /// No assignment satisfies the hard constraints.
    Infeasible,
}

/// A successfully solved day.
#[derive(Debug, Clone)]
pub struct SolvedDay {
    /// The decoded assignment grid.
    pub assignment: DayAssignment,
    /// Objective value: current costs dotted with the indicators.
    pub objective: f64,
}

/// Failures of the solving engine other than infeasibility.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The engine could not be initialized or failed mid-solve.
    #[error("solving engine failed: {0}")]
    Engine(String),
}

/// Solves a day model and decodes the result.
///
/// `costs` must be the same table the model's objective was built from;
/// it is used to report the objective value of the decoded assignment.
pub fn solve_day(model: DayModel, costs: &CostTable) -> Result<SolveOutcome, OracleError> {
    let DayModel {
        vars,
        slot_vars,
        constraints,
        objective,
        persons,
        shifts,
        tasks,
    } = model;

    let mut problem = vars.minimise(objective).using(default_solver);
    for constraint in constraints {
        problem = problem.with(constraint);
    }

    match problem.solve() {
        Ok(solution) => {
            let flags: Vec<bool> = slot_vars
                .iter()
                .map(|&v| solution.value(v) > 0.5)
                .collect();
            let assignment = DayAssignment::from_flags(persons, shifts, tasks, flags);

            let mut objective = 0.0;
            for person in 0..persons {
                for (shift, task) in assignment.worked_slots(person) {
                    objective += costs.get(person, shift, task);
                }
            }

            Ok(SolveOutcome::Solved(SolvedDay {
                assignment,
                objective,
            }))
        }
        Err(ResolutionError::Infeasible) => Ok(SolveOutcome::Infeasible),
        Err(err) => Err(OracleError::Engine(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mip::DayModelBuilder;
    use crate::models::{RosterConfig, TaskSpec};

    fn roster(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("P{i}")).collect()
    }

    #[test]
    fn test_solve_picks_cheap_slots() {
        // 2 persons, 2 shifts, 1 task; costs force P0 on shift 0 and
        // P1 on shift 1.
        let config = RosterConfig::new(roster(2), 2, vec![TaskSpec::new("Patrol")]);
        let mut costs = CostTable::zeroed(2, 2, 1);
        costs.set(0, 1, 0, 10.0);
        costs.set(1, 0, 0, 10.0);

        let model = DayModelBuilder::new(&config, &costs).build();
        let outcome = solve_day(model, &costs).unwrap();

        match outcome {
            SolveOutcome::Solved(solved) => {
                assert!(solved.assignment.is_assigned(0, 0, 0));
                assert!(solved.assignment.is_assigned(1, 1, 0));
                assert_eq!(solved.objective, 0.0);
                assert!(solved.assignment.violations(&config).is_empty());
            }
            SolveOutcome::Infeasible => panic!("expected a solution"),
        }
    }

    #[test]
    fn test_no_repeat_makes_single_person_infeasible() {
        // One person cannot cover the same task on two adjacent shifts.
        let config = RosterConfig::new(roster(1), 2, vec![TaskSpec::new("Patrol")]);
        let costs = CostTable::zeroed(1, 2, 1);

        let model = DayModelBuilder::new(&config, &costs).build();
        let outcome = solve_day(model, &costs).unwrap();
        assert!(matches!(outcome, SolveOutcome::Infeasible));
    }

    #[test]
    fn test_excluded_cells_stay_empty() {
        let config = RosterConfig::new(
            roster(3),
            4,
            vec![TaskSpec::new("Fire-watch").restricted_to([1, 2])],
        );
        let costs = CostTable::zeroed(3, 4, 1);

        let model = DayModelBuilder::new(&config, &costs).build();
        let outcome = solve_day(model, &costs).unwrap();

        match outcome {
            SolveOutcome::Solved(solved) => {
                assert_eq!(solved.assignment.assigned_person(0, 0), None);
                assert_eq!(solved.assignment.assigned_person(3, 0), None);
                assert!(solved.assignment.assigned_person(1, 0).is_some());
                assert!(solved.assignment.assigned_person(2, 0).is_some());
            }
            SolveOutcome::Infeasible => panic!("expected a solution"),
        }
    }
}
