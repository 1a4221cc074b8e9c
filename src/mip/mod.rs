//! MILP formulation of one day's assignment problem.
//!
//! Builds a 0/1 linear model from the run configuration and the current
//! cost table: one binary variable per (person, shift, task) slot, the
//! hard constraints (coverage, exclusivity, workload cap, no repeated
//! task on neighboring shifts), and the cost-dot-indicator objective.
//! Solving and decoding live in [`oracle`].
//!
//! # Reference
//! Burkard, Dell'Amico, Martello (2009), "Assignment Problems", Ch. 4

pub mod oracle;

pub use oracle::{solve_day, OracleError, SolveOutcome, SolvedDay};

use good_lp::{constraint, variable, variables, Constraint, Expression, ProblemVariables, Variable};

use crate::models::{CostTable, RosterConfig};

/// A fully assembled one-day model, ready for the solving engine.
///
/// Consumed by [`oracle::solve_day`]; the variable container cannot be
/// reused once submitted.
pub struct DayModel {
    pub(crate) vars: ProblemVariables,
    pub(crate) slot_vars: Vec<Variable>,
    pub(crate) constraints: Vec<Constraint>,
    pub(crate) objective: Expression,
    pub(crate) persons: usize,
    pub(crate) shifts: usize,
    pub(crate) tasks: usize,
}

impl DayModel {
    /// Number of decision variables (one per slot).
    pub fn variable_count(&self) -> usize {
        self.slot_vars.len()
    }

    /// Number of linear constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    #[inline]
    fn var(&self, person: usize, shift: usize, task: usize) -> Variable {
        self.slot_vars[(person * self.shifts + shift) * self.tasks + task]
    }
}

/// Builds a [`DayModel`] from the configuration and the current costs.
///
/// Emits:
/// - **Coverage**: per (shift, task), sum over persons == 1 if the cell
///   is inside the task's window (or the task is unrestricted), == 0
///   outside it. A task restricted to an empty window additionally gets
///   a must-run-somewhere constraint, so the model is contradictory by
///   construction and the engine reports it infeasible.
/// - **Exclusivity**: per (person, shift), sum over tasks <= 1.
/// - **Workload cap**: per person, total slots <=
///   `ceil(required_cells / roster) + slack`.
/// - **No repeat**: per (person, task, shift), the task's indicators
///   over the shift's neighbor window (radius `repeat_radius`, clipped
///   at the horizon) sum to <= 1.
/// - **Objective**: minimize the sum of `cost(slot) * indicator(slot)`.
pub struct DayModelBuilder<'a> {
    config: &'a RosterConfig,
    costs: &'a CostTable,
}

impl<'a> DayModelBuilder<'a> {
    /// Creates a builder over validated inputs.
    pub fn new(config: &'a RosterConfig, costs: &'a CostTable) -> Self {
        Self { config, costs }
    }

    /// Assembles the model.
    pub fn build(&self) -> DayModel {
        let persons = self.config.roster_len();
        let shifts = self.config.shift_count;
        let tasks = self.config.task_count();

        let mut vars = variables!();
        let mut slot_vars = Vec::with_capacity(persons * shifts * tasks);
        for _ in 0..persons * shifts * tasks {
            slot_vars.push(vars.add(variable().binary()));
        }

        let mut model = DayModel {
            vars,
            slot_vars,
            constraints: Vec::new(),
            objective: Expression::from(0.0),
            persons,
            shifts,
            tasks,
        };

        self.add_coverage(&mut model);
        self.add_exclusivity(&mut model);
        self.add_workload_cap(&mut model);
        self.add_no_repeat(&mut model);

        let mut objective = Expression::from(0.0);
        for person in 0..persons {
            for shift in 0..shifts {
                for task in 0..tasks {
                    objective = objective
                        + self.costs.get(person, shift, task) * model.var(person, shift, task);
                }
            }
        }
        model.objective = objective;

        tracing::debug!(
            variables = model.variable_count(),
            constraints = model.constraint_count(),
            "assembled day model"
        );

        model
    }

    fn add_coverage(&self, model: &mut DayModel) {
        for shift in 0..model.shifts {
            for task in 0..model.tasks {
                let covered = (0..model.persons).fold(Expression::from(0.0), |acc, p| {
                    acc + model.var(p, shift, task)
                });
                if self.config.is_required(shift, task) {
                    model.constraints.push(constraint!(covered == 1));
                } else {
                    model.constraints.push(constraint!(covered == 0));
                }
            }
        }

        // An empty window still demands the task run somewhere; together
        // with the per-cell exclusions above this cannot be satisfied.
        for (task, spec) in self.config.tasks.iter().enumerate() {
            if spec.window.is_empty_restriction() {
                let anywhere = (0..model.persons).fold(Expression::from(0.0), |acc, p| {
                    (0..model.shifts).fold(acc, |acc, s| acc + model.var(p, s, task))
                });
                model.constraints.push(constraint!(anywhere >= 1));
            }
        }
    }

    fn add_exclusivity(&self, model: &mut DayModel) {
        for person in 0..model.persons {
            for shift in 0..model.shifts {
                let held = (0..model.tasks).fold(Expression::from(0.0), |acc, t| {
                    acc + model.var(person, shift, t)
                });
                model.constraints.push(constraint!(held <= 1));
            }
        }
    }

    fn add_workload_cap(&self, model: &mut DayModel) {
        let cap = self.config.workload_cap() as f64;
        for person in 0..model.persons {
            let total = (0..model.shifts).fold(Expression::from(0.0), |acc, s| {
                (0..model.tasks).fold(acc, |acc, t| acc + model.var(person, s, t))
            });
            model.constraints.push(constraint!(total <= cap));
        }
    }

    fn add_no_repeat(&self, model: &mut DayModel) {
        let radius = self.config.repeat_radius;
        for person in 0..model.persons {
            for task in 0..model.tasks {
                for shift in 0..model.shifts {
                    let lo = shift.saturating_sub(radius);
                    let hi = (shift + radius).min(model.shifts - 1);
                    let in_window = (lo..=hi).fold(Expression::from(0.0), |acc, s| {
                        acc + model.var(person, s, task)
                    });
                    model.constraints.push(constraint!(in_window <= 1));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskSpec;

    fn roster(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("P{i}")).collect()
    }

    #[test]
    fn test_variable_count() {
        let config = RosterConfig::new(
            roster(3),
            4,
            vec![TaskSpec::new("Patrol"), TaskSpec::new("Post")],
        );
        let costs = CostTable::zeroed(3, 4, 2);
        let model = DayModelBuilder::new(&config, &costs).build();
        assert_eq!(model.variable_count(), 3 * 4 * 2);
    }

    #[test]
    fn test_constraint_count() {
        let persons = 3;
        let shifts = 4;
        let tasks = 2;
        let config = RosterConfig::new(
            roster(persons),
            shifts,
            vec![TaskSpec::new("Patrol"), TaskSpec::new("Post")],
        );
        let costs = CostTable::zeroed(persons, shifts, tasks);
        let model = DayModelBuilder::new(&config, &costs).build();

        // coverage + exclusivity + cap + no-repeat
        let expected =
            shifts * tasks + persons * shifts + persons + persons * tasks * shifts;
        assert_eq!(model.constraint_count(), expected);
    }

    #[test]
    fn test_empty_window_adds_contradiction() {
        let config = RosterConfig::new(
            roster(2),
            3,
            vec![TaskSpec::new("Patrol"), TaskSpec::new("Post").restricted_to([])],
        );
        let costs = CostTable::zeroed(2, 3, 2);
        let with_empty = DayModelBuilder::new(&config, &costs).build();

        let config_plain = RosterConfig::new(
            roster(2),
            3,
            vec![TaskSpec::new("Patrol"), TaskSpec::new("Post").restricted_to([1])],
        );
        let plain = DayModelBuilder::new(&config_plain, &costs).build();

        // One extra must-run-somewhere constraint for the empty window.
        assert_eq!(with_empty.constraint_count(), plain.constraint_count() + 1);
    }
}
