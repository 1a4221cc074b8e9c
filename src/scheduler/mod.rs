//! Day-by-day rostering loop.
//!
//! The `DayScheduler` owns the single mutable cost table and drives the
//! strictly sequential loop: build the day's model on the current
//! costs, submit it to the solving engine, evolve the costs from the
//! returned assignment, repeat. Day *i*'s evolved costs are a
//! precondition for day *i+1*'s model, so days are never processed
//! concurrently.
//!
//! An infeasible day halts nothing: it is recorded in the day's
//! [`DayOutcome`], logged at `warn`, and the cost table is carried
//! forward unchanged into the next day.

use crate::error::ScheduleError;
use crate::evolution::CostEvolver;
use crate::mip::{solve_day, DayModelBuilder, SolveOutcome};
use crate::models::{CostTable, DayAssignment, RosterConfig};
use crate::validation::{validate_config, validate_costs};

/// Result of one day in the loop.
#[derive(Debug, Clone)]
pub enum DayOutcome {
    /// The day was solved; costs were evolved from this assignment.
    Solved {
        /// The day's assignment grid.
        assignment: DayAssignment,
        /// Objective value of the assignment under that day's costs.
        objective: f64,
    },
    /// No assignment satisfies the hard constraints; costs were carried
    /// forward unchanged.
    Infeasible,
}

/// One day's entry in the run log.
#[derive(Debug, Clone)]
pub struct DayRecord {
    /// Day index, starting at 0.
    pub day: usize,
    /// What happened on that day.
    pub outcome: DayOutcome,
}

impl DayRecord {
    /// The day's assignment, if it was solved.
    pub fn assignment(&self) -> Option<&DayAssignment> {
        match &self.outcome {
            DayOutcome::Solved { assignment, .. } => Some(assignment),
            DayOutcome::Infeasible => None,
        }
    }
}

/// Sequential day-by-day scheduler.
///
/// Validates the configuration on construction, seeds (or accepts) the
/// initial cost table, and exclusively owns that table for the rest of
/// the run.
///
/// # Example
///
/// ```
/// use watchbill::models::{RosterConfig, TaskSpec};
/// use watchbill::scheduler::DayScheduler;
///
/// let config = RosterConfig::new(
///     vec!["Avci".into(), "Berg".into(), "Cole".into(), "Dietz".into()],
///     4,
///     vec![TaskSpec::new("Patrol")],
/// )
/// .with_shift_costs(vec![10.0, 20.0, 20.0, 10.0])
/// .with_task_costs(vec![0.0])
/// .with_days(2);
///
/// let mut scheduler = DayScheduler::new(config).unwrap();
/// let records = scheduler.run().unwrap();
/// assert_eq!(records.len(), 2);
/// ```
#[derive(Debug)]
pub struct DayScheduler {
    config: RosterConfig,
    costs: CostTable,
}

impl DayScheduler {
    /// Creates a scheduler with a greedily seeded initial cost table.
    pub fn new(config: RosterConfig) -> Result<Self, ScheduleError> {
        validate_config(&config).map_err(ScheduleError::Configuration)?;
        let costs = CostEvolver::new(&config).seed();
        Ok(Self { config, costs })
    }

    /// Creates a scheduler starting from a caller-supplied cost table,
    /// e.g. one deserialized from a previous run.
    pub fn with_initial_costs(
        config: RosterConfig,
        costs: CostTable,
    ) -> Result<Self, ScheduleError> {
        validate_config(&config).map_err(ScheduleError::Configuration)?;
        validate_costs(&config, &costs).map_err(ScheduleError::Configuration)?;
        Ok(Self { config, costs })
    }

    /// The run configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// The current cost table (evolved up to the last solved day).
    pub fn costs(&self) -> &CostTable {
        &self.costs
    }

    /// Runs the configured number of days.
    pub fn run(&mut self) -> Result<Vec<DayRecord>, ScheduleError> {
        let days = self.config.days;
        self.run_days(days)
    }

    /// Runs the given number of further days from the current costs.
    pub fn run_days(&mut self, days: usize) -> Result<Vec<DayRecord>, ScheduleError> {
        let mut records = Vec::with_capacity(days);
        for day in 0..days {
            records.push(self.step(day)?);
        }
        Ok(records)
    }

    /// Builds, solves, and (on success) evolves one day.
    fn step(&mut self, day: usize) -> Result<DayRecord, ScheduleError> {
        let model = DayModelBuilder::new(&self.config, &self.costs).build();
        tracing::debug!(
            day,
            variables = model.variable_count(),
            constraints = model.constraint_count(),
            "solving day"
        );

        match solve_day(model, &self.costs)? {
            SolveOutcome::Solved(solved) => {
                tracing::debug!(day, objective = solved.objective, "day solved");
                self.costs = CostEvolver::new(&self.config).evolve(&self.costs, &solved.assignment);
                Ok(DayRecord {
                    day,
                    outcome: DayOutcome::Solved {
                        assignment: solved.assignment,
                        objective: solved.objective,
                    },
                })
            }
            SolveOutcome::Infeasible => {
                tracing::warn!(day, "no feasible assignment, carrying costs forward");
                Ok(DayRecord {
                    day,
                    outcome: DayOutcome::Infeasible,
                })
            }
        }
    }
}
