//! Run configuration model.
//!
//! A `RosterConfig` is the immutable description of one rostering run:
//! the roster, the shift grid, the task catalog with optional shift
//! windows, the base cost tables, and the tuning knobs for the fairness
//! mechanism. It is validated once (see [`crate::validation`]) and then
//! passed by reference into every component; nothing in it changes while
//! a run is in progress.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Immutable configuration for a multi-day rostering run.
///
/// # Shift Representation
/// Shifts are 0-based indices into an ordered sequence of time windows.
/// `shift_labels`, when non-empty, carries one human-readable label per
/// shift for presentation callers; the core never reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Ordered roster of person names.
    pub roster: Vec<String>,
    /// Number of shifts per day.
    pub shift_count: usize,
    /// Presentation labels per shift (empty = unlabeled).
    pub shift_labels: Vec<String>,
    /// Task catalog, each task with an optional shift window.
    pub tasks: Vec<TaskSpec>,
    /// Base cost per shift, indexed by shift.
    pub shift_costs: Vec<f64>,
    /// Base cost per task, indexed by catalog position.
    pub task_costs: Vec<f64>,
    /// Tolerance added to the per-person workload cap.
    pub cap_slack: usize,
    /// Exponent of the distance-decay profile (observed values 2 or 3).
    pub decay_exponent: u32,
    /// Neighbor radius of the no-repeat constraint (1 = adjacent shifts only).
    pub repeat_radius: usize,
    /// Number of days to schedule.
    pub days: usize,
}

/// A task in the catalog with its shift window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Task name (e.g. "Patrol", "Post", "Fire-watch").
    pub name: String,
    /// Which shifts this task runs on.
    pub window: ShiftWindow,
}

/// Where a task may run.
///
/// A restricted task must be covered on every shift inside its window
/// and on no shift outside it; an unrestricted task must be covered on
/// every shift. Resolved once at model-build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftWindow {
    /// Task runs on every shift.
    Unrestricted,
    /// Task runs exactly on these shifts and nowhere else.
    RestrictedTo(BTreeSet<usize>),
}

impl ShiftWindow {
    /// Whether the task is required on the given shift.
    pub fn contains(&self, shift: usize) -> bool {
        match self {
            ShiftWindow::Unrestricted => true,
            ShiftWindow::RestrictedTo(shifts) => shifts.contains(&shift),
        }
    }

    /// Whether this is a restriction to an empty shift set.
    ///
    /// An empty window is contradictory (the task must run somewhere but
    /// may run nowhere) and surfaces as infeasibility at solve time.
    pub fn is_empty_restriction(&self) -> bool {
        matches!(self, ShiftWindow::RestrictedTo(s) if s.is_empty())
    }
}

impl TaskSpec {
    /// Creates an unrestricted task.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            window: ShiftWindow::Unrestricted,
        }
    }

    /// Restricts the task to the given shifts.
    pub fn restricted_to(mut self, shifts: impl IntoIterator<Item = usize>) -> Self {
        self.window = ShiftWindow::RestrictedTo(shifts.into_iter().collect());
        self
    }
}

impl RosterConfig {
    /// Creates a configuration with default knobs: zero base costs,
    /// no cap slack, decay exponent 2, repeat radius 1, one day.
    pub fn new(
        roster: Vec<String>,
        shift_count: usize,
        tasks: Vec<TaskSpec>,
    ) -> Self {
        let task_count = tasks.len();
        Self {
            roster,
            shift_count,
            shift_labels: Vec::new(),
            tasks,
            shift_costs: vec![0.0; shift_count],
            task_costs: vec![0.0; task_count],
            cap_slack: 0,
            decay_exponent: 2,
            repeat_radius: 1,
            days: 1,
        }
    }

    /// Sets presentation labels for the shifts.
    pub fn with_shift_labels(mut self, labels: Vec<String>) -> Self {
        self.shift_labels = labels;
        self
    }

    /// Sets the per-shift base costs.
    pub fn with_shift_costs(mut self, costs: Vec<f64>) -> Self {
        self.shift_costs = costs;
        self
    }

    /// Sets the per-task base costs.
    pub fn with_task_costs(mut self, costs: Vec<f64>) -> Self {
        self.task_costs = costs;
        self
    }

    /// Sets the workload-cap slack.
    pub fn with_cap_slack(mut self, slack: usize) -> Self {
        self.cap_slack = slack;
        self
    }

    /// Sets the distance-decay exponent.
    pub fn with_decay_exponent(mut self, exponent: u32) -> Self {
        self.decay_exponent = exponent;
        self
    }

    /// Sets the no-repeat neighbor radius.
    pub fn with_repeat_radius(mut self, radius: usize) -> Self {
        self.repeat_radius = radius;
        self
    }

    /// Sets the number of days to schedule.
    pub fn with_days(mut self, days: usize) -> Self {
        self.days = days;
        self
    }

    /// Roster size.
    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    /// Number of tasks in the catalog.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Whether (shift, task) must be covered by exactly one person.
    pub fn is_required(&self, shift: usize, task: usize) -> bool {
        self.tasks[task].window.contains(shift)
    }

    /// Number of (shift, task) cells that must be covered on one day.
    pub fn required_cell_count(&self) -> usize {
        (0..self.shift_count)
            .map(|s| {
                self.tasks
                    .iter()
                    .filter(|t| t.window.contains(s))
                    .count()
            })
            .sum()
    }

    /// Per-person cap on assigned slots for one day:
    /// `ceil(required_cells / roster_len) + cap_slack`.
    ///
    /// Callers must have validated a non-empty roster first.
    pub fn workload_cap(&self) -> usize {
        self.required_cell_count().div_ceil(self.roster.len()) + self.cap_slack
    }

    /// Base cost of a (shift, task) cell: shift cost plus task cost.
    pub fn base_cost(&self, shift: usize, task: usize) -> f64 {
        self.shift_costs[shift] + self.task_costs[task]
    }

    /// Presentation label for a shift, if labels were supplied.
    pub fn shift_label(&self, shift: usize) -> Option<&str> {
        self.shift_labels.get(shift).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("P{i}")).collect()
    }

    #[test]
    fn test_config_builder() {
        let config = RosterConfig::new(roster(3), 4, vec![TaskSpec::new("Patrol")])
            .with_shift_labels(vec!["00-06".into(), "06-12".into(), "12-18".into(), "18-24".into()])
            .with_shift_costs(vec![10.0, 20.0, 20.0, 10.0])
            .with_task_costs(vec![5.0])
            .with_cap_slack(1)
            .with_decay_exponent(3)
            .with_repeat_radius(2)
            .with_days(7);

        assert_eq!(config.roster_len(), 3);
        assert_eq!(config.task_count(), 1);
        assert_eq!(config.shift_label(1), Some("06-12"));
        assert_eq!(config.cap_slack, 1);
        assert_eq!(config.decay_exponent, 3);
        assert_eq!(config.repeat_radius, 2);
        assert_eq!(config.days, 7);
    }

    #[test]
    fn test_window_contains() {
        let unrestricted = TaskSpec::new("Patrol");
        assert!(unrestricted.window.contains(0));
        assert!(unrestricted.window.contains(7));

        let restricted = TaskSpec::new("Fire-watch").restricted_to([0, 4, 5]);
        assert!(restricted.window.contains(0));
        assert!(restricted.window.contains(4));
        assert!(!restricted.window.contains(1));
        assert!(!restricted.window.contains(7));
    }

    #[test]
    fn test_empty_restriction() {
        let empty = TaskSpec::new("Post").restricted_to([]);
        assert!(empty.window.is_empty_restriction());
        assert!(!empty.window.contains(0));

        let nonempty = TaskSpec::new("Post").restricted_to([2]);
        assert!(!nonempty.window.is_empty_restriction());
        assert!(!TaskSpec::new("Post").window.is_empty_restriction());
    }

    #[test]
    fn test_required_cell_count() {
        let config = RosterConfig::new(
            roster(4),
            8,
            vec![
                TaskSpec::new("Patrol"),
                TaskSpec::new("Fire-watch").restricted_to([0, 4, 5]),
            ],
        );
        // Patrol on all 8 shifts + Fire-watch on 3.
        assert_eq!(config.required_cell_count(), 11);
        assert!(config.is_required(0, 1));
        assert!(!config.is_required(1, 1));
        assert!(config.is_required(1, 0));
    }

    #[test]
    fn test_workload_cap() {
        let config = RosterConfig::new(roster(4), 4, vec![TaskSpec::new("Patrol")]);
        // 4 required cells / 4 persons = 1.
        assert_eq!(config.workload_cap(), 1);

        let config = RosterConfig::new(roster(3), 4, vec![TaskSpec::new("Patrol")]);
        // ceil(4 / 3) = 2.
        assert_eq!(config.workload_cap(), 2);

        let config = config.with_cap_slack(1);
        assert_eq!(config.workload_cap(), 3);
    }

    #[test]
    fn test_base_cost() {
        let config = RosterConfig::new(roster(2), 2, vec![TaskSpec::new("Patrol")])
            .with_shift_costs(vec![10.0, 20.0])
            .with_task_costs(vec![5.0]);
        assert_eq!(config.base_cost(0, 0), 15.0);
        assert_eq!(config.base_cost(1, 0), 25.0);
    }
}
