//! Day assignment (solution) model.
//!
//! A `DayAssignment` is the outcome of one day's solve: a dense boolean
//! person × shift × task table. It is immutable once produced and is
//! consumed exactly once by the cost evolver (and, externally, by
//! presentation). The rule checker here mirrors the hard constraints of
//! the model and is used by tests and by callers that want a belt-and-
//! braces check of solver output.

use serde::{Deserialize, Serialize};

use super::RosterConfig;

/// A complete one-day assignment of persons to (shift, task) slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAssignment {
    persons: usize,
    shifts: usize,
    tasks: usize,
    flags: Vec<bool>,
}

/// A broken assignment rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleViolation {
    /// Which rule is broken.
    pub kind: RuleKind,
    /// Human-readable description.
    pub message: String,
}

/// The hard rules a day assignment must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleKind {
    /// A required (shift, task) cell is not covered by exactly one person,
    /// or an excluded cell is covered at all.
    Coverage,
    /// A person holds more than one task on the same shift.
    Exclusivity,
    /// A person exceeds the per-day workload cap.
    WorkloadCap,
    /// A person repeats a task on neighboring shifts.
    RepeatAdjacent,
}

impl RuleViolation {
    fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl DayAssignment {
    /// Builds an assignment from a slot-major flag vector
    /// (person-major, then shift, then task — the cost table's layout).
    ///
    /// # Panics
    /// Panics if `flags.len() != persons * shifts * tasks`.
    pub fn from_flags(persons: usize, shifts: usize, tasks: usize, flags: Vec<bool>) -> Self {
        assert_eq!(flags.len(), persons * shifts * tasks);
        Self {
            persons,
            shifts,
            tasks,
            flags,
        }
    }

    #[inline]
    fn index(&self, person: usize, shift: usize, task: usize) -> usize {
        (person * self.shifts + shift) * self.tasks + task
    }

    /// Whether the person holds the (shift, task) slot.
    #[inline]
    pub fn is_assigned(&self, person: usize, shift: usize, task: usize) -> bool {
        self.flags[self.index(person, shift, task)]
    }

    /// The person covering a (shift, task) cell, if any.
    pub fn assigned_person(&self, shift: usize, task: usize) -> Option<usize> {
        (0..self.persons).find(|&p| self.is_assigned(p, shift, task))
    }

    /// All (shift, task) slots the person works, in shift order.
    pub fn worked_slots(&self, person: usize) -> Vec<(usize, usize)> {
        let mut slots = Vec::new();
        for shift in 0..self.shifts {
            for task in 0..self.tasks {
                if self.is_assigned(person, shift, task) {
                    slots.push((shift, task));
                }
            }
        }
        slots
    }

    /// Number of slots the person works.
    pub fn assigned_count(&self, person: usize) -> usize {
        (0..self.shifts)
            .map(|s| {
                (0..self.tasks)
                    .filter(|&t| self.is_assigned(person, s, t))
                    .count()
            })
            .sum()
    }

    /// Total number of assigned slots.
    pub fn total_assigned(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Whether nobody works at all.
    pub fn is_empty(&self) -> bool {
        self.flags.iter().all(|&f| !f)
    }

    /// Checks every hard rule against the configuration and returns all
    /// violations found (empty = assignment is valid).
    pub fn violations(&self, config: &RosterConfig) -> Vec<RuleViolation> {
        let mut found = Vec::new();

        // Coverage: required cells covered exactly once, excluded cells never.
        for shift in 0..self.shifts {
            for task in 0..self.tasks {
                let covered = (0..self.persons)
                    .filter(|&p| self.is_assigned(p, shift, task))
                    .count();
                let required = config.is_required(shift, task);
                if required && covered != 1 {
                    found.push(RuleViolation::new(
                        RuleKind::Coverage,
                        format!(
                            "Cell (shift {shift}, task '{}') covered by {covered} persons, expected 1",
                            config.tasks[task].name
                        ),
                    ));
                } else if !required && covered != 0 {
                    found.push(RuleViolation::new(
                        RuleKind::Coverage,
                        format!(
                            "Excluded cell (shift {shift}, task '{}') covered by {covered} persons",
                            config.tasks[task].name
                        ),
                    ));
                }
            }
        }

        // Exclusivity: at most one task per (person, shift).
        for person in 0..self.persons {
            for shift in 0..self.shifts {
                let held = (0..self.tasks)
                    .filter(|&t| self.is_assigned(person, shift, t))
                    .count();
                if held > 1 {
                    found.push(RuleViolation::new(
                        RuleKind::Exclusivity,
                        format!(
                            "'{}' holds {held} tasks on shift {shift}",
                            config.roster[person]
                        ),
                    ));
                }
            }
        }

        // Workload cap.
        let cap = config.workload_cap();
        for person in 0..self.persons {
            let count = self.assigned_count(person);
            if count > cap {
                found.push(RuleViolation::new(
                    RuleKind::WorkloadCap,
                    format!(
                        "'{}' assigned {count} slots, cap is {cap}",
                        config.roster[person]
                    ),
                ));
            }
        }

        // No repeated task within the neighbor radius.
        let radius = config.repeat_radius;
        for person in 0..self.persons {
            for task in 0..self.tasks {
                for shift in 0..self.shifts {
                    let lo = shift.saturating_sub(radius);
                    let hi = (shift + radius).min(self.shifts.saturating_sub(1));
                    let in_window = (lo..=hi)
                        .filter(|&s| self.is_assigned(person, s, task))
                        .count();
                    if in_window > 1 {
                        found.push(RuleViolation::new(
                            RuleKind::RepeatAdjacent,
                            format!(
                                "'{}' works task '{}' {in_window} times within shifts {lo}..={hi}",
                                config.roster[person], config.tasks[task].name
                            ),
                        ));
                        break; // One report per (person, task) is enough.
                    }
                }
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskSpec;

    fn roster(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("P{i}")).collect()
    }

    /// 2 persons, 2 shifts, 1 task; P0 works shift 0, P1 works shift 1.
    fn alternating() -> DayAssignment {
        DayAssignment::from_flags(2, 2, 1, vec![true, false, false, true])
    }

    #[test]
    fn test_queries() {
        let a = alternating();
        assert!(a.is_assigned(0, 0, 0));
        assert!(!a.is_assigned(0, 1, 0));
        assert_eq!(a.assigned_person(0, 0), Some(0));
        assert_eq!(a.assigned_person(1, 0), Some(1));
        assert_eq!(a.worked_slots(0), vec![(0, 0)]);
        assert_eq!(a.assigned_count(1), 1);
        assert_eq!(a.total_assigned(), 2);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_valid_assignment_has_no_violations() {
        let config = RosterConfig::new(roster(2), 2, vec![TaskSpec::new("Patrol")]);
        assert!(alternating().violations(&config).is_empty());
    }

    #[test]
    fn test_coverage_violation_uncovered() {
        let config = RosterConfig::new(roster(2), 2, vec![TaskSpec::new("Patrol")]);
        let a = DayAssignment::from_flags(2, 2, 1, vec![true, false, false, false]);
        let v = a.violations(&config);
        assert!(v.iter().any(|v| v.kind == RuleKind::Coverage));
    }

    #[test]
    fn test_coverage_violation_excluded_cell() {
        let config = RosterConfig::new(
            roster(2),
            2,
            vec![TaskSpec::new("Fire-watch").restricted_to([0])],
        );
        // Shift 1 is outside the window but P1 is placed there.
        let a = DayAssignment::from_flags(2, 2, 1, vec![true, false, false, true]);
        let v = a.violations(&config);
        assert!(v.iter().any(|v| v.kind == RuleKind::Coverage));
    }

    #[test]
    fn test_exclusivity_violation() {
        let config = RosterConfig::new(
            roster(2),
            1,
            vec![TaskSpec::new("Patrol"), TaskSpec::new("Post")],
        );
        // P0 holds both tasks on shift 0.
        let a = DayAssignment::from_flags(2, 1, 2, vec![true, true, false, false]);
        let v = a.violations(&config);
        assert!(v.iter().any(|v| v.kind == RuleKind::Exclusivity));
    }

    #[test]
    fn test_repeat_adjacent_violation() {
        let config = RosterConfig::new(roster(2), 3, vec![TaskSpec::new("Patrol")])
            .with_cap_slack(1);
        // P0 works the same task on shifts 0 and 1.
        let a = DayAssignment::from_flags(2, 3, 1, vec![true, true, false, false, false, true]);
        let v = a.violations(&config);
        assert!(v.iter().any(|v| v.kind == RuleKind::RepeatAdjacent));
    }

    #[test]
    fn test_workload_cap_violation() {
        let config = RosterConfig::new(roster(2), 2, vec![TaskSpec::new("Patrol")]);
        // Cap is 1 but P0 works both shifts (also a repeat violation).
        let a = DayAssignment::from_flags(2, 2, 1, vec![true, true, false, false]);
        let v = a.violations(&config);
        assert!(v.iter().any(|v| v.kind == RuleKind::WorkloadCap));
    }

    #[test]
    fn test_empty_assignment() {
        let a = DayAssignment::from_flags(2, 2, 1, vec![false; 4]);
        assert!(a.is_empty());
        assert_eq!(a.total_assigned(), 0);
        assert_eq!(a.assigned_person(0, 0), None);
    }
}
