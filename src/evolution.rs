//! Day-over-day cost evolution.
//!
//! After each solved day, every slot a person worked inflates the cost
//! of that person's temporally nearby slots for subsequent days. The
//! inflation at a nearby shift is the distance weight times that cell's
//! base cost, and it applies to all tasks at that shift alike: fatigue
//! depends on when you worked, not on what you did. Over successive
//! days this biases the optimizer toward rotating assignments.
//!
//! This is a heuristic fairness mechanism with no closed-form bound;
//! the end-to-end tests in [`crate::scheduler`] exercise it empirically.

use crate::models::{CostTable, DayAssignment, RosterConfig};
use crate::weighting::DistanceProfile;

/// Produces the next day's cost table from the current one and a day's
/// assignment, and seeds the initial table before any day is solved.
///
/// Pure: both operations return a fresh table, the inputs are never
/// mutated in place.
#[derive(Debug, Clone, Copy)]
pub struct CostEvolver<'a> {
    config: &'a RosterConfig,
}

impl<'a> CostEvolver<'a> {
    /// Creates an evolver for the given configuration.
    pub fn new(config: &'a RosterConfig) -> Self {
        Self { config }
    }

    /// Evolves the cost table by one solved day.
    ///
    /// For every shift a person worked, every (shift2, task2) cell of
    /// that person's row gains `weight(shift, shift2) * base_cost(shift2,
    /// task2)`. A person who did not work contributes nothing, so an
    /// all-empty assignment leaves the table bit-for-bit unchanged.
    pub fn evolve(&self, costs: &CostTable, day: &DayAssignment) -> CostTable {
        let mut next = costs.clone();
        for person in 0..self.config.roster_len() {
            for (shift, _task) in day.worked_slots(person) {
                self.inflate(&mut next, person, shift, None);
            }
        }
        next
    }

    /// Seeds the day-0 cost table with a deterministic greedy pass.
    ///
    /// Walks the roster in order, repeatedly, giving each person the
    /// first required (shift, task) cell not yet claimed and not
    /// matching that person's previous pick's task (falling back to any
    /// unclaimed cell when the filter leaves nothing), until every
    /// required cell is claimed. Each pick applies the same distance
    /// inflation as [`evolve`](Self::evolve), except that the picked
    /// cell itself is left unraised: the claimant keeps a zero
    /// self-cost there while every neighboring cell rises, which is the
    /// signal the first real solve starts from.
    pub fn seed(&self) -> CostTable {
        let config = self.config;
        let mut costs = CostTable::zeroed(
            config.roster_len(),
            config.shift_count,
            config.task_count(),
        );

        // Required cells in shift-major order.
        let required: Vec<(usize, usize)> = (0..config.shift_count)
            .flat_map(|s| {
                (0..config.task_count())
                    .filter(move |&t| config.is_required(s, t))
                    .map(move |t| (s, t))
            })
            .collect();

        let mut claimed = vec![false; required.len()];
        let mut remaining = required.len();
        let mut last_task: Vec<Option<usize>> = vec![None; config.roster_len()];

        while remaining > 0 && !config.roster.is_empty() {
            for person in 0..config.roster_len() {
                if remaining == 0 {
                    break;
                }
                let pick = required
                    .iter()
                    .enumerate()
                    .find(|(i, (_, t))| !claimed[*i] && last_task[person] != Some(*t))
                    .or_else(|| {
                        // Every unclaimed cell repeats this person's task.
                        required.iter().enumerate().find(|(i, _)| !claimed[*i])
                    })
                    .map(|(i, &(s, t))| (i, s, t));

                if let Some((i, shift, task)) = pick {
                    claimed[i] = true;
                    remaining -= 1;
                    last_task[person] = Some(task);
                    self.inflate(&mut costs, person, shift, Some((shift, task)));
                }
            }
        }

        costs
    }

    /// Adds the distance-weighted base costs around `reference` into one
    /// person's row, optionally leaving a single cell untouched.
    fn inflate(
        &self,
        costs: &mut CostTable,
        person: usize,
        reference: usize,
        skip: Option<(usize, usize)>,
    ) {
        let config = self.config;
        let profile =
            DistanceProfile::around(reference, config.shift_count, config.decay_exponent);
        for shift in 0..config.shift_count {
            let weight = profile.weight(shift);
            for task in 0..config.task_count() {
                if skip == Some((shift, task)) {
                    continue;
                }
                costs.add(person, shift, task, weight * config.base_cost(shift, task));
            }
        }
    }
}
