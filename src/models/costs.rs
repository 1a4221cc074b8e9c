//! Cost table model.
//!
//! The cost table is the single piece of state carried across days: a
//! dense person × shift × task matrix of real-valued costs with an
//! explicit 0.0 default for every cell. It is owned and mutated only by
//! the day scheduler, between days, never mid-day.
//!
//! The table serializes with serde so a multi-day run can be
//! checkpointed and resumed without recomputing earlier days.

use serde::{Deserialize, Serialize};

/// Dense person × shift × task cost matrix.
///
/// Every cell exists and defaults to 0.0; there is no
/// absence-means-zero convention to misread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostTable {
    persons: usize,
    shifts: usize,
    tasks: usize,
    values: Vec<f64>,
}

impl CostTable {
    /// Creates an all-zero table with the given dimensions.
    pub fn zeroed(persons: usize, shifts: usize, tasks: usize) -> Self {
        Self {
            persons,
            shifts,
            tasks,
            values: vec![0.0; persons * shifts * tasks],
        }
    }

    #[inline]
    fn index(&self, person: usize, shift: usize, task: usize) -> usize {
        debug_assert!(person < self.persons && shift < self.shifts && task < self.tasks);
        (person * self.shifts + shift) * self.tasks + task
    }

    /// Cost of a slot.
    #[inline]
    pub fn get(&self, person: usize, shift: usize, task: usize) -> f64 {
        self.values[self.index(person, shift, task)]
    }

    /// Overwrites the cost of a slot.
    #[inline]
    pub fn set(&mut self, person: usize, shift: usize, task: usize, value: f64) {
        let i = self.index(person, shift, task);
        self.values[i] = value;
    }

    /// Adds a delta to the cost of a slot.
    #[inline]
    pub fn add(&mut self, person: usize, shift: usize, task: usize, delta: f64) {
        let i = self.index(person, shift, task);
        self.values[i] += delta;
    }

    /// Number of persons.
    pub fn person_count(&self) -> usize {
        self.persons
    }

    /// Number of shifts.
    pub fn shift_count(&self) -> usize {
        self.shifts
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks
    }

    /// Whether the table has the given dimensions.
    pub fn has_dims(&self, persons: usize, shifts: usize, tasks: usize) -> bool {
        self.persons == persons && self.shifts == shifts && self.tasks == tasks
    }
}
