//! Rostering domain models.
//!
//! Core data types for the duty-rostering problem and its solutions:
//! the immutable run configuration, the evolving cost table, and the
//! per-day assignment grid.
//!
//! A *slot* is a (person, shift, task) triple — the unit of both cost
//! and decision. Persons and tasks are catalog positions; shifts are
//! 0-based indices into the day's ordered time windows.

mod assignment;
mod config;
mod costs;

pub use assignment::{DayAssignment, RuleKind, RuleViolation};
pub use config::{RosterConfig, ShiftWindow, TaskSpec};
pub use costs::CostTable;
