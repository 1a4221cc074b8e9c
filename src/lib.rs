//! Duty rostering over a recurring (shift, task) grid.
//!
//! Assigns a fixed roster of people to the day's (shift, task) slots,
//! day after day, by solving each day as a 0/1 assignment problem and
//! then inflating the costs of slots near what each person just worked.
//! The cost evolution is the fairness mechanism: repeated burden on the
//! same person grows steadily more expensive, so the optimizer rotates
//! assignments over the horizon.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `RosterConfig`, `TaskSpec`,
//!   `ShiftWindow`, `CostTable`, `DayAssignment`
//! - **`validation`**: Configuration integrity checks
//! - **`weighting`**: Distance-decay profiles over shifts
//! - **`evolution`**: Day-over-day cost evolution and day-0 seeding
//! - **`mip`**: MILP model assembly and the solving-engine adapter
//! - **`scheduler`**: The sequential day-by-day loop
//! - **`error`**: Run-level error taxonomy
//!
//! # Architecture
//!
//! Each day is solved independently and myopically on the current cost
//! table; there is no global optimization across days. The solving
//! engine is an external oracle behind `good_lp` — this crate only
//! formulates models and interprets solutions.
//!
//! # References
//!
//! - Burkard, Dell'Amico, Martello (2009), "Assignment Problems"
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review"

pub mod error;
pub mod evolution;
pub mod mip;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod weighting;
