//! Goal records for the Goalboard dashboard engine.
//!
//! This crate holds the aggregate the rest of the workspace reads:
//!
//! - [`Goal`]: the aggregate root, as handed over by the persistence layer
//! - [`SmartGoalData`]: SMART annotation with an optional per-domain progress payload
//! - [`Debt`], [`Streak`], [`BudgetItem`], [`TaskProgress`]: owned sub-records
//! - [`GoalCategory`], [`CapabilityTag`]: the fixed enumerations used for widget matching
//!
//! Records are plain snapshots. Nothing here performs I/O, and callers pass a
//! fully materialized [`Goal`] into the metric and dashboard crates.
//!
//! # Example
//!
//! ```
//! use goal_model::{Goal, GoalCategory};
//!
//! let goal = Goal::new("Emergency fund", GoalCategory::Savings)
//!     .with_estimated_cost(6_000.0)
//!     .with_current_saved(1_500.0)
//!     .with_capabilities(["financial"]);
//!
//! assert_eq!(goal.category, "savings");
//! ```

pub mod goal;
pub mod progress;
pub mod types;

// Re-export main types
pub use goal::{Goal, SmartGoalData};
pub use progress::{BudgetItem, Debt, DomainProgress, Streak, TaskProgress};
pub use types::*;
