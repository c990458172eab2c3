//! Reports over a monthly budget snapshot
//!
//! Reports are pure derivations: generating one never mutates the budget,
//! and the same snapshot always yields the same figures.

pub mod overview;
pub mod spending;

pub use overview::{BudgetOverviewReport, CategoryUtilization, UtilizationStatus};
pub use spending::{CategorySpending, SpendingReport};
