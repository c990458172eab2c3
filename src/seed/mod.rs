//! Seed data providers
//!
//! The store takes its initial `MonthlyBudget` from a data provider and has
//! no opinion where that value comes from. This module supplies the built-in
//! options: a static sample fixture, a JSON snapshot loader, and CSV
//! transaction importers.

pub mod csv;
pub mod json;
pub mod sample;

pub use self::csv::{expenses_from_csv_reader, incomes_from_csv_reader};
pub use self::json::{budget_from_json_reader, budget_from_json_str};
pub use self::sample::{sample_budget, sample_budget_for};
