//! budgetbook - in-memory personal monthly budgeting core
//!
//! budgetbook owns one month's financial state - income and expense
//! transactions, per-category budget allocations, and savings goals - and
//! exposes a small mutation surface that keeps derived category totals
//! consistent with the transaction list. State lives in memory for the
//! session; a seed provider supplies the initial value and the presentation
//! layer consumes snapshots and derived reports.
//!
//! # Architecture
//!
//! - `config`: paths and user display settings
//! - `error`: custom error types
//! - `models`: core data models (transactions, categories, goals, aggregate)
//! - `store`: the budget store, the single mutation surface
//! - `audit`: in-memory audit log of store mutations
//! - `reports`: derived spending and utilization reports
//! - `seed`: initial-data providers (sample fixture, JSON, CSV)
//! - `export`: CSV/JSON/YAML snapshot export
//!
//! # Example
//!
//! ```
//! use budgetbook::models::{ExpenseCategory, Money};
//! use budgetbook::seed;
//! use budgetbook::store::BudgetStore;
//!
//! let mut store = BudgetStore::new(seed::sample_budget());
//!
//! let lunch = store.add_expense(
//!     Money::from_dollars_cents(12, 50),
//!     "Lunch",
//!     ExpenseCategory::Food,
//!     chrono::Local::now().date_naive(),
//! );
//! assert!(store.budget().total_expenses().is_positive());
//!
//! // Deletes are idempotent
//! assert!(store.remove_expense(&lunch.id));
//! assert!(!store.remove_expense(&lunch.id));
//! ```

pub mod audit;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod seed;
pub mod store;

pub use error::{BudgetError, BudgetResult};
pub use store::BudgetStore;
