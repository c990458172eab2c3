//! Core data models for budgetbook
//!
//! This module contains the data structures of the budgeting domain:
//! transactions (expenses and income), budget categories, savings goals,
//! and the monthly aggregate that holds them.

pub mod budget;
pub mod category;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod income;
pub mod money;

pub use budget::{
    ExpenseSortKey, MonthlyBudget, SortDirection, TransactionRef, MONTH_NAMES,
};
pub use category::{BudgetCategory, CategoryParseError, CategoryValidationError, ExpenseCategory};
pub use expense::{Expense, ExpenseValidationError};
pub use goal::{GoalValidationError, SavingsGoal};
pub use ids::{CategoryId, ExpenseId, IncomeId, SavingsGoalId};
pub use income::{Income, IncomeSource, IncomeValidationError, SourceParseError};
pub use money::{Money, MoneyParseError};
