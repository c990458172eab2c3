//! Expense categories and per-category budget allocations
//!
//! `ExpenseCategory` is the closed set of labels an expense can carry.
//! `BudgetCategory` is a planned ceiling for one of those labels together
//! with its running `spent_amount`, which the store keeps reconciled with
//! the expense list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::CategoryId;
use super::money::Money;

/// The fixed set of labels an expense can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Housing,
    Food,
    Transportation,
    Utilities,
    Healthcare,
    Entertainment,
    Shopping,
    Education,
    Personal,
    Debt,
    Insurance,
    Savings,
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Housing,
            Self::Food,
            Self::Transportation,
            Self::Utilities,
            Self::Healthcare,
            Self::Entertainment,
            Self::Shopping,
            Self::Education,
            Self::Personal,
            Self::Debt,
            Self::Insurance,
            Self::Savings,
            Self::Other,
        ]
    }

    /// The display label for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Utilities => "Utilities",
            Self::Healthcare => "Healthcare",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Education => "Education",
            Self::Personal => "Personal",
            Self::Debt => "Debt",
            Self::Insurance => "Insurance",
            Self::Savings => "Savings",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| CategoryParseError::UnknownLabel(s.to_string()))
    }
}

/// Error type for parsing category labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    UnknownLabel(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::UnknownLabel(s) => {
                write!(f, "Unknown expense category: {}", s)
            }
        }
    }
}

impl std::error::Error for CategoryParseError {}

/// A budget allocation for one expense category
///
/// `spent_amount` is a derived field: the store adjusts it whenever an
/// expense with the matching label is added or removed. It is informational
/// only; an expense with no matching `BudgetCategory` is still recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Unique identifier
    pub id: CategoryId,

    /// The expense label this allocation budgets for
    pub name: ExpenseCategory,

    /// Planned ceiling for the month
    pub budgeted_amount: Money,

    /// Running total of matching expenses (derived, never negative)
    pub spent_amount: Money,

    /// Display tag, opaque to the core (e.g. "#3B82F6")
    pub color: String,
}

impl BudgetCategory {
    /// Create a new budget category with a fresh id
    pub fn new(
        name: ExpenseCategory,
        budgeted_amount: Money,
        spent_amount: Money,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: CategoryId::new(),
            name,
            budgeted_amount,
            spent_amount,
            color: color.into(),
        }
    }

    /// How much of the budgeted amount has been spent, as a percentage
    ///
    /// Defined as 0 when `budgeted_amount` is zero.
    pub fn utilization_percent(&self) -> f64 {
        self.spent_amount.percent_of(self.budgeted_amount)
    }

    /// Whether spending has gone past the budgeted ceiling
    pub fn is_exceeded(&self) -> bool {
        self.spent_amount > self.budgeted_amount
    }

    /// Budgeted amount still unspent (negative when exceeded)
    pub fn remaining(&self) -> Money {
        self.budgeted_amount - self.spent_amount
    }

    /// Fold an expense amount into the running total
    ///
    /// The result is floored at zero so a bad negative input cannot drive
    /// the total negative.
    pub fn record_spending(&mut self, amount: Money) {
        self.spent_amount = (self.spent_amount + amount).floor_zero();
    }

    /// Back an expense amount out of the running total, floored at zero
    pub fn withdraw_spending(&mut self, amount: Money) {
        self.spent_amount = (self.spent_amount - amount).floor_zero();
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.budgeted_amount.is_negative() {
            return Err(CategoryValidationError::NegativeBudgetedAmount);
        }

        if self.spent_amount.is_negative() {
            return Err(CategoryValidationError::NegativeSpentAmount);
        }

        Ok(())
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for budget categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    NegativeBudgetedAmount,
    NegativeSpentAmount,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBudgetedAmount => write!(f, "Budgeted amount cannot be negative"),
            Self::NegativeSpentAmount => write!(f, "Spent amount cannot be negative"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
