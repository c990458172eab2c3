//! Expense transaction model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;

/// A single expense transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned at creation
    pub id: ExpenseId,

    /// Transaction amount (positive)
    pub amount: Money,

    /// Calendar date of the transaction
    pub date: NaiveDate,

    /// Free-text description
    pub description: String,

    /// Category label the expense is filed under
    pub category: ExpenseCategory,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: ExpenseCategory,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            date,
            description: description.into(),
            category,
        }
    }

    /// Validate the expense
    ///
    /// The store itself never rejects an expense; this is the gate the
    /// calling layer applies before invoking a mutation.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.description, self.category, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
    EmptyDescription,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Expense amount must be positive"),
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(
            Money::from_cents(40000),
            "Grocery Shopping",
            ExpenseCategory::Food,
            date(2026, 8, 8),
        );

        assert_eq!(expense.amount.cents(), 40000);
        assert_eq!(expense.description, "Grocery Shopping");
        assert_eq!(expense.category, ExpenseCategory::Food);
    }

    #[test]
    fn test_fresh_ids() {
        let a = Expense::new(
            Money::from_cents(100),
            "a",
            ExpenseCategory::Other,
            date(2026, 8, 1),
        );
        let b = Expense::new(
            Money::from_cents(100),
            "b",
            ExpenseCategory::Other,
            date(2026, 8, 1),
        );
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_validation() {
        let mut expense = Expense::new(
            Money::from_cents(100),
            "Lunch",
            ExpenseCategory::Food,
            date(2026, 8, 1),
        );
        assert!(expense.validate().is_ok());

        expense.amount = Money::zero();
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::NonPositiveAmount)
        );

        expense.amount = Money::from_cents(100);
        expense.description = "   ".to_string();
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::new(
            Money::from_cents(15000),
            "Gas",
            ExpenseCategory::Transportation,
            date(2026, 8, 20),
        );

        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense.id, deserialized.id);
        assert_eq!(expense.amount, deserialized.amount);
        assert_eq!(expense.category, deserialized.category);
    }
}
