//! Monthly budget aggregate
//!
//! `MonthlyBudget` is the aggregate root the store owns: one month's income,
//! expenses, budget categories, and savings goals, plus the pure derived
//! reads over that snapshot (totals, grouping, merged transaction views).
//! Collections are insertion-ordered; sorting is a read-time concern.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::category::{BudgetCategory, ExpenseCategory};
use super::expense::Expense;
use super::goal::SavingsGoal;
use super::ids::{CategoryId, ExpenseId, IncomeId, SavingsGoalId};
use super::income::Income;
use super::money::Money;

/// Month display names, indexed by the 0-based month number
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Sort key for expense listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseSortKey {
    Date,
    Amount,
}

/// Sort direction for expense listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A borrowed view over either kind of transaction
///
/// Used by the merged recent-transactions listing, where income and
/// expenses interleave by date.
#[derive(Debug, Clone, Copy)]
pub enum TransactionRef<'a> {
    Expense(&'a Expense),
    Income(&'a Income),
}

impl<'a> TransactionRef<'a> {
    /// Calendar date of the underlying transaction
    pub fn date(&self) -> NaiveDate {
        match self {
            TransactionRef::Expense(e) => e.date,
            TransactionRef::Income(i) => i.date,
        }
    }

    /// Amount of the underlying transaction
    pub fn amount(&self) -> Money {
        match self {
            TransactionRef::Expense(e) => e.amount,
            TransactionRef::Income(i) => i.amount,
        }
    }

    /// Description of the underlying transaction
    pub fn description(&self) -> &'a str {
        match self {
            TransactionRef::Expense(e) => &e.description,
            TransactionRef::Income(i) => &i.description,
        }
    }

    /// Whether this is an income entry
    pub fn is_income(&self) -> bool {
        matches!(self, TransactionRef::Income(_))
    }
}

/// One month's complete budgeting state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyBudget {
    /// Month number, 0-based (January = 0)
    pub month: u32,

    /// Calendar year
    pub year: i32,

    /// Income entries, in insertion order
    #[serde(default)]
    pub income: Vec<Income>,

    /// Expense entries, in insertion order
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// Budget allocations, in insertion order
    #[serde(default)]
    pub budget_categories: Vec<BudgetCategory>,

    /// Savings goals, in insertion order
    #[serde(default)]
    pub savings_goals: Vec<SavingsGoal>,
}

impl MonthlyBudget {
    /// Create an empty budget for the given month
    pub fn new(month: u32, year: i32) -> Self {
        Self {
            month,
            year,
            income: Vec::new(),
            expenses: Vec::new(),
            budget_categories: Vec::new(),
            savings_goals: Vec::new(),
        }
    }

    /// Display name for the budget's month
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES
            .get(self.month as usize)
            .copied()
            .unwrap_or("Unknown")
    }

    // === Lookups ===

    /// Find an expense by id
    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == *id)
    }

    /// Find an income entry by id
    pub fn income_entry(&self, id: &IncomeId) -> Option<&Income> {
        self.income.iter().find(|i| i.id == *id)
    }

    /// Find a budget category by id
    pub fn budget_category(&self, id: &CategoryId) -> Option<&BudgetCategory> {
        self.budget_categories.iter().find(|c| c.id == *id)
    }

    /// Find the budget category allocated for a given expense label
    ///
    /// Category linkage is by label equality; there may be none.
    pub fn budget_category_by_name(&self, name: ExpenseCategory) -> Option<&BudgetCategory> {
        self.budget_categories.iter().find(|c| c.name == name)
    }

    /// Mutable variant of [`budget_category_by_name`](Self::budget_category_by_name)
    pub fn budget_category_by_name_mut(
        &mut self,
        name: ExpenseCategory,
    ) -> Option<&mut BudgetCategory> {
        self.budget_categories.iter_mut().find(|c| c.name == name)
    }

    /// Find a savings goal by id
    pub fn savings_goal(&self, id: &SavingsGoalId) -> Option<&SavingsGoal> {
        self.savings_goals.iter().find(|g| g.id == *id)
    }

    // === Derived reads ===

    /// Sum of all income amounts
    pub fn total_income(&self) -> Money {
        self.income.iter().map(|i| i.amount).sum()
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Total income minus total expenses (may be negative)
    pub fn remaining_budget(&self) -> Money {
        self.total_income() - self.total_expenses()
    }

    /// Remaining budget as a percentage of total income
    ///
    /// 0 when there is no income; negative when spending exceeds income.
    pub fn savings_rate(&self) -> f64 {
        self.remaining_budget().percent_of(self.total_income())
    }

    /// Summed expense amounts per category label, built in one pass
    ///
    /// Key order is unspecified; consumers sort as needed.
    pub fn expenses_by_category(&self) -> HashMap<ExpenseCategory, Money> {
        let mut grouped: HashMap<ExpenseCategory, Money> = HashMap::new();
        for expense in &self.expenses {
            *grouped.entry(expense.category).or_insert_with(Money::zero) += expense.amount;
        }
        grouped
    }

    /// The most recent transactions across income and expenses
    ///
    /// Sorted most-recent first; same-date entries keep insertion order.
    pub fn recent_transactions(&self, limit: usize) -> Vec<TransactionRef<'_>> {
        let mut all: Vec<TransactionRef<'_>> = self
            .expenses
            .iter()
            .map(TransactionRef::Expense)
            .chain(self.income.iter().map(TransactionRef::Income))
            .collect();

        all.sort_by(|a, b| b.date().cmp(&a.date()));
        all.truncate(limit);
        all
    }

    /// Expense listing with an optional category filter and a sort order
    pub fn expenses_sorted(
        &self,
        filter: Option<ExpenseCategory>,
        key: ExpenseSortKey,
        direction: SortDirection,
    ) -> Vec<&Expense> {
        let mut listed: Vec<&Expense> = self
            .expenses
            .iter()
            .filter(|e| filter.map_or(true, |c| e.category == c))
            .collect();

        listed.sort_by(|a, b| {
            let ordering = match key {
                ExpenseSortKey::Date => a.date.cmp(&b.date),
                ExpenseSortKey::Amount => a.amount.cmp(&b.amount),
            };
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        listed
    }
}
