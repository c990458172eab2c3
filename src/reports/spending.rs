//! Spending report
//!
//! Spending analysis for the month held in a budget snapshot: per-category
//! breakdown, income vs. expenses, and summary insights.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{ExpenseCategory, Money, MonthlyBudget};

/// Spending breakdown for one category label
#[derive(Debug, Clone)]
pub struct CategorySpending {
    /// Category label
    pub category: ExpenseCategory,
    /// Total spending in this category
    pub amount: Money,
    /// Number of expenses in this category
    pub transaction_count: usize,
    /// Share of total spending, as a percentage
    pub percentage: f64,
}

/// Spending report over one monthly snapshot
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Month number, 0-based
    pub month: u32,
    /// Calendar year
    pub year: i32,
    /// Month display name
    pub month_name: &'static str,
    /// Per-category breakdown, largest spending first
    pub categories: Vec<CategorySpending>,
    /// Total spending across all categories
    pub total_spending: Money,
    /// Total income in the month
    pub total_income: Money,
    /// Income minus spending (may be negative)
    pub remaining: Money,
    /// Remaining as a percentage of income (0 when there is no income)
    pub savings_rate: f64,
    /// Total expense transaction count
    pub transaction_count: usize,
    /// Mean expense amount (zero when there are no expenses)
    pub average_expense: Money,
}

impl SpendingReport {
    /// Generate a spending report from a snapshot
    pub fn generate(budget: &MonthlyBudget) -> Self {
        let total_spending = budget.total_expenses();
        let total_income = budget.total_income();

        let mut categories: Vec<CategorySpending> = budget
            .expenses_by_category()
            .into_iter()
            .map(|(category, amount)| CategorySpending {
                category,
                amount,
                transaction_count: budget
                    .expenses
                    .iter()
                    .filter(|e| e.category == category)
                    .count(),
                percentage: amount.percent_of(total_spending),
            })
            .collect();

        // Largest spending first; label order breaks ties deterministically
        categories.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.as_str().cmp(b.category.as_str()))
        });

        let transaction_count = budget.expenses.len();
        let average_expense = if transaction_count == 0 {
            Money::zero()
        } else {
            Money::from_cents(
                (total_spending.cents() as f64 / transaction_count as f64).round() as i64,
            )
        };

        Self {
            month: budget.month,
            year: budget.year,
            month_name: budget.month_name(),
            categories,
            total_spending,
            total_income,
            remaining: budget.remaining_budget(),
            savings_rate: budget.savings_rate(),
            transaction_count,
            average_expense,
        }
    }

    /// The category with the most spending, if any
    pub fn highest(&self) -> Option<&CategorySpending> {
        self.categories.first()
    }

    /// The category with the least spending, if any
    pub fn lowest(&self) -> Option<&CategorySpending> {
        self.categories.last()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Spending Report: {} {}\n",
            self.month_name, self.year
        ));
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!("Total Income:    {}\n", self.total_income));
        output.push_str(&format!("Total Spending:  {}\n", self.total_spending));
        output.push_str(&format!("Remaining:       {}\n", self.remaining));
        output.push_str(&format!("Savings Rate:    {:.1}%\n", self.savings_rate));
        output.push_str(&format!(
            "Transactions:    {} (avg {})\n\n",
            self.transaction_count, self.average_expense
        ));

        output.push_str(&format!(
            "{:<20} {:>12} {:>8} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "{:<20} {:>12} {:>8} {:>7.1}%\n",
                category.category.as_str(),
                category.amount.to_string(),
                category.transaction_count,
                category.percentage
            ));
        }

        output
    }

    /// Write the per-category rows as CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> BudgetResult<()> {
        writeln!(writer, "Month,Year,Category,Amount,Transaction Count,Percentage")
            .map_err(|e| BudgetError::Export(e.to_string()))?;

        for category in &self.categories {
            writeln!(
                writer,
                "{},{},{},{:.2},{},{:.2}",
                self.month_name,
                self.year,
                category.category,
                category.amount.cents() as f64 / 100.0,
                category.transaction_count,
                category.percentage
            )
            .map_err(|e| BudgetError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "{},{},TOTAL,{:.2},{},100.00",
            self.month_name,
            self.year,
            self.total_spending.cents() as f64 / 100.0,
            self.transaction_count
        )
        .map_err(|e| BudgetError::Export(e.to_string()))?;

        Ok(())
    }
}
