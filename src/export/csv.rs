//! CSV export
//!
//! Writes transaction and allocation rows in a spreadsheet-friendly shape.
//! Amounts are rendered as decimal currency units.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::MonthlyBudget;

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(budget: &MonthlyBudget, writer: &mut W) -> BudgetResult<()> {
    writeln!(writer, "ID,Date,Description,Category,Amount")
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    for expense in &budget.expenses {
        writeln!(
            writer,
            "{},{},{},{},{:.2}",
            expense.id,
            expense.date,
            escape_csv(&expense.description),
            expense.category,
            expense.amount.cents() as f64 / 100.0
        )
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export all income entries to CSV
pub fn export_incomes_csv<W: Write>(budget: &MonthlyBudget, writer: &mut W) -> BudgetResult<()> {
    writeln!(writer, "ID,Date,Description,Source,Amount")
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    for income in &budget.income {
        writeln!(
            writer,
            "{},{},{},{},{:.2}",
            income.id,
            income.date,
            escape_csv(&income.description),
            income.source,
            income.amount.cents() as f64 / 100.0
        )
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export all budget categories to CSV
pub fn export_categories_csv<W: Write>(
    budget: &MonthlyBudget,
    writer: &mut W,
) -> BudgetResult<()> {
    writeln!(writer, "ID,Name,Budgeted,Spent,Remaining,Color")
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    for category in &budget.budget_categories {
        writeln!(
            writer,
            "{},{},{:.2},{:.2},{:.2},{}",
            category.id,
            category.name,
            category.budgeted_amount.cents() as f64 / 100.0,
            category.spent_amount.cents() as f64 / 100.0,
            category.remaining().cents() as f64 / 100.0,
            escape_csv(&category.color)
        )
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Quote a field if it contains CSV-special characters
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseCategory, Money};
    use chrono::NaiveDate;

    fn budget_with_one_expense(description: &str) -> MonthlyBudget {
        let mut budget = MonthlyBudget::new(7, 2026);
        budget.expenses.push(Expense::new(
            Money::from_cents(150000),
            description,
            ExpenseCategory::Housing,
            NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
        ));
        budget
    }

    #[test]
    fn test_export_expenses() {
        let budget = budget_with_one_expense("Monthly Rent");
        let mut out = Vec::new();
        export_expenses_csv(&budget, &mut out).unwrap();

        let csv = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ID,Date,Description,Category,Amount");
        assert!(lines[1].contains("2026-08-05,Monthly Rent,Housing,1500.00"));
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_export_quotes_commas_in_descriptions() {
        let budget = budget_with_one_expense("Rent, August");
        let mut out = Vec::new();
        export_expenses_csv(&budget, &mut out).unwrap();

        let csv = String::from_utf8(out).unwrap();
        assert!(csv.contains("\"Rent, August\""));
    }

    #[test]
    fn test_export_categories() {
        let mut budget = MonthlyBudget::new(7, 2026);
        budget.budget_categories.push(crate::models::BudgetCategory::new(
            ExpenseCategory::Food,
            Money::from_cents(70000),
            Money::from_cents(60000),
            "#10B981",
        ));

        let mut out = Vec::new();
        export_categories_csv(&budget, &mut out).unwrap();

        let csv = String::from_utf8(out).unwrap();
        assert!(csv.contains("Food,700.00,600.00,100.00,#10B981"));
    }
}
