//! Built-in sample budget
//!
//! A demo month with a realistic spread of expenses, income, allocations,
//! and savings goals, dated within the month containing `today`.

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::models::{
    BudgetCategory, Expense, ExpenseCategory, Income, IncomeSource, Money, MonthlyBudget,
    SavingsGoal,
};

/// Sample budget for the current month
pub fn sample_budget() -> MonthlyBudget {
    sample_budget_for(Local::now().date_naive())
}

/// Sample budget for the month containing `today`
///
/// Deterministic given `today`, so tests can pin the date.
pub fn sample_budget_for(today: NaiveDate) -> MonthlyBudget {
    let year = today.year();
    let month = today.month();
    // All fixture days fall on or before the 25th, so this never overflows
    // the month
    let day = |d: u32| NaiveDate::from_ymd_opt(year, month, d).unwrap();
    let first_of_month = day(1);

    let mut budget = MonthlyBudget::new(today.month0(), year);

    budget.expenses = vec![
        Expense::new(
            Money::from_dollars_cents(1500, 0),
            "Monthly Rent",
            ExpenseCategory::Housing,
            day(5),
        ),
        Expense::new(
            Money::from_dollars_cents(400, 0),
            "Grocery Shopping",
            ExpenseCategory::Food,
            day(8),
        ),
        Expense::new(
            Money::from_dollars_cents(120, 0),
            "Electricity Bill",
            ExpenseCategory::Utilities,
            day(12),
        ),
        Expense::new(
            Money::from_dollars_cents(80, 0),
            "Internet Bill",
            ExpenseCategory::Utilities,
            day(15),
        ),
        Expense::new(
            Money::from_dollars_cents(200, 0),
            "Dining Out",
            ExpenseCategory::Food,
            day(18),
        ),
        Expense::new(
            Money::from_dollars_cents(150, 0),
            "Gas",
            ExpenseCategory::Transportation,
            day(20),
        ),
        Expense::new(
            Money::from_dollars_cents(50, 0),
            "Movie Night",
            ExpenseCategory::Entertainment,
            day(22),
        ),
        Expense::new(
            Money::from_dollars_cents(300, 0),
            "New Clothes",
            ExpenseCategory::Shopping,
            day(25),
        ),
    ];

    budget.income = vec![
        Income::new(
            Money::from_dollars_cents(4000, 0),
            "Monthly Salary",
            IncomeSource::Salary,
            day(1),
        ),
        Income::new(
            Money::from_dollars_cents(500, 0),
            "Freelance Project",
            IncomeSource::Freelance,
            day(15),
        ),
    ];

    // spent_amount values match the expense list above
    budget.budget_categories = vec![
        BudgetCategory::new(
            ExpenseCategory::Housing,
            Money::from_dollars_cents(1500, 0),
            Money::from_dollars_cents(1500, 0),
            "#3B82F6",
        ),
        BudgetCategory::new(
            ExpenseCategory::Food,
            Money::from_dollars_cents(700, 0),
            Money::from_dollars_cents(600, 0),
            "#10B981",
        ),
        BudgetCategory::new(
            ExpenseCategory::Transportation,
            Money::from_dollars_cents(200, 0),
            Money::from_dollars_cents(150, 0),
            "#F59E0B",
        ),
        BudgetCategory::new(
            ExpenseCategory::Utilities,
            Money::from_dollars_cents(250, 0),
            Money::from_dollars_cents(200, 0),
            "#8B5CF6",
        ),
        BudgetCategory::new(
            ExpenseCategory::Entertainment,
            Money::from_dollars_cents(150, 0),
            Money::from_dollars_cents(50, 0),
            "#EC4899",
        ),
        BudgetCategory::new(
            ExpenseCategory::Shopping,
            Money::from_dollars_cents(300, 0),
            Money::from_dollars_cents(300, 0),
            "#F97316",
        ),
    ];

    budget.savings_goals = vec![
        SavingsGoal::new(
            "Emergency Fund",
            Money::from_dollars_cents(10000, 0),
            Money::from_dollars_cents(5000, 0),
            NaiveDate::from_ymd_opt(year + 1, 1, 1),
            "#3B82F6",
        ),
        SavingsGoal::new(
            "Vacation",
            Money::from_dollars_cents(2000, 0),
            Money::from_dollars_cents(800, 0),
            first_of_month.checked_add_months(Months::new(3)),
            "#10B981",
        ),
        SavingsGoal::new(
            "New Laptop",
            Money::from_dollars_cents(1500, 0),
            Money::from_dollars_cents(300, 0),
            first_of_month.checked_add_months(Months::new(6)),
            "#F59E0B",
        ),
    ];

    budget
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_sample_shape() {
        let budget = sample_budget_for(fixed_today());

        assert_eq!(budget.month, 7); // August, 0-based
        assert_eq!(budget.year, 2026);
        assert_eq!(budget.expenses.len(), 8);
        assert_eq!(budget.income.len(), 2);
        assert_eq!(budget.budget_categories.len(), 6);
        assert_eq!(budget.savings_goals.len(), 3);
    }

    #[test]
    fn test_sample_totals() {
        let budget = sample_budget_for(fixed_today());

        assert_eq!(budget.total_income(), Money::from_dollars_cents(4500, 0));
        assert_eq!(budget.total_expenses(), Money::from_dollars_cents(2800, 0));
        assert_eq!(
            budget.remaining_budget(),
            Money::from_dollars_cents(1700, 0)
        );
    }

    #[test]
    fn test_sample_is_reconciled() {
        // The fixture's spent_amount figures agree with its expense list,
        // so the reconciliation invariant holds from the first mutation on
        let budget = sample_budget_for(fixed_today());
        let grouped = budget.expenses_by_category();

        for category in &budget.budget_categories {
            assert_eq!(
                category.spent_amount,
                grouped.get(&category.name).copied().unwrap_or_else(Money::zero),
                "spent_amount mismatch for {}",
                category.name
            );
        }
    }

    #[test]
    fn test_sample_entities_validate() {
        let budget = sample_budget_for(fixed_today());

        for expense in &budget.expenses {
            assert!(expense.validate().is_ok());
        }
        for income in &budget.income {
            assert!(income.validate().is_ok());
        }
        for category in &budget.budget_categories {
            assert!(category.validate().is_ok());
        }
        for goal in &budget.savings_goals {
            assert!(goal.validate().is_ok());
        }
    }

    #[test]
    fn test_sample_deadlines() {
        let budget = sample_budget_for(fixed_today());

        assert_eq!(
            budget.savings_goals[0].deadline,
            NaiveDate::from_ymd_opt(2027, 1, 1)
        );
        assert_eq!(
            budget.savings_goals[1].deadline,
            NaiveDate::from_ymd_opt(2026, 11, 1)
        );
        assert_eq!(
            budget.savings_goals[2].deadline,
            NaiveDate::from_ymd_opt(2027, 2, 1)
        );
    }

    #[test]
    fn test_sample_near_year_end() {
        // +6 months from December crosses the year boundary
        let budget = sample_budget_for(NaiveDate::from_ymd_opt(2026, 12, 15).unwrap());

        assert_eq!(budget.month, 11);
        assert_eq!(
            budget.savings_goals[2].deadline,
            NaiveDate::from_ymd_opt(2027, 6, 1)
        );
    }
}
