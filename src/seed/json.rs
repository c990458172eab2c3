//! JSON snapshot loading
//!
//! Reads a complete `MonthlyBudget` from JSON, e.g. a fixture file shipped
//! with the application or a snapshot a previous session exported.

use std::io::Read;

use crate::error::BudgetResult;
use crate::models::MonthlyBudget;

/// Parse a budget snapshot from a JSON string
pub fn budget_from_json_str(json: &str) -> BudgetResult<MonthlyBudget> {
    Ok(serde_json::from_str(json)?)
}

/// Read a budget snapshot from a JSON reader
pub fn budget_from_json_reader<R: Read>(reader: R) -> BudgetResult<MonthlyBudget> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BudgetError;
    use crate::seed::sample::sample_budget_for;
    use chrono::NaiveDate;

    #[test]
    fn test_round_trip_through_json() {
        let budget = sample_budget_for(NaiveDate::from_ymd_opt(2026, 8, 7).unwrap());
        let json = serde_json::to_string(&budget).unwrap();

        let loaded = budget_from_json_str(&json).unwrap();
        assert_eq!(loaded.month, budget.month);
        assert_eq!(loaded.expenses.len(), budget.expenses.len());
        assert_eq!(loaded.total_expenses(), budget.total_expenses());
        assert_eq!(loaded.expenses[0].id, budget.expenses[0].id);
    }

    #[test]
    fn test_minimal_snapshot() {
        let loaded = budget_from_json_str(r#"{"month": 0, "year": 2027}"#).unwrap();
        assert_eq!(loaded.month_name(), "January");
        assert!(loaded.expenses.is_empty());
    }

    #[test]
    fn test_from_reader() {
        let json = r#"{"month": 3, "year": 2026, "income": [], "expenses": [],
                       "budget_categories": [], "savings_goals": []}"#;
        let loaded = budget_from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(loaded.month, 3);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = budget_from_json_str("{not json");
        assert!(matches!(result, Err(BudgetError::Json(_))));
    }
}
