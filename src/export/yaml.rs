//! YAML full export
//!
//! Same envelope as the JSON export, in a shape that is comfortable to
//! read and diff by hand.

use std::io::Write;

use crate::error::BudgetResult;
use crate::models::MonthlyBudget;

use super::json::FullExport;

/// Write the full snapshot as YAML
pub fn export_full_yaml<W: Write>(budget: &MonthlyBudget, writer: &mut W) -> BudgetResult<()> {
    let export = FullExport::new(budget);
    serde_yaml::to_writer(writer, &export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_budget_for;
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export_round_trip() {
        let budget = sample_budget_for(NaiveDate::from_ymd_opt(2026, 8, 7).unwrap());
        let mut out = Vec::new();
        export_full_yaml(&budget, &mut out).unwrap();

        let yaml = String::from_utf8(out).unwrap();
        assert!(yaml.contains("schema_version: 1"));
        assert!(yaml.contains("Monthly Rent"));

        let parsed: FullExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.budget.savings_goals.len(), 3);
    }
}
