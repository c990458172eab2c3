//! JSON full export
//!
//! Wraps the complete snapshot in a versioned envelope so future readers
//! can tell what shape they are looking at.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BudgetResult;
use crate::models::MonthlyBudget;

/// Schema version written into every full export
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// A complete budget snapshot with export metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version of this export
    pub schema_version: u32,

    /// When the export was produced (UTC)
    pub exported_at: DateTime<Utc>,

    /// The snapshot itself
    pub budget: MonthlyBudget,
}

impl FullExport {
    /// Wrap a snapshot for export
    pub fn new(budget: &MonthlyBudget) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            budget: budget.clone(),
        }
    }
}

/// Write the full snapshot as pretty-printed JSON
pub fn export_full_json<W: Write>(budget: &MonthlyBudget, writer: &mut W) -> BudgetResult<()> {
    let export = FullExport::new(budget);
    serde_json::to_writer_pretty(writer, &export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_budget_for;
    use chrono::NaiveDate;

    #[test]
    fn test_full_export_round_trip() {
        let budget = sample_budget_for(NaiveDate::from_ymd_opt(2026, 8, 7).unwrap());
        let mut out = Vec::new();
        export_full_json(&budget, &mut out).unwrap();

        let parsed: FullExport = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.budget.expenses.len(), budget.expenses.len());
        assert_eq!(parsed.budget.total_income(), budget.total_income());
    }

    #[test]
    fn test_export_is_valid_seed_input() {
        // A full export's budget field can be fed back through the JSON
        // seed loader
        let budget = sample_budget_for(NaiveDate::from_ymd_opt(2026, 8, 7).unwrap());
        let mut out = Vec::new();
        export_full_json(&budget, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let reloaded =
            crate::seed::budget_from_json_str(&value["budget"].to_string()).unwrap();
        assert_eq!(reloaded.month, budget.month);
    }
}
