//! Savings goal model
//!
//! A savings goal tracks money set aside toward a named target, optionally
//! with a deadline. Progress figures are derived on read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SavingsGoalId;
use super::money::Money;

/// A savings goal with an optional deadline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Unique identifier, assigned at creation
    pub id: SavingsGoalId,

    /// Goal name (e.g. "Emergency Fund")
    pub name: String,

    /// Amount to reach
    pub target_amount: Money,

    /// Amount saved so far
    pub current_amount: Money,

    /// Optional date the goal should be reached by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,

    /// Display tag, opaque to the core
    pub color: String,
}

impl SavingsGoal {
    /// Create a new savings goal with a fresh id
    pub fn new(
        name: impl Into<String>,
        target_amount: Money,
        current_amount: Money,
        deadline: Option<NaiveDate>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: SavingsGoalId::new(),
            name: name.into(),
            target_amount,
            current_amount,
            deadline,
            color: color.into(),
        }
    }

    /// Progress toward the target, as a percentage
    ///
    /// Defined as 0 when `target_amount` is zero.
    pub fn progress_percent(&self) -> f64 {
        self.current_amount.percent_of(self.target_amount)
    }

    /// Amount still to save (negative when overfunded)
    pub fn remaining(&self) -> Money {
        self.target_amount - self.current_amount
    }

    /// Whether the target has been reached
    pub fn is_reached(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Whole days from `today` until the deadline
    ///
    /// Dates are calendar days, so the difference is already a whole-day
    /// count. Floored at 0 for deadlines in the past; `None` when no
    /// deadline is set. Callers pass `today` explicitly so the figure is
    /// deterministic under test.
    pub fn days_until_deadline(&self, today: NaiveDate) -> Option<i64> {
        self.deadline.map(|d| (d - today).num_days().max(0))
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if self.target_amount.is_negative() {
            return Err(GoalValidationError::NegativeTargetAmount);
        }

        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrentAmount);
        }

        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NegativeTargetAmount,
    NegativeCurrentAmount,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NegativeTargetAmount => write!(f, "Target amount cannot be negative"),
            Self::NegativeCurrentAmount => write!(f, "Current amount cannot be negative"),
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_goal() {
        let goal = SavingsGoal::new(
            "Emergency Fund",
            Money::from_cents(1000000),
            Money::from_cents(500000),
            Some(date(2027, 1, 1)),
            "#3B82F6",
        );

        assert_eq!(goal.name, "Emergency Fund");
        assert_eq!(goal.progress_percent(), 50.0);
        assert_eq!(goal.remaining().cents(), 500000);
        assert!(!goal.is_reached());
    }

    #[test]
    fn test_progress_zero_target() {
        let goal = SavingsGoal::new("Nothing", Money::zero(), Money::from_cents(100), None, "#000");

        // Zero target is 0%, never a division error
        assert_eq!(goal.progress_percent(), 0.0);
        // An empty goal counts as reached
        assert!(goal.is_reached());
    }

    #[test]
    fn test_days_until_deadline() {
        let today = date(2026, 8, 7);
        let goal = SavingsGoal::new(
            "Vacation",
            Money::from_cents(200000),
            Money::from_cents(80000),
            Some(date(2026, 8, 17)),
            "#10B981",
        );

        assert_eq!(goal.days_until_deadline(today), Some(10));
    }

    #[test]
    fn test_deadline_in_past_floors_at_zero() {
        let today = date(2026, 8, 7);
        let goal = SavingsGoal::new(
            "Late",
            Money::from_cents(100),
            Money::zero(),
            Some(date(2026, 8, 6)),
            "#000",
        );

        assert_eq!(goal.days_until_deadline(today), Some(0));
    }

    #[test]
    fn test_deadline_today_is_zero() {
        let today = date(2026, 8, 7);
        let goal = SavingsGoal::new(
            "Due",
            Money::from_cents(100),
            Money::zero(),
            Some(today),
            "#000",
        );

        assert_eq!(goal.days_until_deadline(today), Some(0));
    }

    #[test]
    fn test_no_deadline() {
        let goal = SavingsGoal::new("Open-ended", Money::from_cents(100), Money::zero(), None, "#000");
        assert_eq!(goal.days_until_deadline(date(2026, 8, 7)), None);
    }

    #[test]
    fn test_validation() {
        let mut goal = SavingsGoal::new(
            "New Laptop",
            Money::from_cents(150000),
            Money::from_cents(30000),
            None,
            "#F59E0B",
        );
        assert!(goal.validate().is_ok());

        goal.name = "  ".to_string();
        assert_eq!(goal.validate(), Err(GoalValidationError::EmptyName));

        goal.name = "New Laptop".to_string();
        goal.target_amount = Money::from_cents(-1);
        assert_eq!(
            goal.validate(),
            Err(GoalValidationError::NegativeTargetAmount)
        );

        goal.target_amount = Money::from_cents(150000);
        goal.current_amount = Money::from_cents(-1);
        assert_eq!(
            goal.validate(),
            Err(GoalValidationError::NegativeCurrentAmount)
        );
    }

    #[test]
    fn test_serialization_omits_missing_deadline() {
        let goal = SavingsGoal::new("No deadline", Money::from_cents(100), Money::zero(), None, "#000");
        let json = serde_json::to_string(&goal).unwrap();
        assert!(!json.contains("deadline"));

        let deserialized: SavingsGoal = serde_json::from_str(&json).unwrap();
        assert!(deserialized.deadline.is_none());
    }
}
