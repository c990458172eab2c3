//! Income transaction model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::IncomeId;
use super::money::Money;

/// The fixed set of sources an income entry can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeSource {
    Salary,
    Freelance,
    Investments,
    Bonus,
    Gift,
    Other,
}

impl IncomeSource {
    /// All sources in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Salary,
            Self::Freelance,
            Self::Investments,
            Self::Bonus,
            Self::Gift,
            Self::Other,
        ]
    }

    /// The display label for this source
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Investments => "Investments",
            Self::Bonus => "Bonus",
            Self::Gift => "Gift",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncomeSource {
    type Err = SourceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|src| src.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| SourceParseError::UnknownLabel(s.to_string()))
    }
}

/// Error type for parsing income source labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceParseError {
    UnknownLabel(String),
}

impl fmt::Display for SourceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceParseError::UnknownLabel(s) => write!(f, "Unknown income source: {}", s),
        }
    }
}

impl std::error::Error for SourceParseError {}

/// A single income transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    /// Unique identifier, assigned at creation
    pub id: IncomeId,

    /// Transaction amount (positive)
    pub amount: Money,

    /// Calendar date of the transaction
    pub date: NaiveDate,

    /// Free-text description
    pub description: String,

    /// Where the money came from
    pub source: IncomeSource,
}

impl Income {
    /// Create a new income entry with a fresh id
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        source: IncomeSource,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: IncomeId::new(),
            amount,
            date,
            description: description.into(),
            source,
        }
    }

    /// Validate the income entry
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if !self.amount.is_positive() {
            return Err(IncomeValidationError::NonPositiveAmount);
        }

        if self.description.trim().is_empty() {
            return Err(IncomeValidationError::EmptyDescription);
        }

        Ok(())
    }
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.description, self.source, self.amount)
    }
}

/// Validation errors for income entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NonPositiveAmount,
    EmptyDescription,
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Income amount must be positive"),
            Self::EmptyDescription => write!(f, "Income description cannot be empty"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_all_sources() {
        let all = IncomeSource::all();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], IncomeSource::Salary);
        assert_eq!(all[5], IncomeSource::Other);
    }

    #[test]
    fn test_source_from_str() {
        assert_eq!(
            "Freelance".parse::<IncomeSource>().unwrap(),
            IncomeSource::Freelance
        );
        assert_eq!("gift".parse::<IncomeSource>().unwrap(), IncomeSource::Gift);
        assert!(matches!(
            "Lottery".parse::<IncomeSource>(),
            Err(SourceParseError::UnknownLabel(_))
        ));
    }

    #[test]
    fn test_new_income() {
        let income = Income::new(
            Money::from_cents(400000),
            "Monthly Salary",
            IncomeSource::Salary,
            date(2026, 8, 1),
        );

        assert_eq!(income.amount.cents(), 400000);
        assert_eq!(income.source, IncomeSource::Salary);
    }

    #[test]
    fn test_validation() {
        let mut income = Income::new(
            Money::from_cents(50000),
            "Freelance Project",
            IncomeSource::Freelance,
            date(2026, 8, 15),
        );
        assert!(income.validate().is_ok());

        income.amount = Money::from_cents(-1);
        assert_eq!(
            income.validate(),
            Err(IncomeValidationError::NonPositiveAmount)
        );

        income.amount = Money::from_cents(50000);
        income.description = String::new();
        assert_eq!(
            income.validate(),
            Err(IncomeValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_serialization() {
        let income = Income::new(
            Money::from_cents(50000),
            "Freelance Project",
            IncomeSource::Freelance,
            date(2026, 8, 15),
        );

        let json = serde_json::to_string(&income).unwrap();
        let deserialized: Income = serde_json::from_str(&json).unwrap();
        assert_eq!(income.id, deserialized.id);
        assert_eq!(income.source, deserialized.source);
    }
}
