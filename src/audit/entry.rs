//! Audit entry data structures
//!
//! Defines the operation and entity kinds the store can report, and the
//! entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entity was created
    Create,
    /// Entity was updated (wholesale replacement)
    Update,
    /// Entity was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Kinds of entities that appear in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Expense,
    Income,
    BudgetCategory,
    SavingsGoal,
    /// The whole monthly aggregate (session-restart replacement)
    Budget,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Expense => write!(f, "Expense"),
            EntityKind::Income => write!(f, "Income"),
            EntityKind::BudgetCategory => write!(f, "BudgetCategory"),
            EntityKind::SavingsGoal => write!(f, "SavingsGoal"),
            EntityKind::Budget => write!(f, "Budget"),
        }
    }
}

/// A single audit log entry
///
/// Records one store mutation: what happened, to which entity, and when.
/// `detail` carries a human-readable change summary for updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Kind of entity affected
    pub entity: EntityKind,

    /// ID of the affected entity
    pub entity_id: String,

    /// Human-readable label (e.g. an expense description or goal name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Human-readable change summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create(entity: EntityKind, entity_id: impl Into<String>, label: Option<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity,
            entity_id: entity_id.into(),
            label,
            detail: None,
        }
    }

    /// Create a new audit entry for an update operation
    pub fn update(
        entity: EntityKind,
        entity_id: impl Into<String>,
        label: Option<String>,
        detail: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            entity,
            entity_id: entity_id.into(),
            label,
            detail,
        }
    }

    /// Create a new audit entry for a delete operation
    pub fn delete(entity: EntityKind, entity_id: impl Into<String>, label: Option<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity,
            entity_id: entity_id.into(),
            label,
            detail: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity,
            self.entity_id
        );

        if let Some(label) = &self.label {
            output.push_str(&format!(" ({})", label));
        }

        if let Some(detail) = &self.detail {
            output.push_str(&format!("\n  Changes: {}", detail));
        }

        output
    }
}
