//! In-memory audit log
//!
//! The store appends an entry for every mutation. Nothing is written to
//! disk; the log lives and dies with the session, like the budget itself.

use serde::{Deserialize, Serialize};

use super::entry::AuditEntry;

/// An append-only, in-memory log of store mutations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    /// Create an empty audit log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn record(&mut self, entry: AuditEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// The last `n` entries, oldest of those first
    pub fn recent(&self, n: usize) -> &[AuditEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Format the whole log for human-readable output
    pub fn format_human_readable(&self) -> String {
        self.entries
            .iter()
            .map(AuditEntry::format_human_readable)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityKind, Operation};

    fn entry(id: &str) -> AuditEntry {
        AuditEntry::create(EntityKind::Expense, id, None)
    }

    #[test]
    fn test_record_and_read() {
        let mut log = AuditLog::new();
        assert!(log.is_empty());

        log.record(entry("exp-1"));
        log.record(entry("exp-2"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].entity_id, "exp-1");
        assert_eq!(log.entries()[1].entity_id, "exp-2");
    }

    #[test]
    fn test_recent() {
        let mut log = AuditLog::new();
        for i in 0..5 {
            log.record(entry(&format!("exp-{}", i)));
        }

        let recent = log.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].entity_id, "exp-3");
        assert_eq!(recent[1].entity_id, "exp-4");

        // Asking for more than exists returns everything
        assert_eq!(log.recent(100).len(), 5);
    }

    #[test]
    fn test_clear() {
        let mut log = AuditLog::new();
        log.record(entry("exp-1"));
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_format_human_readable() {
        let mut log = AuditLog::new();
        log.record(AuditEntry::create(
            EntityKind::Income,
            "inc-1",
            Some("Salary".to_string()),
        ));
        log.record(AuditEntry::delete(EntityKind::Income, "inc-1", None));

        let formatted = log.format_human_readable();
        assert!(formatted.contains("CREATE"));
        assert!(formatted.contains("DELETE"));
        assert_eq!(log.entries()[0].operation, Operation::Create);
    }
}
