//! Turn persistence boundary.
//!
//! The pipeline writes one append-only record per turn; no updates or
//! deletes. Appends are keyed by `(session_id, seq)` so at-least-once
//! delivery from a retrying caller leaves exactly one copy.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::SupportChatError;
use crate::types::TurnRecord;

/// Append-only store for conversation turn records.
pub trait TurnStore: Send + Sync {
    /// Append one record. Idempotent under retry: a record whose
    /// `(session_id, seq)` key already exists is silently dropped.
    fn append(&mut self, record: TurnRecord) -> Result<(), SupportChatError>;

    /// All records for a session, ordered by sequence number.
    fn session_records(&self, session_id: Uuid) -> Vec<TurnRecord>;
}

/// In-process store used by the REPL and by tests.
#[derive(Debug, Default)]
pub struct MemoryTurnStore {
    records: HashMap<(Uuid, u64), TurnRecord>,
}

impl MemoryTurnStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TurnStore for MemoryTurnStore {
    fn append(&mut self, record: TurnRecord) -> Result<(), SupportChatError> {
        self.records
            .entry((record.session_id, record.seq))
            .or_insert(record);
        Ok(())
    }

    fn session_records(&self, session_id: Uuid) -> Vec<TurnRecord> {
        let mut records: Vec<TurnRecord> = self
            .records
            .values()
            .filter(|r| r.session_id == session_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.seq);
        records
    }
}
