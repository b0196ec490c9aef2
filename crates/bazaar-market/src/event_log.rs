//! Append-only event log.
//!
//! Entries are appended only for fully committed operations and are never
//! mutated afterwards. Each entry carries a deterministic digest, so two
//! observers replaying the same log agree entry by entry.

use bazaar_types::MarketEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One committed entry in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Position in the log, starting at 0.
    pub sequence: u64,
    pub event: MarketEvent,
    /// SHA-256 over (sequence, payload).
    pub digest: [u8; 32],
    pub at: DateTime<Utc>,
}

/// The ledger's append-only record of state transitions.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: Vec<LoggedEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed event and return the stored entry.
    pub fn append(&mut self, event: MarketEvent) -> &LoggedEvent {
        let sequence = self.entries.len() as u64;
        let digest = event.digest(sequence);
        self.entries.push(LoggedEvent {
            sequence,
            event,
            digest,
            at: Utc::now(),
        });
        self.entries.last().expect("just pushed")
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[LoggedEvent] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
