//! Bounded register of completed computations.

use crate::format::format_number;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Entries kept before the oldest is dropped.
pub const HISTORY_CAPACITY: usize = 25;

/// One completed computation, newest entries first in the register.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    /// Human-readable form of the computation, e.g. `5 + 2` or `sqrt(9)`
    pub expression: String,
    /// The formatted text that was written to the display
    pub result: String,
    /// The raw result value
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

/// The history register. Independent of the working state: neither
/// `clear_all` nor entering the error state touches it.
#[derive(Debug, Default)]
pub(crate) struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub(crate) fn push(&mut self, expression: String, value: f64) {
        self.entries.insert(
            0,
            HistoryEntry {
                expression,
                result: format_number(value),
                value,
                timestamp: Utc::now(),
            },
        );
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub(crate) fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
