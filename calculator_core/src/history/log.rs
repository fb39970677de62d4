//! Bounded, deduplicated, most-recent-first history list.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::HistoryEntry;
use crate::config::DEFAULT_HISTORY_CAPACITY;
use crate::Result;

/// Recent selections, newest first.
///
/// Holds at most `capacity` entries and at most one entry per distinct
/// (main, sub, topic) triple. Re-committing a triple moves it to the front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryLog {
    /// Create an empty log. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Build a log from entries in newest-first order.
    ///
    /// Later duplicates of a triple are dropped and the list is cut to capacity.
    pub fn from_entries(entries: impl IntoIterator<Item = HistoryEntry>, capacity: usize) -> Self {
        let mut log = Self::new(capacity);
        for entry in entries {
            if log.entries.len() == log.capacity {
                break;
            }
            if !log.entries.iter().any(|e| e.same_selection(&entry)) {
                log.entries.push(entry);
            }
        }
        log
    }

    /// Decode the persisted JSON array.
    pub fn from_json(json: &str, capacity: usize) -> Result<Self> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries, capacity))
    }

    /// Decode persisted JSON, treating missing or corrupt data as no history.
    pub fn from_json_or_empty(json: Option<&str>, capacity: usize) -> Self {
        match json {
            None => Self::new(capacity),
            Some(raw) => Self::from_json(raw, capacity).unwrap_or_else(|e| {
                warn!("Discarding unreadable history ({})", e);
                Self::new(capacity)
            }),
        }
    }

    /// Encode the entries as the persisted JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Record a snapshot at the front, replacing any entry with the same triple.
    pub fn commit(&mut self, entry: HistoryEntry) {
        self.entries.retain(|e| !e.same_selection(&entry));
        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Get the entry at `index`, 0 being the newest.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove every entry. The capacity is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
