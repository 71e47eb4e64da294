//! Entry store keyed by calendar date.
//!
//! Entries are kept in insertion order; sorting happens only when a view is
//! requested.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::HealthEntry;

/// Trailing window used for trend charts.
pub const DEFAULT_TREND_WINDOW: usize = 14;
/// Number of entries shown in the recent-entries listing.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// At most one [`HealthEntry`] per date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryStore {
    entries: Vec<HealthEntry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from loaded entries, re-applying field domains.
    ///
    /// Later duplicates of a date replace earlier ones.
    pub fn from_entries(entries: Vec<HealthEntry>) -> Self {
        let mut store = Self::new();
        for entry in entries {
            store.upsert(entry);
        }
        store
    }

    /// Insert an entry, replacing any existing entry with the same date.
    ///
    /// Returns `true` when an existing entry was overwritten.
    pub fn upsert(&mut self, entry: HealthEntry) -> bool {
        let entry = entry.normalized();
        match self.entries.iter_mut().find(|e| e.date == entry.date) {
            Some(existing) => {
                *existing = entry;
                true
            }
            None => {
                self.entries.push(entry);
                false
            }
        }
    }

    /// Remove the entry for `date`. Returns `false` if there was none.
    pub fn delete(&mut self, date: NaiveDate) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.date != date);
        self.entries.len() != before
    }

    pub fn get(&self, date: NaiveDate) -> Option<&HealthEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Entries sorted ascending by date, keeping the last `n`.
    pub fn list_recent_window(&self, n: usize) -> Vec<HealthEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|e| e.date);
        let skip = sorted.len().saturating_sub(n);
        sorted.split_off(skip)
    }

    /// Entries sorted descending by date, capped to `n`.
    pub fn list_recent_descending(&self, n: usize) -> Vec<HealthEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.truncate(n);
        sorted
    }

    /// Entries in insertion order.
    pub fn as_slice(&self) -> &[HealthEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HealthEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
