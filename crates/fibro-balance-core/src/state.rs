//! The persisted root: all entries plus the energy budget.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::entry::HealthEntry;
use crate::error::StorageError;
use crate::spoons::EnergyBudget;
use crate::storage::STORAGE_KEY;
use crate::store::EntryStore;
use crate::validation::{self, Bounds};

/// Combined state, serialized as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub entries: EntryStore,
    pub spoons: EnergyBudget,
}

impl AppState {
    /// Empty store and a fresh budget for `today`.
    pub fn fresh(today: NaiveDate, capacity: u32) -> Self {
        Self {
            entries: EntryStore::new(),
            spoons: EnergyBudget::with_capacity(today, capacity),
        }
    }

    /// Decode a stored payload.
    ///
    /// Either half may be missing; the missing half falls back to defaults.
    /// Stored numbers are clamped into their domains, whatever their sign
    /// or fraction. A single entry without a usable date is dropped; the
    /// rest of the snapshot is kept.
    ///
    /// # Errors
    /// [`StorageError::Corrupt`] when the payload is not a JSON object of
    /// the expected shape at all.
    pub fn from_json(json: &str, today: NaiveDate, capacity: u32) -> Result<Self, StorageError> {
        let stored: StoredState = serde_json::from_str(json).map_err(|e| StorageError::Corrupt {
            key: STORAGE_KEY.to_string(),
            message: e.to_string(),
        })?;

        let entries: Vec<HealthEntry> = stored
            .entries
            .unwrap_or_default()
            .into_iter()
            .filter_map(|raw| match serde_json::from_value::<StoredEntry>(raw) {
                Ok(entry) => Some(entry.into_entry()),
                Err(e) => {
                    warn!("skipping unreadable stored entry: {e}");
                    None
                }
            })
            .collect();

        let spoons = match stored.spoons.map(serde_json::from_value::<StoredBudget>) {
            Some(Ok(s)) => EnergyBudget::restore(
                s.date,
                number_or(&s.total, capacity as f64),
                number_or(&s.used, 0.0),
            ),
            Some(Err(e)) => {
                warn!("stored spoon budget unreadable, starting a fresh one: {e}");
                EnergyBudget::with_capacity(today, capacity)
            }
            None => EnergyBudget::with_capacity(today, capacity),
        };

        Ok(Self {
            entries: EntryStore::from_entries(entries),
            spoons,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Lenient view of the stored layout.
#[derive(Deserialize)]
struct StoredState {
    #[serde(default)]
    entries: Option<Vec<Value>>,
    #[serde(default)]
    spoons: Option<Value>,
}

/// A stored entry whose numbers have not been checked yet.
#[derive(Deserialize)]
struct StoredEntry {
    date: NaiveDate,
    #[serde(default)]
    pain: Value,
    #[serde(default)]
    fatigue: Value,
    #[serde(default)]
    mood: Value,
    #[serde(default)]
    sleep: Value,
    #[serde(default)]
    stress: Value,
    #[serde(default)]
    notes: Value,
}

impl StoredEntry {
    fn into_entry(self) -> HealthEntry {
        let whole = |v: &Value, bounds: Bounds| bounds.clamp_whole_value(number_or(v, 0.0)) as u8;
        HealthEntry {
            date: self.date,
            pain: whole(&self.pain, Bounds::SCORE),
            fatigue: whole(&self.fatigue, Bounds::SCORE),
            mood: whole(&self.mood, Bounds::MOOD),
            sleep: validation::clamp_value(
                number_or(&self.sleep, 0.0),
                Bounds::SLEEP.min,
                Bounds::SLEEP.max,
            ),
            stress: whole(&self.stress, Bounds::SCORE),
            notes: match &self.notes {
                Value::String(s) => validation::truncate_notes(s),
                _ => String::new(),
            },
        }
    }
}

#[derive(Deserialize)]
struct StoredBudget {
    date: NaiveDate,
    #[serde(default)]
    total: Value,
    #[serde(default)]
    used: Value,
}

/// Numbers and numeric strings as stored; anything else is 0, or `missing`
/// when the field is absent.
fn number_or(value: &Value, missing: f64) -> f64 {
    match value {
        Value::Null => missing,
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => validation::coerce(Some(s)),
        _ => 0.0,
    }
}
