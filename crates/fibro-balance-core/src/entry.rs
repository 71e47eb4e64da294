//! Daily health records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::{self, Adjustment, Bounds};

/// One user-submitted daily health record.
///
/// Numeric fields always lie inside their domain once an entry has passed
/// through [`EntryDraft::normalize`] or [`HealthEntry::normalized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthEntry {
    pub date: NaiveDate,
    /// 0..=10
    pub pain: u8,
    /// 0..=10
    pub fatigue: u8,
    /// 1..=5
    pub mood: u8,
    /// Hours, 0..=14
    pub sleep: f64,
    /// 0..=10
    pub stress: u8,
    #[serde(default)]
    pub notes: String,
}

impl HealthEntry {
    /// Re-apply the field domains to an already typed entry.
    ///
    /// Used for payloads read back from storage, which may have been edited
    /// by hand.
    pub fn normalized(self) -> Self {
        Self {
            date: self.date,
            pain: Bounds::SCORE.clamp_whole_value(self.pain as f64) as u8,
            fatigue: Bounds::SCORE.clamp_whole_value(self.fatigue as f64) as u8,
            mood: Bounds::MOOD.clamp_whole_value(self.mood as f64) as u8,
            sleep: validation::clamp_value(self.sleep, Bounds::SLEEP.min, Bounds::SLEEP.max),
            stress: Bounds::SCORE.clamp_whole_value(self.stress as f64) as u8,
            notes: validation::truncate_notes(&self.notes),
        }
    }
}

/// Raw form input for an entry, before validation.
///
/// Numeric fields are kept as text so that blank or garbled input can be
/// coerced instead of rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub date: Option<NaiveDate>,
    pub pain: Option<String>,
    pub fatigue: Option<String>,
    pub mood: Option<String>,
    pub sleep: Option<String>,
    pub stress: Option<String>,
    pub notes: Option<String>,
}

impl EntryDraft {
    /// A fresh form for `today` with the usual starting values.
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            date: Some(today),
            pain: Some("4".into()),
            fatigue: Some("4".into()),
            mood: Some("3".into()),
            sleep: Some("7".into()),
            stress: Some("3".into()),
            notes: None,
        }
    }

    /// Clamp every field into its domain.
    ///
    /// Returns the stored entry and the list of fields whose value changed
    /// on the way in. A draft without a date is filed under `today`.
    pub fn normalize(&self, today: NaiveDate) -> (HealthEntry, Vec<Adjustment>) {
        let mut adjustments = Vec::new();

        let mut whole = |field: &str, raw: &Option<String>, bounds: Bounds| -> u8 {
            let value = bounds.clamp_whole(raw.as_deref());
            if !same_number(raw.as_deref(), value as f64) {
                adjustments.push(Adjustment {
                    field: field.to_string(),
                    raw: raw.clone(),
                    stored: value.to_string(),
                });
            }
            value as u8
        };

        let pain = whole("pain", &self.pain, Bounds::SCORE);
        let fatigue = whole("fatigue", &self.fatigue, Bounds::SCORE);
        let mood = whole("mood", &self.mood, Bounds::MOOD);
        let stress = whole("stress", &self.stress, Bounds::SCORE);

        let sleep = Bounds::SLEEP.clamp(self.sleep.as_deref());
        if !same_number(self.sleep.as_deref(), sleep) {
            adjustments.push(Adjustment {
                field: "sleep".into(),
                raw: self.sleep.clone(),
                stored: sleep.to_string(),
            });
        }

        let raw_notes = self.notes.as_deref().unwrap_or_default();
        let notes = validation::truncate_notes(raw_notes);
        if notes.len() != raw_notes.len() {
            adjustments.push(Adjustment {
                field: "notes".into(),
                raw: None,
                stored: format!("first {} characters", validation::MAX_NOTES_CHARS),
            });
        }

        let entry = HealthEntry {
            date: self.date.unwrap_or(today),
            pain,
            fatigue,
            mood,
            sleep,
            stress,
            notes,
        };
        (entry, adjustments)
    }
}

fn same_number(raw: Option<&str>, stored: f64) -> bool {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .is_some_and(|v| v == stored)
}
