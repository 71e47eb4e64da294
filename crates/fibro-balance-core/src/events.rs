use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Every state change in the system produces an Event.
/// The front-end renders them; the session logs them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    EntrySaved {
        date: NaiveDate,
        /// An entry for this date existed and was replaced.
        replaced: bool,
        at: DateTime<Utc>,
    },
    EntryDeleted {
        date: NaiveDate,
        at: DateTime<Utc>,
    },
    SpoonsChanged {
        used: u32,
        total: u32,
        at: DateTime<Utc>,
    },
    CapacityChanged {
        total: u32,
        used: u32,
        at: DateTime<Utc>,
    },
    ExerciseCompleted {
        exercise_id: String,
        spoons: u32,
        at: DateTime<Utc>,
    },
    /// The stored budget belonged to an earlier day and was reinitialized.
    BudgetRolledOver {
        from: NaiveDate,
        to: NaiveDate,
        total: u32,
        at: DateTime<Utc>,
    },
    DataReset {
        at: DateTime<Utc>,
    },
}
