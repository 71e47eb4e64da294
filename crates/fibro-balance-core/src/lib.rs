//! # Fibro Balance Core Library
//!
//! Data and derivation layer for a personal symptom tracker: daily health
//! entries, the statistics computed over them, and a daily energy budget
//! ("spoons") spent by relaxation exercises. Front-ends (the CLI, or any GUI)
//! only read from and dispatch actions into a [`Session`].
//!
//! ## Architecture
//!
//! - **Validation**: raw input is clamped into each field's domain, never
//!   rejected
//! - **Entry Store**: one entry per calendar date, sorted only when read
//! - **Stats**: averages and today's overview, recomputed on every read
//! - **Spoons**: a date-stamped budget that the caller rolls over by calling
//!   `tick()` periodically (see [`RolloverTask`])
//! - **Storage**: the whole state is one JSON snapshot in a SQLite key-value
//!   table, plus TOML configuration
//!
//! ## Key Components
//!
//! - [`Session`]: state container and the only place that mutates state
//! - [`EntryStore`], [`EnergyBudget`]: the two halves of [`AppState`]
//! - [`StateGateway`]: load/save boundary, implemented by [`SqliteGateway`]
//! - [`Config`]: application configuration management

pub mod clock;
pub mod content;
pub mod entry;
pub mod error;
pub mod events;
pub mod exercise;
pub mod export;
pub mod rollover;
pub mod session;
pub mod spoons;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entry::{EntryDraft, HealthEntry};
pub use error::{ConfigError, CoreError, StorageError};
pub use events::Event;
pub use exercise::Exercise;
pub use rollover::RolloverTask;
pub use session::{Confirmation, SaveOutcome, Session};
pub use spoons::EnergyBudget;
pub use state::AppState;
pub use stats::{Averages, TodayOverview};
pub use storage::{Config, MemoryGateway, SqliteGateway, StateGateway};
pub use store::EntryStore;
pub use validation::{Adjustment, Bounds};

use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> error::Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidDate(s.to_string()))
}
