//! Running session: the state container every front-end talks to.
//!
//! A [`Session`] exclusively owns the [`AppState`] and the gateway it came
//! from. Every mutating operation runs to completion, then writes a full
//! snapshot through the gateway. Storage trouble is logged and otherwise
//! ignored; the session keeps working from memory.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::entry::{EntryDraft, HealthEntry};
use crate::error::Result;
use crate::events::Event;
use crate::exercise;
use crate::export;
use crate::spoons::{EnergyBudget, DEFAULT_CAPACITY};
use crate::state::AppState;
use crate::stats::{self, Averages, TodayOverview};
use crate::storage::StateGateway;
use crate::validation::{self, Adjustment};

/// Answer to "really delete all data?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(yes: bool) -> Self {
        if yes {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// Result of saving a draft.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    /// The entry as stored.
    pub entry: HealthEntry,
    /// Fields that were clamped or truncated on the way in.
    pub adjustments: Vec<Adjustment>,
    pub event: Event,
}

pub struct Session {
    state: AppState,
    gateway: Box<dyn StateGateway>,
    clock: Arc<dyn Clock>,
    default_capacity: u32,
    last_persist_error: Option<String>,
}

impl Session {
    /// Start a session with the default spoon capacity.
    pub fn start(gateway: Box<dyn StateGateway>, clock: Arc<dyn Clock>) -> Self {
        Self::start_with_capacity(gateway, clock, DEFAULT_CAPACITY)
    }

    /// Start a session, loading whatever the gateway has stored.
    ///
    /// `default_capacity` is used whenever a budget has to be created from
    /// nothing. A stale budget is rolled over right away.
    pub fn start_with_capacity(
        gateway: Box<dyn StateGateway>,
        clock: Arc<dyn Clock>,
        default_capacity: u32,
    ) -> Self {
        let today = clock.today();
        let default_capacity = validation::Bounds::CAPACITY.clamp_whole_value(default_capacity as f64);

        let state = match gateway.load() {
            Ok(Some(json)) => match AppState::from_json(&json, today, default_capacity) {
                Ok(state) => {
                    info!(entries = state.entries.len(), "loaded stored state");
                    state
                }
                Err(e) => {
                    warn!("starting empty: {e}");
                    AppState::fresh(today, default_capacity)
                }
            },
            Ok(None) => {
                debug!("no stored state, starting empty");
                AppState::fresh(today, default_capacity)
            }
            Err(e) => {
                warn!("failed to load stored state, starting empty: {e}");
                AppState::fresh(today, default_capacity)
            }
        };

        let mut session = Self {
            state,
            gateway,
            clock,
            default_capacity,
            last_persist_error: None,
        };
        session.tick();
        session
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn budget(&self) -> &EnergyBudget {
        &self.state.spoons
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn entry(&self, date: NaiveDate) -> Option<&HealthEntry> {
        self.state.entries.get(date)
    }

    pub fn averages(&self) -> Averages {
        stats::compute_averages(self.state.entries.as_slice())
    }

    /// Ascending entries for the trend chart.
    pub fn trend(&self, window: usize) -> Vec<HealthEntry> {
        self.state.entries.list_recent_window(window)
    }

    /// Newest entries first.
    pub fn recent_entries(&self, limit: usize) -> Vec<HealthEntry> {
        self.state.entries.list_recent_descending(limit)
    }

    pub fn overview(&self) -> TodayOverview {
        stats::today_overview(&self.state.entries, &self.state.spoons, self.today())
    }

    /// All entries as CSV text.
    pub fn export_csv(&self) -> String {
        export::to_csv(self.state.entries.as_slice())
    }

    /// Error message of the most recent failed save, cleared by a good one.
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    // ── Entries ──────────────────────────────────────────────────────

    /// Normalize a draft and store it, replacing any entry for that date.
    pub fn save_entry(&mut self, draft: &EntryDraft) -> SaveOutcome {
        let (entry, adjustments) = draft.normalize(self.today());
        for adjustment in &adjustments {
            debug!(date = %entry.date, "input adjusted: {adjustment}");
        }
        let replaced = self.state.entries.upsert(entry.clone());
        let event = Event::EntrySaved {
            date: entry.date,
            replaced,
            at: Utc::now(),
        };
        self.persist();
        SaveOutcome {
            entry,
            adjustments,
            event,
        }
    }

    /// Remove the entry for `date`. Nothing happens when there is none.
    pub fn delete_entry(&mut self, date: NaiveDate) -> Option<Event> {
        if !self.state.entries.delete(date) {
            return None;
        }
        self.persist();
        Some(Event::EntryDeleted {
            date,
            at: Utc::now(),
        })
    }

    // ── Spoons ───────────────────────────────────────────────────────

    /// Spend the cost of a catalog exercise.
    pub fn complete_exercise(&mut self, id: &str) -> Result<Event> {
        let ex = exercise::find(id)?;
        self.state.spoons.consume(ex.spoons);
        self.persist();
        Ok(Event::ExerciseCompleted {
            exercise_id: ex.id.to_string(),
            spoons: ex.spoons,
            at: Utc::now(),
        })
    }

    pub fn consume_spoons(&mut self, amount: u32) -> Event {
        let event = self.state.spoons.consume(amount);
        self.persist();
        event
    }

    pub fn release_spoons(&mut self, amount: u32) -> Event {
        let event = self.state.spoons.release(amount);
        self.persist();
        event
    }

    /// The "+1" button.
    pub fn spoons_increment(&mut self) -> Event {
        self.consume_spoons(1)
    }

    /// The "-1" button.
    pub fn spoons_decrement(&mut self) -> Event {
        self.release_spoons(1)
    }

    pub fn spoons_reset(&mut self) -> Event {
        let event = self.state.spoons.reset();
        self.persist();
        event
    }

    /// Set capacity from raw input; anything unparseable ends up as 1.
    pub fn set_capacity(&mut self, raw: &str) -> Event {
        let event = self.state.spoons.set_capacity(validation::coerce(Some(raw)));
        self.persist();
        event
    }

    /// Roll the budget over if the date changed since the last check.
    pub fn tick(&mut self) -> Option<Event> {
        let today = self.today();
        let event = self.state.spoons.tick(today)?;
        info!(date = %today, total = self.state.spoons.total(), "spoon budget rolled over");
        self.persist();
        Some(event)
    }

    // ── Reset ────────────────────────────────────────────────────────

    /// Drop every entry, restart the budget at the default capacity the
    /// session was started with, and delete the stored snapshot.
    ///
    /// Declining leaves everything untouched.
    pub fn reset_all(&mut self, confirmation: Confirmation) -> Option<Event> {
        if confirmation == Confirmation::Declined {
            debug!("reset declined");
            return None;
        }
        self.state = AppState::fresh(self.today(), self.default_capacity);
        if let Err(e) = self.gateway.clear() {
            warn!("failed to clear stored state: {e}");
            self.last_persist_error = Some(e.to_string());
        } else {
            self.last_persist_error = None;
        }
        info!("all data reset");
        Some(Event::DataReset { at: Utc::now() })
    }

    fn persist(&mut self) {
        let result = self
            .state
            .to_json()
            .map_err(crate::error::CoreError::from)
            .and_then(|json| Ok(self.gateway.save(&json)?));
        match result {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                warn!("failed to save state: {e}");
                self.last_persist_error = Some(e.to_string());
            }
        }
    }
}
