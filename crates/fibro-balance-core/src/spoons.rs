//! Daily energy budget ("spoons").
//!
//! The budget is a small date-stamped state machine. It is either current
//! (its date is today) or stale. Stale budgets are rolled over lazily by
//! `tick()`, which the caller invokes periodically.
//!
//! ```text
//! stale --tick(today)--> current { used: 0, total: unchanged }
//! ```

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::validation::Bounds;

/// Capacity a new budget starts with.
pub const DEFAULT_CAPACITY: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyBudget {
    date: NaiveDate,
    total: u32,
    used: u32,
}

impl EnergyBudget {
    /// Fresh budget for `date` with the default capacity.
    pub fn new(date: NaiveDate) -> Self {
        Self::with_capacity(date, DEFAULT_CAPACITY)
    }

    /// Fresh budget for `date`; `total` is clamped to 1..=30.
    pub fn with_capacity(date: NaiveDate, total: u32) -> Self {
        Self {
            date,
            total: Bounds::CAPACITY.clamp_whole_value(total as f64),
            used: 0,
        }
    }

    /// Rebuild a budget from stored parts, re-applying its domains.
    ///
    /// Stored numbers may be fractional or negative; both are pulled back
    /// into range rather than rejected.
    pub fn restore(date: NaiveDate, total: f64, used: f64) -> Self {
        let total = Bounds::CAPACITY.clamp_whole_value(total);
        Self {
            date,
            total,
            used: Bounds::new(0.0, total as f64).clamp_whole_value(used),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn used(&self) -> u32 {
        self.used
    }

    /// Spoons left today. Never negative, even right after a capacity cut.
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.used)
    }

    pub fn is_stale(&self, today: NaiveDate) -> bool {
        self.date != today
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Roll over to `today` if the budget belongs to another day.
    ///
    /// Capacity is carried forward; consumption starts again at 0.
    pub fn tick(&mut self, today: NaiveDate) -> Option<Event> {
        if !self.is_stale(today) {
            return None;
        }
        let from = self.date;
        self.date = today;
        self.used = 0;
        Some(Event::BudgetRolledOver {
            from,
            to: today,
            total: self.total,
            at: Utc::now(),
        })
    }

    /// Spend `amount` spoons, never going past `total`.
    pub fn consume(&mut self, amount: u32) -> Event {
        self.used = self.used.saturating_add(amount).min(self.total);
        self.changed()
    }

    /// Give back `amount` spoons, never going below 0.
    pub fn release(&mut self, amount: u32) -> Event {
        self.used = self.used.saturating_sub(amount).min(self.total);
        self.changed()
    }

    /// Manual reset of today's consumption.
    pub fn reset(&mut self) -> Event {
        self.used = 0;
        self.changed()
    }

    /// Replace the capacity, clamped to 1..=30.
    ///
    /// `used` is left alone even if it now exceeds `total`; the next
    /// `consume` or `release` pulls it back into range.
    pub fn set_capacity(&mut self, new_total: f64) -> Event {
        self.total = Bounds::CAPACITY.clamp_whole_value(new_total);
        Event::CapacityChanged {
            total: self.total,
            used: self.used,
            at: Utc::now(),
        }
    }

    fn changed(&self) -> Event {
        Event::SpoonsChanged {
            used: self.used,
            total: self.total,
            at: Utc::now(),
        }
    }
}
