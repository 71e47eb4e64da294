//! Summary of the current day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::HealthEntry;
use crate::spoons::EnergyBudget;
use crate::store::EntryStore;

/// What the home screen shows for today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayOverview {
    pub date: NaiveDate,
    /// Today's entry, if one was logged.
    pub entry: Option<HealthEntry>,
    pub spoons_total: u32,
    pub spoons_used: u32,
    pub spoons_remaining: u32,
    pub entry_count: usize,
}

pub fn today_overview(store: &EntryStore, budget: &EnergyBudget, today: NaiveDate) -> TodayOverview {
    TodayOverview {
        date: today,
        entry: store.get(today).cloned(),
        spoons_total: budget.total(),
        spoons_used: budget.used(),
        spoons_remaining: budget.remaining(),
        entry_count: store.len(),
    }
}
