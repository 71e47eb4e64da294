pub mod config;
pub mod content;
pub mod entry;
pub mod exercise;
pub mod export;
pub mod reset;
pub mod spoons;
pub mod stats;
pub mod watch;

use std::sync::Arc;

use serde::Serialize;

use fibro_balance_core::{
    Config, HealthEntry, MemoryGateway, Session, SqliteGateway, StateGateway, SystemClock,
};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Settings shared by every command.
pub struct Context {
    pub config: Config,
    pub json: bool,
    pub ephemeral: bool,
}

impl Context {
    /// Open the session for this run.
    ///
    /// If the database cannot be opened the run continues in memory.
    pub fn open_session(&self) -> Session {
        let gateway: Box<dyn StateGateway> = if self.ephemeral {
            Box::new(MemoryGateway::new())
        } else {
            match SqliteGateway::open() {
                Ok(db) => Box::new(db),
                Err(e) => {
                    tracing::warn!("storage unavailable, changes will not be saved: {e}");
                    Box::new(MemoryGateway::new())
                }
            }
        };
        Session::start_with_capacity(
            gateway,
            Arc::new(SystemClock),
            self.config.spoons.default_total,
        )
    }

    /// Print `value` as JSON in `--json` mode, otherwise run `human`.
    pub fn emit<T: Serialize>(&self, value: &T, human: impl FnOnce()) -> CmdResult {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human();
        }
        Ok(())
    }
}

/// One-line summary of an entry.
pub fn entry_line(e: &HealthEntry) -> String {
    format!(
        "{}  pain {} · fatigue {} · mood {} · sleep {}h · stress {}",
        e.date.format("%Y-%m-%d"),
        e.pain,
        e.fatigue,
        e.mood,
        e.sleep,
        e.stress
    )
}

/// Spoons left out of today's total.
pub fn spoons_line(session: &Session) -> String {
    let budget = session.budget();
    format!(
        "Today: {} / {} spoons left ({} used)",
        budget.remaining(),
        budget.total(),
        budget.used()
    )
}

/// Warning for a change that only reached memory, if any.
pub fn unsaved_notice(session: &Session) -> Option<String> {
    session
        .last_persist_error()
        .map(|e| format!("warning: change not saved: {e}"))
}

/// Print [`unsaved_notice`] to stderr.
pub fn report_unsaved(session: &Session) {
    if let Some(notice) = unsaved_notice(session) {
        eprintln!("{notice}");
    }
}
