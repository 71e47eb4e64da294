use clap::Subcommand;

use fibro_balance_core::{parse_date, EntryDraft};

use super::{entry_line, report_unsaved, CmdResult, Context};

#[derive(Subcommand)]
pub enum EntryAction {
    /// Log today's entry, or overwrite the entry of another date
    Add {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Pain 0-10
        #[arg(long, allow_hyphen_values = true)]
        pain: Option<String>,
        /// Fatigue 0-10
        #[arg(long, allow_hyphen_values = true)]
        fatigue: Option<String>,
        /// Mood 1-5
        #[arg(long, allow_hyphen_values = true)]
        mood: Option<String>,
        /// Hours of sleep 0-14
        #[arg(long, allow_hyphen_values = true)]
        sleep: Option<String>,
        /// Stress 0-10
        #[arg(long, allow_hyphen_values = true)]
        stress: Option<String>,
        /// Triggers, weather, food, medication ...
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete the entry of a date
    Delete {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Most recent entries, newest first
    List {
        /// Maximum number of entries
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show the entry of a date
    Show {
        /// Date (YYYY-MM-DD)
        date: String,
    },
}

pub fn run(ctx: &Context, action: EntryAction) -> CmdResult {
    let mut session = ctx.open_session();

    match action {
        EntryAction::Add {
            date,
            pain,
            fatigue,
            mood,
            sleep,
            stress,
            notes,
        } => {
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => session.today(),
            };
            let defaults = EntryDraft::for_today(date);
            let draft = EntryDraft {
                date: Some(date),
                pain: pain.or(defaults.pain),
                fatigue: fatigue.or(defaults.fatigue),
                mood: mood.or(defaults.mood),
                sleep: sleep.or(defaults.sleep),
                stress: stress.or(defaults.stress),
                notes,
            };

            let outcome = session.save_entry(&draft);
            for adjustment in &outcome.adjustments {
                eprintln!("note: {adjustment}");
            }
            report_unsaved(&session);
            ctx.emit(&outcome.entry, || {
                println!("Entry saved: {}", entry_line(&outcome.entry));
            })?;
        }
        EntryAction::Delete { date } => {
            let date = parse_date(&date)?;
            let deleted = session.delete_entry(date).is_some();
            report_unsaved(&session);
            ctx.emit(&serde_json::json!({ "date": date, "deleted": deleted }), || {
                if deleted {
                    println!("Entry deleted: {date}");
                } else {
                    println!("No entry for {date}");
                }
            })?;
        }
        EntryAction::List { limit } => {
            let entries = session.recent_entries(limit.unwrap_or(ctx.config.tracker.recent_limit));
            ctx.emit(&entries, || {
                if entries.is_empty() {
                    println!("No entries yet.");
                }
                for e in &entries {
                    println!("{}", entry_line(e));
                    if !e.notes.is_empty() {
                        println!("    {}", e.notes);
                    }
                }
            })?;
        }
        EntryAction::Show { date } => {
            let date = parse_date(&date)?;
            let entry = session
                .entry(date)
                .ok_or_else(|| format!("no entry for {date}"))?;
            ctx.emit(entry, || {
                println!("{}", entry_line(entry));
                if !entry.notes.is_empty() {
                    println!("notes: {}", entry.notes);
                }
            })?;
        }
    }
    Ok(())
}
