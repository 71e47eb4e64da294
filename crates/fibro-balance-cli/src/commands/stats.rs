use fibro_balance_core::content;

use super::{entry_line, spoons_line, CmdResult, Context};

/// Entries of the trend window, oldest first.
pub fn trend(ctx: &Context, days: Option<usize>) -> CmdResult {
    let session = ctx.open_session();
    let window = session.trend(days.unwrap_or(ctx.config.tracker.trend_window));

    ctx.emit(&window, || {
        if window.is_empty() {
            println!("No entries yet.");
            return;
        }
        println!("{:<12} {:>5} {:>8} {:>7}", "date", "pain", "fatigue", "stress");
        for e in &window {
            println!(
                "{:<12} {:>5} {:>8} {:>7}",
                e.date.format("%Y-%m-%d").to_string(),
                e.pain,
                e.fatigue,
                e.stress
            );
        }
    })
}

pub fn averages(ctx: &Context) -> CmdResult {
    let session = ctx.open_session();
    let avg = session.averages();

    ctx.emit(&avg, || {
        println!("Averages over {} entries", session.state().entries.len());
        println!("  pain:    {}", avg.pain);
        println!("  fatigue: {}", avg.fatigue);
        println!("  sleep:   {} h", avg.sleep);
        println!("  stress:  {}", avg.stress);
    })
}

pub fn today(ctx: &Context) -> CmdResult {
    let session = ctx.open_session();
    let overview = session.overview();

    ctx.emit(&overview, || {
        println!("{}", overview.date.format("%Y-%m-%d"));
        match &overview.entry {
            Some(e) => println!("{}", entry_line(e)),
            None => println!("No entry logged today."),
        }
        println!("{}", spoons_line(&session));
        println!("Tip: {}", content::tip(content::tip_index_for(overview.date)));
    })
}
