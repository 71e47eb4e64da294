use std::sync::{Arc, Mutex};
use std::time::Duration;

use fibro_balance_core::{Event, RolloverTask};

use super::{spoons_line, CmdResult, Context};

/// Hold a session open and keep the spoon budget current until Ctrl-C.
pub fn run(ctx: &Context) -> CmdResult {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let session = Arc::new(Mutex::new(ctx.open_session()));
    let every = Duration::from_secs(ctx.config.rollover.poll_interval_secs);

    runtime.block_on(async {
        if let Ok(session) = session.lock() {
            println!("{}", spoons_line(&session));
        }

        let (task, mut events) = RolloverTask::spawn_with_events(session.clone(), every);
        tracing::info!(interval_secs = every.as_secs(), "watching for day rollover");

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => break,
                Some(event) = events.recv() => {
                    if let Event::BudgetRolledOver { to, total, .. } = event {
                        println!("New day {to}: {total} spoons available");
                    }
                }
            }
        }

        task.cancel().await;
    });

    Ok(())
}
