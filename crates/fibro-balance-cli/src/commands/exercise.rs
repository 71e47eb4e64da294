use clap::Subcommand;
use fibro_balance_core::exercise;

use super::{report_unsaved, spoons_line, CmdResult, Context};

#[derive(Subcommand)]
pub enum ExerciseAction {
    /// List the built-in exercises
    List,
    /// Show the steps of an exercise
    Show { id: String },
    /// Mark an exercise as done and spend its spoons
    Complete { id: String },
}

pub fn run(ctx: &Context, action: ExerciseAction) -> CmdResult {
    match action {
        ExerciseAction::List => {
            let catalog = exercise::catalog();
            ctx.emit(&catalog, || {
                for ex in catalog {
                    println!(
                        "{:<14} {} (~{} min, {} spoons)",
                        ex.id, ex.title, ex.duration_min, ex.spoons
                    );
                }
            })
        }
        ExerciseAction::Show { id } => {
            let ex = exercise::find(&id)?;
            ctx.emit(ex, || {
                println!("{} (~{} min, {} spoons)", ex.title, ex.duration_min, ex.spoons);
                for (i, step) in ex.steps.iter().enumerate() {
                    println!("  {}. {}", i + 1, step);
                }
            })
        }
        ExerciseAction::Complete { id } => {
            let mut session = ctx.open_session();
            let event = session.complete_exercise(&id)?;
            report_unsaved(&session);
            ctx.emit(&event, || {
                println!("Well done!");
                println!("{}", spoons_line(&session));
            })
        }
    }
}
