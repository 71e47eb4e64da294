use clap::Subcommand;
use fibro_balance_core::Session;

use super::{report_unsaved, spoons_line, CmdResult, Context};

#[derive(Subcommand)]
pub enum SpoonsAction {
    /// Today's budget
    Show,
    /// Spend spoons
    Use {
        #[arg(default_value_t = 1)]
        amount: u32,
    },
    /// Give spoons back
    Release {
        #[arg(default_value_t = 1)]
        amount: u32,
    },
    /// Set today's used spoons back to 0
    Reset,
    /// Set the daily capacity (1-30)
    Capacity {
        #[arg(allow_hyphen_values = true)]
        total: String,
    },
}

pub fn run(ctx: &Context, action: SpoonsAction) -> CmdResult {
    let mut session = ctx.open_session();

    match action {
        SpoonsAction::Show => {}
        SpoonsAction::Use { amount } => {
            session.consume_spoons(amount);
        }
        SpoonsAction::Release { amount } => {
            session.release_spoons(amount);
        }
        SpoonsAction::Reset => {
            session.spoons_reset();
        }
        SpoonsAction::Capacity { total } => {
            session.set_capacity(&total);
        }
    }
    report_unsaved(&session);

    show(ctx, &session)
}

fn show(ctx: &Context, session: &Session) -> CmdResult {
    let budget = session.budget();
    ctx.emit(
        &serde_json::json!({
            "date": budget.date(),
            "total": budget.total(),
            "used": budget.used(),
            "remaining": budget.remaining(),
        }),
        || println!("{}", spoons_line(session)),
    )
}
