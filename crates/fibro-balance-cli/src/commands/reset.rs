use std::io::{BufRead, Write};

use fibro_balance_core::Confirmation;

use super::{report_unsaved, spoons_line, CmdResult, Context};

pub fn run(ctx: &Context, yes: bool) -> CmdResult {
    let confirmation = if yes {
        Confirmation::Confirmed
    } else {
        ask("Really delete all data? [y/N] ")?
    };

    let mut session = ctx.open_session();
    let event = session.reset_all(confirmation);
    report_unsaved(&session);
    ctx.emit(&serde_json::json!({ "reset": event.is_some() }), || {
        if event.is_some() {
            println!("All data deleted.");
            println!("{}", spoons_line(&session));
        } else {
            println!("Nothing changed.");
        }
    })
}

fn ask(prompt: &str) -> Result<Confirmation, std::io::Error> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{prompt}")?;
    stderr.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(parse_answer(&answer))
}

fn parse_answer(answer: &str) -> Confirmation {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes").into()
}
