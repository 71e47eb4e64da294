use fibro_balance_core::content::{self, KNOWLEDGE};
use fibro_balance_core::{Clock, SystemClock};

use super::{CmdResult, Context};

pub fn tip(ctx: &Context, index: Option<usize>) -> CmdResult {
    let index = index.unwrap_or_else(|| content::tip_index_for(SystemClock.today()));
    let text = content::tip(index);
    ctx.emit(&serde_json::json!({ "index": index, "tip": text }), || {
        println!("{text}");
    })
}

pub fn learn(ctx: &Context) -> CmdResult {
    ctx.emit(&KNOWLEDGE, || {
        for card in KNOWLEDGE {
            println!("{}", card.title);
            println!("  {}\n", card.body);
        }
    })
}
