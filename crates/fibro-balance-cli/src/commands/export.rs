use std::path::PathBuf;

use fibro_balance_core::export;

use super::{CmdResult, Context};

pub fn run(ctx: &Context, out: Option<PathBuf>, stdout: bool) -> CmdResult {
    let session = ctx.open_session();
    let csv = session.export_csv();

    if stdout {
        println!("{csv}");
        return Ok(());
    }

    let path = out.unwrap_or_else(|| {
        PathBuf::from(export::file_name(&ctx.config.export.file_prefix, session.today()))
    });
    std::fs::write(&path, &csv)?;
    tracing::info!(path = %path.display(), "exported entries");

    let rows = session.state().entries.len();
    ctx.emit(
        &serde_json::json!({ "path": path, "rows": rows }),
        || println!("Exported {rows} entries to {}", path.display()),
    )
}
