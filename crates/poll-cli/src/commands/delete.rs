use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    id: i64,
    deleted: bool,
}

/// Handle `polls delete`.
pub async fn run(args: &IdArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.editor.confirm_delete(args.id).await?;
    output(
        &DeleteResponse {
            id: args.id,
            deleted: true,
        },
        flags.format,
    )
}
