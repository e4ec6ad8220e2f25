use poll_client::PollResource;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `polls get`.
pub async fn run(args: &IdArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let poll = ctx.editor.resource().find(args.id).await?;
    output(&poll, flags.format)
}
