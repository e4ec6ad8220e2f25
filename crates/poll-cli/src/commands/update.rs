use poll_editor::ListKind;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UpdateArgs;
use crate::commands::shared::entries::ListEdit;
use crate::commands::shared::parse::{non_blank, parse_date};
use crate::context::AppContext;
use crate::output::output;

/// Handle `polls update`.
///
/// The stored poll is fetched first so untouched fields and list entries are
/// sent back as they were.
pub async fn run(args: &UpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let expiration = args
        .expiration
        .as_deref()
        .map(|raw| parse_date(Some(raw), "expiration"))
        .transpose()?;

    let mut dialog = ctx.editor.open_existing(args.id).await?;

    if let Some(title) = &args.title {
        dialog.set_title(title.as_str())?;
    }
    if let Some(description) = &args.description {
        dialog.set_description(non_blank(Some(description.as_str())))?;
    }
    if let Some(expiration) = expiration {
        dialog.set_expiration(expiration)?;
    }

    let edits = [
        (
            ListKind::Options,
            ListEdit {
                replace: &args.options,
                remove_last: args.remove_last_option,
                append: &args.add_options,
            },
        ),
        (
            ListKind::Voters,
            ListEdit {
                replace: &args.voters,
                remove_last: args.remove_last_voter,
                append: &args.add_voters,
            },
        ),
    ];
    for (kind, edit) in &edits {
        edit.apply(dialog.entries_mut(*kind)?)?;
    }

    let saved = dialog.save().await?;
    output(&saved, flags.format)
}
