use poll_editor::ListKind;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CreateArgs;
use crate::commands::shared::entries::ListEdit;
use crate::commands::shared::parse::{non_blank, parse_date};
use crate::context::AppContext;
use crate::output::output;

/// Handle `polls create`.
pub async fn run(args: &CreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let expiration = parse_date(args.expiration.as_deref(), "expiration")?;

    let mut dialog = ctx.editor.open_new();
    dialog.set_title(args.title.as_str())?;
    dialog.set_description(non_blank(args.description.as_deref()))?;
    dialog.set_expiration(expiration)?;

    for (kind, values) in [
        (ListKind::Options, &args.options),
        (ListKind::Voters, &args.voters),
    ] {
        let edit = ListEdit {
            replace: values,
            ..ListEdit::default()
        };
        edit.apply(dialog.entries_mut(kind)?)?;
    }

    let saved = dialog.save().await?;
    output(&saved, flags.format)
}
