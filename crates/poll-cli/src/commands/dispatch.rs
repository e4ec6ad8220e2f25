use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Create(args) => commands::create::run(&args, ctx, flags).await,
        Commands::Update(args) => commands::update::run(&args, ctx, flags).await,
        Commands::Get(args) => commands::get::run(&args, ctx, flags).await,
        Commands::List(args) => commands::list::run(&args, ctx, flags).await,
        Commands::Delete(args) => commands::delete::run(&args, ctx, flags).await,
        Commands::Schema => commands::schema::handle(flags),
    }
}
