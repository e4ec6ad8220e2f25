use poll_core::PollPayload;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `polls schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(PollPayload);
    output(&schema, flags.format)
}
