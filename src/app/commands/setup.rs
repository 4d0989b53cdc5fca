use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{InstallTarget, ScriptWorkspace};

use super::generate::{self, GenerateOptions, GenerateOutcome};
use super::install::{self, InstallOutcome};

/// Outcome of the full setup run.
#[derive(Debug, Clone)]
pub struct SetupOutcome {
    pub generate: GenerateOutcome,
    pub install: InstallOutcome,
}

/// Execute the full setup: generate scripts, then install global commands.
pub fn execute<W, T>(
    ctx: &AppContext<W, T>,
    options: &GenerateOptions,
) -> Result<SetupOutcome, AppError>
where
    W: ScriptWorkspace,
    T: InstallTarget,
{
    let generate = generate::execute(ctx, options)?;
    let install = install::execute(ctx)?;
    Ok(SetupOutcome { generate, install })
}
