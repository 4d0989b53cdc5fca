use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::layout::{GLOBAL_COMMANDS, PATH_EXPORT_LINE, command_name};
use crate::ports::{InstallTarget, ScriptWorkspace};

/// Outcome of the install command.
#[derive(Debug, Clone, Default)]
pub struct InstallOutcome {
    /// Command names successfully symlinked into the bin directory.
    pub installed: Vec<String>,
    /// Best-effort failures, reported but not fatal.
    pub warnings: Vec<String>,
    /// Whether the PATH export line was appended to the shell profile.
    pub path_line_added: bool,
}

/// Execute the install command.
///
/// Symlinks each generated global command into the user-local bin directory
/// and appends the PATH export line to the shell profile when missing.
/// Symlink failures are warnings; profile I/O errors propagate.
pub fn execute<W, T>(ctx: &AppContext<W, T>) -> Result<InstallOutcome, AppError>
where
    W: ScriptWorkspace,
    T: InstallTarget,
{
    ctx.target().ensure_bin_dir()?;

    let mut outcome = InstallOutcome::default();

    for script in GLOBAL_COMMANDS {
        let command = command_name(script);

        if !ctx.workspace().script_exists(script) {
            outcome
                .warnings
                .push(format!("Skipping {command}: generated script '{script}' not found"));
            continue;
        }

        let source = ctx.workspace().script_path(script);
        match ctx.target().install_link(&source, command) {
            Ok(()) => outcome.installed.push(command.to_string()),
            Err(err) => outcome.warnings.push(format!("Could not install {command}: {err}")),
        }
    }

    if let Some(false) = ctx.target().profile_line_present(PATH_EXPORT_LINE)? {
        ctx.target().append_profile_line(PATH_EXPORT_LINE)?;
        outcome.path_line_added = true;
    }

    Ok(outcome)
}
