use crate::app::AppContext;
use crate::domain::layout::{TEMPLATE_SUFFIX, TEMPLATES_DIR};
use crate::domain::{AppError, PackageManager, Platform, Substitutions, template};
use crate::ports::{InstallTarget, ScriptWorkspace};

/// Options for the gen command.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Fail when a rendered script still contains `{{IDENT}}` placeholders.
    pub strict: bool,
}

/// Outcome of the gen command.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// Generated script names, in generation order.
    pub scripts: Vec<String>,
}

/// Build the per-run substitution configuration from the detected environment.
pub fn build_substitutions<W, T>(ctx: &AppContext<W, T>, platform: &Platform) -> Substitutions
where
    W: ScriptWorkspace,
    T: InstallTarget,
{
    let manager = PackageManager::detect(|name| ctx.workspace().lockfile_exists(name));
    Substitutions::assemble(
        &ctx.target().home_dir(),
        &ctx.workspace().project_root(),
        platform,
        manager,
    )
}

/// Execute the gen command.
///
/// Renders every `*.template` file into the generated-scripts directory and
/// marks the outputs executable off-Windows. Errors abort the run; files
/// written before the failure are left in place.
pub fn execute<W, T>(
    ctx: &AppContext<W, T>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError>
where
    W: ScriptWorkspace,
    T: InstallTarget,
{
    execute_on(ctx, options, &Platform::current())
}

pub(crate) fn execute_on<W, T>(
    ctx: &AppContext<W, T>,
    options: &GenerateOptions,
    platform: &Platform,
) -> Result<GenerateOutcome, AppError>
where
    W: ScriptWorkspace,
    T: InstallTarget,
{
    if !ctx.workspace().templates_dir_exists() {
        return Err(AppError::TemplatesDirMissing(TEMPLATES_DIR.to_string()));
    }

    let vars = build_substitutions(ctx, platform);
    ctx.workspace().ensure_user_dir()?;

    let mut scripts = Vec::new();
    for file in ctx.workspace().list_templates()? {
        let Some(output_name) = file.name.strip_suffix(TEMPLATE_SUFFIX) else {
            continue;
        };

        let rendered = template::render(&file.content, &vars);

        if options.strict {
            let placeholders = template::unresolved_placeholders(&rendered);
            if !placeholders.is_empty() {
                return Err(AppError::UnresolvedPlaceholders {
                    script: output_name.to_string(),
                    placeholders,
                });
            }
        }

        ctx.workspace().write_script(output_name, &rendered)?;
        if !platform.is_windows() {
            ctx.workspace().mark_executable(output_name)?;
        }
        scripts.push(output_name.to_string());
    }

    Ok(GenerateOutcome { scripts })
}
