use crate::domain::AppError;
use crate::ports::ScriptWorkspace;
use crate::services::template_assets;

/// Outcome of the init command.
#[derive(Debug, Clone)]
pub struct InitOutcome {
    /// Template file names seeded into the templates directory.
    pub seeded: Vec<String>,
}

/// Execute the init command.
///
/// Seeds `scripts/templates/` with the embedded default templates and
/// creates the empty `scripts/user/` customization directory. Refuses to
/// overwrite an existing template file.
pub fn execute<W: ScriptWorkspace>(workspace: &W) -> Result<InitOutcome, AppError> {
    let templates = template_assets::seed_templates()?;

    for template in &templates {
        if workspace.template_exists(&template.name) {
            return Err(AppError::TemplateExists(template.name.clone()));
        }
    }

    let mut seeded = Vec::new();
    for template in &templates {
        workspace.write_template(&template.name, &template.content)?;
        seeded.push(template.name.clone());
    }

    workspace.ensure_user_dir()?;

    Ok(InitOutcome { seeded })
}
