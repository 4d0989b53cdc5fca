use std::io;

use thiserror::Error;

/// Library-wide error type for opcode-scriptgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Templates directory is missing from the project.
    #[error("Templates directory not found: {0}. Run 'opcode-scriptgen init' first.")]
    TemplatesDirMissing(String),

    /// A seed template already exists and would be overwritten.
    #[error("Template '{0}' already exists. Remove it first to re-seed.")]
    TemplateExists(String),

    /// Strict generation found placeholders with no configuration value.
    #[error("Unresolved placeholders in '{script}': {}", .placeholders.join(", "))]
    UnresolvedPlaceholders { script: String, placeholders: Vec<String> },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
