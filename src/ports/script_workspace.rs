use std::path::PathBuf;

use crate::domain::AppError;

/// A template file read from the templates directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// File name within the templates directory, e.g. `opcode-command.sh.template`.
    pub name: String,
    pub content: String,
}

/// Project-side filesystem: templates in, generated scripts out.
pub trait ScriptWorkspace {
    /// Absolute path of the project root.
    fn project_root(&self) -> PathBuf;

    /// Whether the named lockfile exists in the project root.
    fn lockfile_exists(&self, name: &str) -> bool;

    fn templates_dir_exists(&self) -> bool;

    /// All regular files in the templates directory, sorted by name.
    fn list_templates(&self) -> Result<Vec<TemplateFile>, AppError>;

    fn template_exists(&self, name: &str) -> bool;

    /// Write a template file, creating the templates directory if absent.
    fn write_template(&self, name: &str, content: &str) -> Result<(), AppError>;

    /// Write a generated script, creating the output directory if absent.
    fn write_script(&self, name: &str, content: &str) -> Result<(), AppError>;

    /// Set owner/world executable bits on a generated script.
    ///
    /// A no-op on platforms without Unix permission bits.
    fn mark_executable(&self, name: &str) -> Result<(), AppError>;

    fn script_path(&self, name: &str) -> PathBuf;

    fn script_exists(&self, name: &str) -> bool;

    /// Create the empty user-customization directory if absent.
    fn ensure_user_dir(&self) -> Result<(), AppError>;
}
