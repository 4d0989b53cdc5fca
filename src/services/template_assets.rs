//! Seed templates embedded in the binary for `init`.

use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::AppError;
use crate::ports::TemplateFile;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Embedded templates written into `scripts/templates/` by `init`, sorted by name.
pub fn seed_templates() -> Result<Vec<TemplateFile>, AppError> {
    let mut templates = Vec::new();

    for entry in TEMPLATES_DIR.entries() {
        if let DirEntry::File(file) = entry {
            let name = file
                .path()
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .ok_or_else(|| AppError::config_error("Embedded template has no file name"))?;
            let content = file.contents_utf8().ok_or_else(|| {
                AppError::config_error(format!("Embedded template '{}' is not UTF-8", name))
            })?;
            templates.push(TemplateFile { name, content: content.to_string() });
        }
    }

    templates.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(templates)
}
