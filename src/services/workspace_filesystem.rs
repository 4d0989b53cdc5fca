use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::domain::layout::{GENERATED_DIR, TEMPLATES_DIR, USER_DIR};
use crate::ports::{ScriptWorkspace, TemplateFile};

/// Filesystem-backed script workspace rooted at the project directory.
#[derive(Debug, Clone)]
pub struct FilesystemScriptWorkspace {
    root: PathBuf,
}

impl FilesystemScriptWorkspace {
    /// Create a workspace for the given project root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a workspace for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    fn generated_dir(&self) -> PathBuf {
        self.root.join(GENERATED_DIR)
    }
}

impl ScriptWorkspace for FilesystemScriptWorkspace {
    fn project_root(&self) -> PathBuf {
        self.root.clone()
    }

    fn lockfile_exists(&self, name: &str) -> bool {
        self.root.join(name).exists()
    }

    fn templates_dir_exists(&self) -> bool {
        self.templates_dir().is_dir()
    }

    fn list_templates(&self) -> Result<Vec<TemplateFile>, AppError> {
        let mut templates = Vec::new();

        for entry in fs::read_dir(self.templates_dir())? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            let content = fs::read_to_string(entry.path())?;
            templates.push(TemplateFile { name, content });
        }

        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(templates)
    }

    fn template_exists(&self, name: &str) -> bool {
        self.templates_dir().join(name).exists()
    }

    fn write_template(&self, name: &str, content: &str) -> Result<(), AppError> {
        fs::create_dir_all(self.templates_dir())?;
        fs::write(self.templates_dir().join(name), content)?;
        Ok(())
    }

    fn write_script(&self, name: &str, content: &str) -> Result<(), AppError> {
        fs::create_dir_all(self.generated_dir())?;
        fs::write(self.script_path(name), content)?;
        Ok(())
    }

    fn mark_executable(&self, name: &str) -> Result<(), AppError> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let path = self.script_path(name);
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms)?;
        }
        #[cfg(not(unix))]
        {
            let _ = name;
        }
        Ok(())
    }

    fn script_path(&self, name: &str) -> PathBuf {
        self.generated_dir().join(name)
    }

    fn script_exists(&self, name: &str) -> bool {
        self.script_path(name).exists()
    }

    fn ensure_user_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(self.root.join(USER_DIR))?;
        Ok(())
    }
}
