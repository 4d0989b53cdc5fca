use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{ScriptWorkspace, TemplateFile};

/// In-memory script workspace for testing.
///
/// `Arc<Mutex>` keeps clones sharing state, matching how commands hold the
/// workspace by reference.
#[derive(Debug, Clone)]
pub struct MemoryScriptWorkspace {
    templates: Arc<Mutex<BTreeMap<String, String>>>,
    scripts: Arc<Mutex<BTreeMap<String, String>>>,
    executable: Arc<Mutex<BTreeSet<String>>>,
    lockfiles: Arc<Mutex<BTreeSet<String>>>,
    user_dir: Arc<Mutex<bool>>,
}

impl MemoryScriptWorkspace {
    pub fn new() -> Self {
        Self {
            templates: Arc::new(Mutex::new(BTreeMap::new())),
            scripts: Arc::new(Mutex::new(BTreeMap::new())),
            executable: Arc::new(Mutex::new(BTreeSet::new())),
            lockfiles: Arc::new(Mutex::new(BTreeSet::new())),
            user_dir: Arc::new(Mutex::new(false)),
        }
    }

    pub fn add_lockfile(&self, name: &str) {
        self.lockfiles.lock().unwrap().insert(name.to_string());
    }

    pub fn template_content(&self, name: &str) -> Option<String> {
        self.templates.lock().unwrap().get(name).cloned()
    }

    pub fn script_content(&self, name: &str) -> Option<String> {
        self.scripts.lock().unwrap().get(name).cloned()
    }

    pub fn is_executable(&self, name: &str) -> bool {
        self.executable.lock().unwrap().contains(name)
    }

    pub fn user_dir_created(&self) -> bool {
        *self.user_dir.lock().unwrap()
    }
}

impl Default for MemoryScriptWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptWorkspace for MemoryScriptWorkspace {
    fn project_root(&self) -> PathBuf {
        PathBuf::from("/project")
    }

    fn lockfile_exists(&self, name: &str) -> bool {
        self.lockfiles.lock().unwrap().contains(name)
    }

    fn templates_dir_exists(&self) -> bool {
        !self.templates.lock().unwrap().is_empty()
    }

    fn list_templates(&self) -> Result<Vec<TemplateFile>, AppError> {
        Ok(self
            .templates
            .lock()
            .unwrap()
            .iter()
            .map(|(name, content)| TemplateFile {
                name: name.clone(),
                content: content.clone(),
            })
            .collect())
    }

    fn template_exists(&self, name: &str) -> bool {
        self.templates.lock().unwrap().contains_key(name)
    }

    fn write_template(&self, name: &str, content: &str) -> Result<(), AppError> {
        self.templates.lock().unwrap().insert(name.to_string(), content.to_string());
        Ok(())
    }

    fn write_script(&self, name: &str, content: &str) -> Result<(), AppError> {
        self.scripts.lock().unwrap().insert(name.to_string(), content.to_string());
        Ok(())
    }

    fn mark_executable(&self, name: &str) -> Result<(), AppError> {
        self.executable.lock().unwrap().insert(name.to_string());
        Ok(())
    }

    fn script_path(&self, name: &str) -> PathBuf {
        PathBuf::from("/project/scripts/generated").join(name)
    }

    fn script_exists(&self, name: &str) -> bool {
        self.scripts.lock().unwrap().contains_key(name)
    }

    fn ensure_user_dir(&self) -> Result<(), AppError> {
        *self.user_dir.lock().unwrap() = true;
        Ok(())
    }
}
