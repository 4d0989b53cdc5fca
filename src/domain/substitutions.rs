use std::collections::BTreeMap;
use std::path::Path;

use super::{PackageManager, Platform};

/// Flat key-value configuration substituted into templates.
///
/// Built once per run; the ordered map keeps rendering deterministic.
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    values: BTreeMap<String, String>,
}

impl Substitutions {
    /// Assemble the per-run configuration from the detected environment.
    pub fn assemble(
        home: &Path,
        project_root: &Path,
        platform: &Platform,
        manager: PackageManager,
    ) -> Self {
        let mut subs = Self::default();
        subs.set("USER_HOME", home.display().to_string());
        subs.set("OPCODE_PROJECT_PATH", project_root.display().to_string());
        subs.set("CARGO_PATH", home.join(".cargo").join("bin").display().to_string());
        subs.set("BUN_PATH", home.join(".bun").join("bin").display().to_string());
        subs.set("PACKAGE_MANAGER", manager.name());
        // Historical alias: both keys carry the manager's install command.
        subs.set("PACKAGE_MANAGER_INSTALL", manager.install_command());
        subs.set("PACKAGE_MANAGER_INSTALL_COMMAND", manager.install_command());
        subs.set("PLATFORM", platform.os.clone());
        subs.set("ARCH", platform.arch.clone());
        subs
    }

    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
