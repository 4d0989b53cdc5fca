//! Shared testing utilities for opcode-scriptgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project and home directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let home_dir = root.path().join("home");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&home_dir).expect("Failed to create test home directory");

        Self { root, work_dir, home_dir }
    }

    /// Path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        &self.home_dir
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("opcode-scriptgen").expect("Failed to locate opcode-scriptgen binary");
        cmd.current_dir(&self.work_dir).env("HOME", &self.home_dir).env_remove("USERPROFILE");
        cmd
    }

    /// Write a template file into the project's templates directory.
    pub fn write_template(&self, name: &str, content: &str) {
        let dir = self.work_dir.join("scripts/templates");
        fs::create_dir_all(&dir).expect("Failed to create templates directory");
        fs::write(dir.join(name), content).expect("Failed to write template");
    }

    /// Create an empty lockfile in the project root.
    pub fn touch_lockfile(&self, name: &str) {
        fs::write(self.work_dir.join(name), "").expect("Failed to write lockfile");
    }

    /// Path of a generated script.
    pub fn generated(&self, name: &str) -> PathBuf {
        self.work_dir.join("scripts/generated").join(name)
    }

    /// Content of a generated script.
    pub fn generated_content(&self, name: &str) -> String {
        fs::read_to_string(self.generated(name)).expect("Failed to read generated script")
    }

    /// Path of an installed command symlink.
    pub fn bin_path(&self, command: &str) -> PathBuf {
        self.home_dir.join(".local/bin").join(command)
    }

    /// Path of the emulated shell profile.
    pub fn zshrc_path(&self) -> PathBuf {
        self.home_dir.join(".zshrc")
    }

    pub fn write_zshrc(&self, content: &str) {
        fs::write(self.zshrc_path(), content).expect("Failed to write .zshrc");
    }

    pub fn read_zshrc(&self) -> String {
        fs::read_to_string(self.zshrc_path()).expect("Failed to read .zshrc")
    }
}
