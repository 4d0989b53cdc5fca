use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Home-side filesystem: user-local bin directory and shell profile.
pub trait InstallTarget {
    /// Absolute path of the user's home directory.
    fn home_dir(&self) -> PathBuf;

    /// Create the user-local bin directory if absent.
    fn ensure_bin_dir(&self) -> Result<(), AppError>;

    /// Path a command symlink would occupy in the bin directory.
    fn link_path(&self, command: &str) -> PathBuf;

    /// Replace any existing entry at the command's link path with a symlink
    /// to `source`.
    fn install_link(&self, source: &Path, command: &str) -> Result<(), AppError>;

    /// Whether the shell profile contains `line`.
    ///
    /// `None` means the profile file does not exist.
    fn profile_line_present(&self, line: &str) -> Result<Option<bool>, AppError>;

    /// Append `line` to the shell profile.
    fn append_profile_line(&self, line: &str) -> Result<(), AppError>;
}
