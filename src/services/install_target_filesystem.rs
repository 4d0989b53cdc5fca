use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::layout::{LOCAL_BIN_DIR, SHELL_PROFILE};
use crate::ports::InstallTarget;

/// Filesystem-backed install target rooted at the user's home directory.
#[derive(Debug, Clone)]
pub struct FilesystemInstallTarget {
    home: PathBuf,
}

impl FilesystemInstallTarget {
    /// Create an install target for an explicit home directory.
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    /// Create an install target for the invoking user's home directory.
    pub fn from_env() -> Result<Self, AppError> {
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
            .ok_or_else(|| AppError::config_error("Could not determine home directory"))?;
        Ok(Self::new(home))
    }

    fn bin_dir(&self) -> PathBuf {
        self.home.join(LOCAL_BIN_DIR)
    }

    fn profile_path(&self) -> PathBuf {
        self.home.join(SHELL_PROFILE)
    }
}

impl InstallTarget for FilesystemInstallTarget {
    fn home_dir(&self) -> PathBuf {
        self.home.clone()
    }

    fn ensure_bin_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(self.bin_dir())?;
        Ok(())
    }

    fn link_path(&self, command: &str) -> PathBuf {
        self.bin_dir().join(command)
    }

    fn install_link(&self, source: &Path, command: &str) -> Result<(), AppError> {
        let link = self.link_path(command);

        // symlink_metadata so a dangling link still gets removed.
        match fs::symlink_metadata(&link) {
            Ok(_) => fs::remove_file(&link)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }

        #[cfg(unix)]
        std::os::unix::fs::symlink(source, &link)?;
        #[cfg(windows)]
        std::os::windows::fs::symlink_file(source, &link)?;

        Ok(())
    }

    fn profile_line_present(&self, line: &str) -> Result<Option<bool>, AppError> {
        let path = self.profile_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(content.contains(line)))
    }

    fn append_profile_line(&self, line: &str) -> Result<(), AppError> {
        let mut file = fs::OpenOptions::new().append(true).open(self.profile_path())?;
        writeln!(file, "\n{line}")?;
        Ok(())
    }
}
