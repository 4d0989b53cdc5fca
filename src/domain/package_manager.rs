/// Package manager used by the project, identified by its lockfile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Bun,
    Pnpm,
    Npm,
}

impl PackageManager {
    /// Detection priority: bun wins over pnpm, npm is the fallback.
    pub const ALL: [PackageManager; 3] =
        [PackageManager::Bun, PackageManager::Pnpm, PackageManager::Npm];

    /// Pick the manager whose lockfile is present, in priority order.
    ///
    /// Absence of every lockfile is not an error; npm is the default.
    pub fn detect(lockfile_present: impl Fn(&str) -> bool) -> Self {
        Self::ALL
            .into_iter()
            .find(|manager| lockfile_present(manager.lockfile()))
            .unwrap_or(PackageManager::Npm)
    }

    pub fn name(self) -> &'static str {
        match self {
            PackageManager::Bun => "bun",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Npm => "npm",
        }
    }

    /// Lockfile name probed in the project root.
    pub fn lockfile(self) -> &'static str {
        match self {
            PackageManager::Bun => "bun.lock",
            PackageManager::Pnpm => "pnpm-lock.yaml",
            PackageManager::Npm => "package-lock.json",
        }
    }

    /// Shell command that installs the manager itself.
    pub fn install_command(self) -> &'static str {
        match self {
            PackageManager::Bun => "curl -fsSL https://bun.sh/install | bash",
            PackageManager::Pnpm => "npm install -g pnpm",
            PackageManager::Npm => "npm install -g npm@latest",
        }
    }

    /// Shell command prefix that adds a package to the project.
    pub fn add_command(self) -> &'static str {
        match self {
            PackageManager::Bun => "bun add",
            PackageManager::Pnpm => "pnpm add",
            PackageManager::Npm => "npm install",
        }
    }
}
