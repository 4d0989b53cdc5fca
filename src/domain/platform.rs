/// Host operating system and CPU architecture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub os: String,
    pub arch: String,
}

impl Platform {
    /// Detect the platform the process is running on.
    pub fn current() -> Self {
        Self { os: std::env::consts::OS.to_string(), arch: std::env::consts::ARCH.to_string() }
    }

    pub fn is_macos(&self) -> bool {
        self.os == "macos"
    }

    pub fn is_linux(&self) -> bool {
        self.os == "linux"
    }

    pub fn is_windows(&self) -> bool {
        self.os == "windows"
    }
}
