use crate::ports::{InstallTarget, ScriptWorkspace};

/// Application context holding dependencies for command execution.
pub struct AppContext<W: ScriptWorkspace, T: InstallTarget> {
    workspace: W,
    target: T,
}

impl<W: ScriptWorkspace, T: InstallTarget> AppContext<W, T> {
    /// Create a new application context.
    pub fn new(workspace: W, target: T) -> Self {
        Self { workspace, target }
    }

    /// Get a reference to the script workspace.
    pub fn workspace(&self) -> &W {
        &self.workspace
    }

    /// Get a reference to the install target.
    pub fn target(&self) -> &T {
        &self.target
    }
}
