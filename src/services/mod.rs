pub mod install_target_filesystem;
pub mod template_assets;
pub mod workspace_filesystem;

pub use install_target_filesystem::FilesystemInstallTarget;
pub use workspace_filesystem::FilesystemScriptWorkspace;
