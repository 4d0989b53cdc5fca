pub mod install_target;
pub mod script_workspace;

pub use install_target::InstallTarget;
pub use script_workspace::{ScriptWorkspace, TemplateFile};
