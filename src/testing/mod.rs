//! In-memory port implementations for disk-free unit tests.

mod memory_workspace;

pub use memory_install_target::MemoryInstallTarget;
pub use memory_workspace::MemoryScriptWorkspace;
