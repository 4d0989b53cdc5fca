pub mod error;
pub mod layout;
pub mod package_manager;
pub mod platform;
pub mod substitutions;
pub mod template;

pub use error::AppError;
pub use package_manager::PackageManager;
pub use platform::Platform;
pub use substitutions::Substitutions;
