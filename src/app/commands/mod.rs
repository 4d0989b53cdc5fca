pub mod generate;
pub mod init;
pub mod install;
pub mod setup;
