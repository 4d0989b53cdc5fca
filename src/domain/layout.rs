//! Fixed filesystem layout shared by every command.

/// Directory holding `*.template` inputs, relative to the project root.
pub const TEMPLATES_DIR: &str = "scripts/templates";

/// Directory receiving generated scripts, relative to the project root.
pub const GENERATED_DIR: &str = "scripts/generated";

/// Directory reserved for user customizations; created empty, never written.
pub const USER_DIR: &str = "scripts/user";

/// Suffix identifying template files.
pub const TEMPLATE_SUFFIX: &str = ".template";

/// Suffix stripped from a generated script name to form its global command name.
pub const COMMAND_SUFFIX: &str = "-command.sh";

/// Generated scripts that get symlinked into the user-local bin directory.
pub const GLOBAL_COMMANDS: &[&str] = &["opcode-command.sh"];

/// User-local bin directory, relative to `$HOME`.
pub const LOCAL_BIN_DIR: &str = ".local/bin";

/// Shell startup file checked for the PATH export, relative to `$HOME`.
pub const SHELL_PROFILE: &str = ".zshrc";

/// Literal line appended to the shell profile when missing.
pub const PATH_EXPORT_LINE: &str = r#"export PATH="$HOME/.local/bin:$PATH""#;

/// Global command name for a generated script file name.
///
/// `opcode-command.sh` becomes `opcode`; names without the suffix are kept as-is.
pub fn command_name(script: &str) -> &str {
    script.strip_suffix(COMMAND_SUFFIX).unwrap_or(script)
}
