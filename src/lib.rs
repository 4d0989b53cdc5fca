//! opcode-scriptgen: generate Opcode's user-specific shell scripts from
//! templates and install them as global commands.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::AppContext;
use app::commands::{generate, init, install, setup};
use services::{FilesystemInstallTarget, FilesystemScriptWorkspace};

pub use app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use app::commands::init::InitOutcome;
pub use app::commands::install::InstallOutcome;
pub use app::commands::setup::SetupOutcome;
pub use domain::AppError;
pub use domain::layout::{GENERATED_DIR, TEMPLATES_DIR, USER_DIR};

fn current_context()
-> Result<AppContext<FilesystemScriptWorkspace, FilesystemInstallTarget>, AppError> {
    let workspace = FilesystemScriptWorkspace::current()?;
    let target = FilesystemInstallTarget::from_env()?;
    Ok(AppContext::new(workspace, target))
}

fn report_install(outcome: &InstallOutcome) {
    for command in &outcome.installed {
        println!("  ✅ Installed: {command}");
    }
    for warning in &outcome.warnings {
        eprintln!("  ⚠️  {warning}");
    }
    if outcome.path_line_added {
        println!("  ✅ Added ~/.local/bin to PATH in ~/.zshrc");
    }
}

/// Seed `scripts/templates/` and `scripts/user/` in the current directory.
pub fn init() -> Result<InitOutcome, AppError> {
    let workspace = FilesystemScriptWorkspace::current()?;

    let outcome = init::execute(&workspace)?;
    for name in &outcome.seeded {
        println!("  📝 Seeded {name}");
    }
    println!("✅ Templates ready in {TEMPLATES_DIR}/");
    Ok(outcome)
}

/// Generate scripts from every template in the current directory's
/// templates directory.
pub fn generate(strict: bool) -> Result<GenerateOutcome, AppError> {
    let ctx = current_context()?;

    println!("🔧 Generating user-specific scripts...");
    let outcome = generate::execute(&ctx, &GenerateOptions { strict })?;
    for script in &outcome.scripts {
        println!("  📝 Generated {script}");
    }
    println!("✅ Scripts generated into {GENERATED_DIR}/");
    Ok(outcome)
}

/// Symlink generated global commands into `~/.local/bin` and update the
/// shell profile's PATH.
pub fn install() -> Result<InstallOutcome, AppError> {
    let ctx = current_context()?;

    println!("🔗 Installing global commands...");
    let outcome = install::execute(&ctx)?;
    report_install(&outcome);
    println!("✅ Global commands installed!");
    println!("🔄 Restart your terminal or run: source ~/.zshrc");
    Ok(outcome)
}

/// Full setup: generate scripts, then install global commands.
pub fn setup(strict: bool) -> Result<SetupOutcome, AppError> {
    let ctx = current_context()?;

    println!("🚀 Opcode Script Generator");
    println!("==========================");

    println!("🔧 Generating user-specific scripts...");
    let outcome = setup::execute(&ctx, &GenerateOptions { strict })?;
    for script in &outcome.generate.scripts {
        println!("  📝 Generated {script}");
    }

    println!("🔗 Installing global commands...");
    report_install(&outcome.install);

    println!("🎉 Setup complete!");
    println!("📁 Generated scripts in: {GENERATED_DIR}/");
    println!("📁 Customize scripts in: {USER_DIR}/");
    Ok(outcome)
}
