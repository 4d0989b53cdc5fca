use clap::{Parser, Subcommand};
use opcode_scriptgen::AppError;

#[derive(Parser)]
#[command(name = "opcode-scriptgen")]
#[command(version)]
#[command(
    about = "Generate Opcode's user-specific scripts and install global commands",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed scripts/templates/ with the default templates
    #[clap(visible_alias = "i")]
    Init,
    /// Generate scripts from templates
    #[clap(visible_alias = "g")]
    Gen {
        /// Fail when a generated script still contains {{KEY}} placeholders
        #[arg(long)]
        strict: bool,
    },
    /// Symlink generated commands into ~/.local/bin and update PATH
    #[clap(visible_alias = "ln")]
    Install,
    /// Generate scripts, then install global commands (the default)
    #[clap(visible_alias = "s")]
    Setup {
        /// Fail when a generated script still contains {{KEY}} placeholders
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Some(Commands::Init) => opcode_scriptgen::init().map(|_| ()),
        Some(Commands::Gen { strict }) => opcode_scriptgen::generate(strict).map(|_| ()),
        Some(Commands::Install) => opcode_scriptgen::install().map(|_| ()),
        Some(Commands::Setup { strict }) => opcode_scriptgen::setup(strict).map(|_| ()),
        None => opcode_scriptgen::setup(false).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
