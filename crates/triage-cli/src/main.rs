use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod keymap;
mod logging;
mod terminal;

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Paper Triage - review accepted papers one at a time and build a reading list", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Paper metadata file (JSON Lines)
    #[arg(long, global = true, value_name = "FILE")]
    pub metadata: Option<PathBuf>,

    /// Reading list file
    #[arg(long, global = true, value_name = "FILE")]
    pub reading_list: Option<PathBuf>,

    /// Last-viewed marker file
    #[arg(long, global = true, value_name = "FILE")]
    pub last_viewed: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Review papers interactively (the default)
    Review,
    /// Show how far the review has progressed
    Status,
    /// Print the reading list
    List,
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.global.verbose);

    match cli.command.unwrap_or(Commands::Review) {
        Commands::Review => commands::review::run(&cli.global)?,
        Commands::Status => commands::status::run(&cli.global)?,
        Commands::List => commands::list::run(&cli.global)?,
        Commands::Config { action } => match action {
            ConfigAction::Init { force } => commands::config::init(&cli.global, force)?,
            ConfigAction::Show => commands::config::show(&cli.global)?,
        },
    }

    Ok(())
}
