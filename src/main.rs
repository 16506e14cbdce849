use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "floater")]
#[command(about = "Press-and-drag Bible reference selector")]
#[command(version)]
struct Cli {
    /// Canon file (TOML or JSON) to select from (defaults to the bundled sample)
    #[arg(long, global = true)]
    canon: Option<PathBuf>,

    /// Path to the config file (defaults to <config dir>/floater/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the demo window with the selector
    Run,

    /// Print the grid shapes a canon produces
    Inspect,

    /// Write a commented default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Inspect) => {
            let canon = floater::gui::load_canon(cli.canon.as_deref())?;
            cli::inspect::inspect_command(&canon)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config.as_deref(), force)?;
        }
        Some(Commands::Run) | None => {
            floater::gui::run_gui(cli.canon.as_deref(), cli.config.as_deref())?;
        }
    }

    Ok(())
}
