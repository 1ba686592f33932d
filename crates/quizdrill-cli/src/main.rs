//! quizdrill CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod app;
mod commands;
mod prompt;

use app::App;
use commands::QuizCommand;

#[derive(Parser)]
#[command(name = "quizdrill", version, about = "Interactive quiz trainer")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Quiz store path (overrides the config file)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Quiz(QuizCommand),

    /// Start an interactive shell
    Shell,

    /// Create a starter config and quiz store
    Init,
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => commands::init::execute(cli.store).await,
        Commands::Shell => {
            let mut app = App::open(cli.config, cli.store)?;
            commands::shell::execute(&mut app).await
        }
        Commands::Quiz(command) => {
            let mut app = App::open(cli.config, cli.store)?;
            commands::dispatch(&mut app, command).await
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizdrill=warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
