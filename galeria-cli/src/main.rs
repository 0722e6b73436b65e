//! galeria CLI - dog image collection API
//!
//! This is the main entry point for the galeria command-line tool, which provides:
//! - The HTTP API server (`serve` subcommand)
//! - Database connectivity diagnostics (`check-db` subcommand)
//! - Shell completion generation (`completions` subcommand)

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "galeria",
    author,
    version,
    about = "Dog image collection API - fetch, store, and serve image records"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Test database connectivity and print diagnostics
    CheckDb(commands::check_db::CheckDbArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    galeria_core::config::load_dotenv();

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::CheckDb(args) => commands::check_db::run_check_db(args).await,
        Commands::Completions(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "galeria",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
