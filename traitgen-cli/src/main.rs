//! # traitgen CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Generate Python traitlets wrappers from JSON schema definitions.
#[derive(Parser, Debug)]
#[command(name = "traitgen", version, about)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Generate a wrapper package from a schema file.
    Generate(traitgen_cli::generate::GenerateArgs),
    /// Validate and resolve a schema file without writing anything.
    Check(traitgen_cli::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(traitgen_cli::default_log_filter(cli.verbose)));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Generate(args) => {
            traitgen_cli::generate::run_generate(args)?;
        }
        Commands::Check(args) => {
            traitgen_cli::check::run_check(args)?;
        }
    }

    Ok(())
}
