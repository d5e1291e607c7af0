//! # Generate Subcommand
//!
//! Generates the class modules, test stubs and package indexes for every
//! definition of a schema file and writes them to an output directory.
//! Nothing is written when any definition fails.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use traitgen_codegen::{GeneratorConfig, generate_from_file, write_package};
use traitgen_schema::CyclePolicy;

/// Arguments for the `traitgen generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// JSON schema file with a top-level `definitions` mapping.
    #[arg(long, value_name = "FILE")]
    pub schema: PathBuf,

    /// Output package directory.
    #[arg(long, value_name = "DIR")]
    pub out: PathBuf,

    /// Title used in the generated package docstrings.
    #[arg(long)]
    pub title: Option<String>,

    /// Keep full descriptions instead of their first sentence.
    #[arg(long)]
    pub no_summarize: bool,

    /// How reference cycles between definitions are handled.
    #[arg(long, default_value = "warn", value_parser = crate::parse_cycle_policy)]
    pub cycles: CyclePolicy,
}

impl GenerateArgs {
    /// Builds the generator configuration for these arguments.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new()
            .summarize_help(!self.no_summarize)
            .cycle_policy(self.cycles);
        if let Some(title) = &self.title {
            config = config.package_title(title.clone());
        }
        config
    }
}

/// Execute the generate subcommand.
///
/// Returns the number of files written.
///
/// # Errors
/// Returns an error if the schema cannot be read or generated, or the
/// package cannot be written.
pub fn run_generate(args: &GenerateArgs) -> Result<usize> {
    let config = args.config();
    let package = generate_from_file(&args.schema, &config).with_context(|| {
        format!("failed to generate wrappers from {}", args.schema.display())
    })?;

    let written = write_package(&package, &args.out)
        .with_context(|| format!("failed to write package to {}", args.out.display()))?;

    println!(
        "OK: generated {} classes ({} files) in {}",
        package.modules.len(),
        written,
        args.out.display()
    );
    Ok(written)
}
