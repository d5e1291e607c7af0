//! # traitgen-cli
//!
//! Provides the `traitgen` command-line interface.
//!
//! ## Subcommands
//!
//! - `traitgen generate` - Generate a traitlets package from a schema file.
//! - `traitgen check` - Parse, validate and resolve a schema without writing.
//!
//! ```bash
//! traitgen generate --schema vega-lite.json --out schema/_generated
//! traitgen check --schema vega-lite.json --json
//! ```

pub mod check;
pub mod generate;

use traitgen_schema::CyclePolicy;

/// Parses the value of a `--cycles` flag.
///
/// # Errors
/// Returns a message listing the accepted values when `s` is not one of them.
pub fn parse_cycle_policy(s: &str) -> Result<CyclePolicy, String> {
    CyclePolicy::parse(s)
        .ok_or_else(|| format!("invalid cycle policy '{s}' (expected allow, warn or reject)"))
}

/// Returns the default log filter for a verbosity flag.
#[must_use]
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}
