//! # Check Subcommand
//!
//! Parses, validates and resolves every definition of a schema file and
//! reports what would be generated, without writing anything.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use traitgen_codegen::{Generator, GeneratorConfig};
use traitgen_schema::{ClassBody, CyclePolicy, SchemaRepository};

/// Arguments for the `traitgen check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON schema file with a top-level `definitions` mapping.
    #[arg(long, value_name = "FILE")]
    pub schema: PathBuf,

    /// How reference cycles between definitions are handled.
    #[arg(long, default_value = "warn", value_parser = crate::parse_cycle_policy)]
    pub cycles: CyclePolicy,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Summary of a checked schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Number of definitions.
    pub definitions: usize,
    /// Object definitions.
    pub objects: usize,
    /// Enumerated string definitions.
    pub enums: usize,
    /// Plain string definitions.
    pub strings: usize,
    /// Reference cycles, each as `A -> B -> A`.
    pub cycles: Vec<String>,
}

/// Checks a schema file.
///
/// # Errors
/// Returns an error if the schema cannot be read, fails validation or a
/// definition cannot be resolved.
pub fn check_schema(args: &CheckArgs) -> Result<CheckReport> {
    let repository = SchemaRepository::load(&args.schema)
        .with_context(|| format!("failed to load schema: {}", args.schema.display()))?;
    let config = GeneratorConfig::new().cycle_policy(args.cycles);
    let (classes, cycles) = Generator::new(&repository, &config)
        .resolve()
        .with_context(|| format!("schema check failed: {}", args.schema.display()))?;

    let mut report = CheckReport {
        definitions: classes.len(),
        objects: 0,
        enums: 0,
        strings: 0,
        cycles: cycles.iter().map(|c| c.join(" -> ")).collect(),
    };
    for class in &classes {
        match class.body {
            ClassBody::Object { .. } => report.objects += 1,
            ClassBody::Enum { .. } => report.enums += 1,
            ClassBody::Text => report.strings += 1,
        }
    }

    tracing::debug!(definitions = report.definitions, "checked schema");
    Ok(report)
}

/// Execute the check subcommand.
///
/// # Errors
/// Returns an error if the check fails or the report cannot be serialized.
pub fn run_check(args: &CheckArgs) -> Result<CheckReport> {
    let report = check_schema(args)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{json}");
    } else {
        println!(
            "OK: {} definitions ({} objects, {} enums, {} strings)",
            report.definitions, report.objects, report.enums, report.strings
        );
        for cycle in &report.cycles {
            println!("  cycle: {cycle}");
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(json: &str, cycles: CyclePolicy) -> Result<CheckReport> {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = dir.path().join("schema.json");
        std::fs::write(&schema, json).expect("Failed to write schema");
        check_schema(&CheckArgs {
            schema,
            cycles,
            json: false,
        })
    }

    #[test]
    fn test_check_counts_definitions() {
        let report = check(
            r##"{"definitions": {
                "A": {"type": "object", "properties": {"b": {"$ref": "#/definitions/B"}}},
                "B": {"type": "string", "enum": ["x"]},
                "C": {"type": "string"}
            }}"##,
            CyclePolicy::Warn,
        )
        .expect("Failed to check");

        assert_eq!(
            report,
            CheckReport {
                definitions: 3,
                objects: 1,
                enums: 1,
                strings: 1,
                cycles: Vec::new(),
            }
        );
    }

    #[test]
    fn test_check_reports_cycles() {
        let json = r##"{"definitions": {
            "Node": {"type": "object", "properties": {"next": {"$ref": "#/definitions/Node"}}}
        }}"##;

        let report = check(json, CyclePolicy::Allow).expect("Failed to check");
        assert_eq!(report.cycles, vec!["Node -> Node".to_string()]);
        assert!(check(json, CyclePolicy::Reject).is_err());
    }

    #[test]
    fn test_report_serializes() {
        let report = CheckReport {
            definitions: 1,
            objects: 0,
            enums: 0,
            strings: 1,
            cycles: Vec::new(),
        };
        let value = serde_json::to_value(&report).expect("Failed to serialize");
        assert_eq!(value["definitions"], 1);
        assert_eq!(value["strings"], 1);
        assert!(value["cycles"].as_array().is_some_and(Vec::is_empty));
    }

    #[test]
    fn test_check_missing_file() {
        let result = check_schema(&CheckArgs {
            schema: PathBuf::from("/nonexistent/schema.json"),
            cycles: CyclePolicy::Warn,
            json: false,
        });
        assert!(result.is_err());
    }
}
