//! # traitgen Codegen
//!
//! Python code generation from JSON schema definitions.
//!
//! This crate provides:
//! - One `traitlets`-based class module per schema definition
//! - A default-construction test stub per class
//! - Package and test package index generation
//! - Writing a generated package to disk

pub mod config;
pub mod error;
pub mod generator;
pub mod python;
pub mod writer;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::{GeneratedModule, GeneratedPackage, Generator};
pub use writer::write_package;

use traitgen_schema::SchemaRepository;

/// Generates a package from a JSON schema string.
///
/// # Arguments
/// * `json` - JSON schema content
/// * `config` - Generator configuration
///
/// # Returns
/// The generated package.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, resolution or rendering fails.
pub fn generate_from_json(
    json: &str,
    config: &GeneratorConfig,
) -> Result<GeneratedPackage, CodegenError> {
    let repository = SchemaRepository::from_json(json)?;
    Generator::new(&repository, config).generate()
}

/// Generates a package from a JSON schema file.
///
/// # Arguments
/// * `path` - Path to the JSON schema file
/// * `config` - Generator configuration
///
/// # Returns
/// The generated package.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation, resolution or
/// rendering fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &GeneratorConfig,
) -> Result<GeneratedPackage, CodegenError> {
    let repository = SchemaRepository::load(path)?;
    Generator::new(&repository, config).generate()
}
