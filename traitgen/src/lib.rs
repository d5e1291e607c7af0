//! # traitgen
//!
//! Generates Python wrapper classes built on `traitlets` from the named
//! definitions of a JSON schema document.
//!
//! ## Features
//!
//! - **Object definitions** - One class per definition, one trait attribute per property
//! - **String definitions** - Enumerated (`T.Enum`) or plain (`T.Unicode`) classes
//! - **References and unions** - Resolved to instance/class traits with imports
//! - **Deterministic output** - Identical input always yields byte-identical files
//! - **Test stubs** - One default-construction test per generated class
//!
//! ## Quick Start
//!
//! ```ignore
//! use traitgen::prelude::*;
//!
//! let config = GeneratorConfig::new().package_title("vega-lite schema");
//! let package = generate_from_file(Path::new("vega-lite.json"), &config)?;
//! write_package(&package, Path::new("schema/_generated"))?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema parsing, classification, validation and resolution
//! - [`codegen`] - Python module generation and package writing

pub mod prelude;

/// Schema parsing, validation and attribute resolution.
pub mod schema {
    pub use traitgen_schema::*;
}

/// Python code generation from schema definitions.
pub mod codegen {
    pub use traitgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use traitgen_codegen::{
    CodegenError, GeneratedModule, GeneratedPackage, Generator, GeneratorConfig,
    generate_from_file, generate_from_json, write_package,
};
pub use traitgen_schema::{CyclePolicy, SchemaError, SchemaRepository};
