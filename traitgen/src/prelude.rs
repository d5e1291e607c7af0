//! Prelude module for convenient imports.
//!
//! ```ignore
//! use traitgen::prelude::*;
//! ```

// Schema types
pub use traitgen_schema::{
    AttributeResolver, CyclePolicy, Definition, DefinitionClassifier, DefinitionKind,
    PropertySpec, SchemaDocument, SchemaError, SchemaRepository, parse_schema, validate_schema,
};

// Resolved representation
pub use traitgen_schema::{ClassBody, ClassIr, Import, ResolvedAttribute, TraitType};

// Generation
pub use traitgen_codegen::{
    CodegenError, GeneratedModule, GeneratedPackage, Generator, GeneratorConfig,
    generate_from_file, generate_from_json, write_package,
};
