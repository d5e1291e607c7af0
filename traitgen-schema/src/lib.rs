//! # traitgen Schema
//!
//! JSON schema definition model and attribute resolution.
//!
//! This crate provides:
//! - Parsing of schema documents and property descriptors
//! - Classification of named definitions into object and string kinds
//! - Schema validation (module names, references, reference cycles)
//! - Attribute resolution into a render-ready intermediate representation

pub mod builder;
pub mod classifier;
pub mod error;
pub mod ir;
pub mod parser;
pub mod repository;
pub mod resolver;
pub mod types;
pub mod validation;

pub use builder::{ObjectDefinitionBuilder, StringDefinitionBuilder, build_class};
pub use classifier::DefinitionClassifier;
pub use error::{Result, SchemaError};
pub use ir::{ClassBody, ClassIr, Import, ImportSet, Keywords, NamedAttribute, ResolvedAttribute, TraitType};
pub use parser::{parse_property, parse_schema};
pub use repository::SchemaRepository;
pub use resolver::{AttributeResolver, ResolveOptions};
pub use types::{
    AttributeMeta, Definition, DefinitionKind, ObjectDef, PropertySpec, RawDefinition,
    ReferenceSpec, SchemaDocument, StringDef, TypedSpec, UnionSpec, ValueKind,
};
pub use validation::{CyclePolicy, validate_reserved_modules, validate_schema};
