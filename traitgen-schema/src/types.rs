//! Schema type definitions.
//!
//! This module contains the data structures representing a schema document,
//! its named definitions and the property descriptors inside them.

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Prefix every supported `$ref` carries.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Complete schema document.
///
/// Definitions are kept raw and classified on demand, so a reference can
/// inspect the declared kind of its target without the target having to be
/// a supported definition itself.
#[derive(Debug, Clone, Default)]
pub struct SchemaDocument {
    definitions: BTreeMap<String, RawDefinition>,
}

impl SchemaDocument {
    /// Creates a new empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a raw definition, replacing any previous one with the same name.
    pub fn add_definition(&mut self, definition: RawDefinition) {
        self.definitions.insert(definition.name.clone(), definition);
    }

    /// Looks up a raw definition by name.
    #[must_use]
    pub fn get_definition(&self, name: &str) -> Option<&RawDefinition> {
        self.definitions.get(name)
    }

    /// Returns true if a definition with the given name exists.
    #[must_use]
    pub fn has_definition(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Iterates raw definitions in name order.
    pub fn definitions(&self) -> impl Iterator<Item = &RawDefinition> {
        self.definitions.values()
    }

    /// Iterates definition names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Returns the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if the document has no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// A named definition exactly as it appears in the document.
#[derive(Debug, Clone)]
pub struct RawDefinition {
    /// Definition name.
    pub name: String,
    /// Descriptor body.
    pub body: Map<String, Value>,
}

impl RawDefinition {
    /// Creates a raw definition.
    #[must_use]
    pub fn new(name: impl Into<String>, body: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    /// Returns the declared `type` as a string, if it is one.
    #[must_use]
    pub fn declared_kind(&self) -> Option<&str> {
        self.body.get("type").and_then(Value::as_str)
    }

    /// Describes the declared `type` for diagnostics.
    #[must_use]
    pub fn kind_label(&self) -> String {
        match self.body.get("type") {
            None => "<missing>".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Kind of a top-level definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    /// `"type": "object"`.
    Object,
    /// `"type": "string"`.
    String,
}

impl DefinitionKind {
    /// Parses a definition kind from its schema name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "object" => Some(Self::Object),
            "string" => Some(Self::String),
            _ => None,
        }
    }

    /// Returns the schema name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::String => "string",
        }
    }
}

/// Classified definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// Object definition with named properties.
    Object(ObjectDef),
    /// String definition, optionally enumerated.
    String(StringDef),
}

impl Definition {
    /// Returns the name of the definition.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Object(o) => &o.name,
            Self::String(s) => &s.name,
        }
    }

    /// Returns the kind of the definition.
    #[must_use]
    pub const fn kind(&self) -> DefinitionKind {
        match self {
            Self::Object(_) => DefinitionKind::Object,
            Self::String(_) => DefinitionKind::String,
        }
    }

    /// Returns the definition-level description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Object(o) => o.description.as_deref(),
            Self::String(s) => s.description.as_deref(),
        }
    }

    /// Returns the generated module name for the definition.
    #[must_use]
    pub fn module_name(&self) -> String {
        module_name(self.name())
    }
}

/// Object definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDef {
    /// Definition name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Properties in document order.
    pub properties: IndexMap<String, PropertySpec>,
}

impl ObjectDef {
    /// Creates an object definition without properties.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            properties: IndexMap::new(),
        }
    }

    /// Returns the properties sorted by name.
    #[must_use]
    pub fn sorted_properties(&self) -> Vec<(&str, &PropertySpec)> {
        let mut props: Vec<_> = self
            .properties
            .iter()
            .map(|(name, spec)| (name.as_str(), spec))
            .collect();
        props.sort_by(|a, b| a.0.cmp(b.0));
        props
    }
}

/// String definition.
#[derive(Debug, Clone, PartialEq)]
pub struct StringDef {
    /// Definition name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Fixed value set in declared order.
    pub enum_values: Option<Vec<String>>,
}

impl StringDef {
    /// Creates a plain string definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            enum_values: None,
        }
    }

    /// Returns true if the definition carries a fixed value set.
    #[must_use]
    pub fn is_enumerated(&self) -> bool {
        self.enum_values.is_some()
    }
}

/// Descriptor of a single property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertySpec {
    /// `type`-keyed descriptor.
    Typed(TypedSpec),
    /// `$ref`-keyed descriptor.
    Reference(ReferenceSpec),
    /// `oneOf`-keyed descriptor.
    Union(UnionSpec),
}

impl PropertySpec {
    /// Returns the metadata shared by every descriptor shape.
    #[must_use]
    pub fn meta(&self) -> &AttributeMeta {
        match self {
            Self::Typed(t) => &t.meta,
            Self::Reference(r) => &r.meta,
            Self::Union(u) => &u.meta,
        }
    }
}

/// Typed property descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedSpec {
    /// Value kind.
    pub kind: ValueKind,
    /// Element descriptor (arrays only).
    pub items: Option<Box<PropertySpec>>,
    /// Shared metadata.
    pub meta: AttributeMeta,
}

/// Reference property descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSpec {
    /// Target definition name.
    pub target: String,
    /// Shared metadata.
    pub meta: AttributeMeta,
}

/// Union property descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionSpec {
    /// Alternatives in declared order.
    pub alternatives: Vec<PropertySpec>,
    /// Shared metadata.
    pub meta: AttributeMeta,
}

/// Metadata carried by any property descriptor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMeta {
    /// Description.
    pub description: Option<String>,
    /// Inclusive lower bound.
    pub minimum: Option<Number>,
    /// Inclusive upper bound.
    pub maximum: Option<Number>,
}

/// Value kinds a typed descriptor may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `boolean`.
    Boolean,
    /// `number`.
    Number,
    /// `string`.
    String,
    /// `object`.
    Object,
    /// `array`.
    Array,
}

impl ValueKind {
    /// Parses a value kind from its schema name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "boolean" => Some(Self::Boolean),
            "number" => Some(Self::Number),
            "string" => Some(Self::String),
            "object" => Some(Self::Object),
            "array" => Some(Self::Array),
            _ => None,
        }
    }

    /// Returns the schema name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the generated module name for a definition name.
#[must_use]
pub fn module_name(definition: &str) -> String {
    definition.to_lowercase()
}
