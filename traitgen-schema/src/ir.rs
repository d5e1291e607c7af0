//! Intermediate representation for code generation.
//!
//! This module provides the resolved, render-ready form of definitions and
//! their attributes. The [`fmt::Display`] impl of [`ResolvedAttribute`] is the
//! canonical rendering used both for output and for ordering union members.

use indexmap::IndexSet;
use serde_json::Number;
use std::fmt;

/// A single cross-module import.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Import {
    /// Generated module name.
    pub module: String,
    /// Class exported by the module.
    pub class: String,
}

impl Import {
    /// Creates the import of a definition's generated class.
    #[must_use]
    pub fn definition(name: &str) -> Self {
        Self {
            module: crate::types::module_name(name),
            class: name.to_string(),
        }
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from .{} import {}", self.module, self.class)
    }
}

/// Ordered, deduplicated set of imports (first-use order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    imports: IndexSet<Import>,
}

impl ImportSet {
    /// Creates an empty import set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an import; returns false if it was already present.
    pub fn insert(&mut self, import: Import) -> bool {
        self.imports.insert(import)
    }

    /// Adds every import of another set, keeping first-use order.
    pub fn merge(&mut self, other: &ImportSet) {
        self.imports.extend(other.imports.iter().cloned());
    }

    /// Iterates imports in first-use order.
    pub fn iter(&self) -> impl Iterator<Item = &Import> {
        self.imports.iter()
    }

    /// Returns the imported module names in first-use order.
    #[must_use]
    pub fn modules(&self) -> Vec<String> {
        self.imports.iter().map(|i| i.module.clone()).collect()
    }

    /// Returns the number of imports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.imports.len()
    }

    /// Returns true if there are no imports.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }
}

/// Trait type an attribute resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum TraitType {
    /// Boolean scalar.
    Bool,
    /// Floating-point scalar.
    CFloat,
    /// String scalar.
    Unicode,
    /// Unconstrained value.
    Any,
    /// Sequence of the inner attribute.
    List(Box<ResolvedAttribute>),
    /// Instance of a generated object class.
    Instance(String),
    /// Value constructor of a generated string class.
    StringValue(String),
    /// One of several alternatives, kept sorted by rendered text.
    Union(Vec<ResolvedAttribute>),
}

/// Keyword arguments attached to every attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Keywords {
    /// Whether `None` is accepted.
    pub allow_none: bool,
    /// One-line documentation, without trailing period.
    pub help: Option<String>,
    /// Inclusive lower bound.
    pub min: Option<Number>,
    /// Inclusive upper bound.
    pub max: Option<Number>,
}

impl Keywords {
    /// Keywords of an optional attribute with no other metadata.
    #[must_use]
    pub const fn optional() -> Self {
        Self {
            allow_none: true,
            help: None,
            min: None,
            max: None,
        }
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self::optional()
    }
}

impl fmt::Display for Keywords {
    // Keys other than help are sorted by name; help always comes last.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let allow_none = if self.allow_none { "True" } else { "False" };
        write!(f, "allow_none={allow_none}, default_value=None")?;
        if let Some(max) = &self.max {
            write!(f, ", max={max}")?;
        }
        if let Some(min) = &self.min {
            write!(f, ", min={min}")?;
        }
        if let Some(help) = &self.help {
            write!(f, ", help=\"\"\"{}.\"\"\"", escape_docstring(help))?;
        }
        Ok(())
    }
}

/// Fully resolved attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAttribute {
    /// Resolved trait type.
    pub trait_type: TraitType,
    /// Keyword arguments.
    pub keywords: Keywords,
    /// Imports required by this attribute, including nested ones.
    pub imports: ImportSet,
}

impl ResolvedAttribute {
    /// Creates an attribute with no imports.
    #[must_use]
    pub fn new(trait_type: TraitType, keywords: Keywords) -> Self {
        Self {
            trait_type,
            keywords,
            imports: ImportSet::new(),
        }
    }

    /// Returns true if the attribute accepts `None`.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.keywords.allow_none
    }
}

impl fmt::Display for ResolvedAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kw = &self.keywords;
        match &self.trait_type {
            TraitType::Bool => write!(f, "T.Bool({kw})"),
            TraitType::CFloat => write!(f, "T.CFloat({kw})"),
            TraitType::Unicode => write!(f, "T.Unicode({kw})"),
            TraitType::Any => write!(f, "T.Any({kw})"),
            TraitType::List(inner) => write!(f, "T.List({inner}, {kw})"),
            TraitType::Instance(class) => write!(f, "T.Instance({class}, {kw})"),
            TraitType::StringValue(class) => write!(f, "{class}({kw})"),
            TraitType::Union(alternatives) => {
                f.write_str("T.Union([")?;
                for (i, alt) in alternatives.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{alt}")?;
                }
                write!(f, "], {kw})")
            }
        }
    }
}

/// A resolved attribute bound to its property name.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedAttribute {
    /// Property name.
    pub name: String,
    /// Resolved attribute.
    pub attribute: ResolvedAttribute,
}

/// Body of a generated class.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassBody {
    /// Object class with attributes in lexicographic property order.
    Object {
        /// Attributes.
        attributes: Vec<NamedAttribute>,
    },
    /// Enumerated string class with values in declared order.
    Enum {
        /// Fixed value set.
        values: Vec<String>,
    },
    /// Transparent string wrapper.
    Text,
}

/// Resolved class for one definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassIr {
    /// Class name (the definition name).
    pub name: String,
    /// Generated module name.
    pub module: String,
    /// Class docstring, without trailing period.
    pub doc: Option<String>,
    /// Class body.
    pub body: ClassBody,
    /// Cross-module imports of this class.
    pub imports: ImportSet,
}

impl ClassIr {
    /// Returns the test function name for the class.
    #[must_use]
    pub fn test_name(&self) -> String {
        format!("test_{}", self.name)
    }

    /// Returns true if this is an object class.
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self.body, ClassBody::Object { .. })
    }
}

/// Escapes text for use inside a triple-quoted Python string.
#[must_use]
pub fn escape_docstring(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
