//! Definition classification.
//!
//! Turns a raw named definition into an [`Definition::Object`] or a
//! [`Definition::String`] based on its declared `type`.

use crate::error::{Result, SchemaError};
use crate::parser::parse_property;
use crate::types::{Definition, DefinitionKind, ObjectDef, RawDefinition, SchemaDocument, StringDef};
use indexmap::IndexMap;
use serde_json::Value;

/// Classifies definitions of a schema document.
pub struct DefinitionClassifier<'a> {
    document: &'a SchemaDocument,
}

impl<'a> DefinitionClassifier<'a> {
    /// Creates a classifier over a document.
    #[must_use]
    pub fn new(document: &'a SchemaDocument) -> Self {
        Self { document }
    }

    /// Classifies the definition with the given name.
    ///
    /// # Errors
    /// Returns `SchemaError::UnsupportedDefinitionKind` when the declared kind
    /// is neither object nor string, and `SchemaError::MalformedDefinition`
    /// when the definition is missing or its body does not fit its kind.
    pub fn classify(&self, name: &str) -> Result<Definition> {
        let raw = self
            .document
            .get_definition(name)
            .ok_or_else(|| SchemaError::malformed_definition(name, "no such definition"))?;
        classify_definition(raw)
    }
}

/// Classifies a single raw definition.
///
/// # Errors
/// See [`DefinitionClassifier::classify`].
pub fn classify_definition(raw: &RawDefinition) -> Result<Definition> {
    let kind = raw
        .declared_kind()
        .and_then(DefinitionKind::parse)
        .ok_or_else(|| SchemaError::UnsupportedDefinitionKind {
            name: raw.name.clone(),
            kind: raw.kind_label(),
        })?;

    let definition = match kind {
        DefinitionKind::Object => Definition::Object(object_definition(raw)?),
        DefinitionKind::String => Definition::String(string_definition(raw)?),
    };
    tracing::debug!(name = %raw.name, kind = kind.as_str(), "classified definition");
    Ok(definition)
}

fn object_definition(raw: &RawDefinition) -> Result<ObjectDef> {
    let Some(Value::Object(raw_properties)) = raw.body.get("properties") else {
        return Err(SchemaError::malformed_definition(
            &raw.name,
            "object definition without a 'properties' mapping",
        ));
    };

    let mut properties = IndexMap::with_capacity(raw_properties.len());
    for (prop_name, descriptor) in raw_properties {
        let spec = parse_property(descriptor, &format!("{}.{}", raw.name, prop_name))?;
        properties.insert(prop_name.clone(), spec);
    }

    Ok(ObjectDef {
        name: raw.name.clone(),
        description: description(raw)?,
        properties,
    })
}

fn string_definition(raw: &RawDefinition) -> Result<StringDef> {
    let enum_values = match raw.body.get("enum") {
        None => None,
        Some(Value::Array(values)) => Some(
            values
                .iter()
                .map(|v| match v {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(SchemaError::malformed_definition(
                        &raw.name,
                        format!("enum value {other} is not a string"),
                    )),
                })
                .collect::<Result<Vec<_>>>()?,
        ),
        Some(_) => {
            return Err(SchemaError::malformed_definition(
                &raw.name,
                "'enum' must be an array",
            ));
        }
    };

    Ok(StringDef {
        name: raw.name.clone(),
        description: description(raw)?,
        enum_values,
    })
}

fn description(raw: &RawDefinition) -> Result<Option<String>> {
    match raw.body.get("description") {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(SchemaError::malformed_definition(
            &raw.name,
            "'description' must be a string",
        )),
    }
}
