//! JSON schema document parser.
//!
//! This module reads a JSON schema document into the raw definition table
//! and turns property descriptors into [`PropertySpec`] values.

use crate::error::{Result, SchemaError};
use crate::types::{
    AttributeMeta, DEFINITIONS_PREFIX, PropertySpec, RawDefinition, ReferenceSpec, SchemaDocument,
    TypedSpec, UnionSpec, ValueKind,
};
use serde_json::{Map, Number, Value};

/// Parses a schema document from a JSON string.
///
/// # Arguments
/// * `json` - JSON schema content
///
/// # Returns
/// Parsed schema document or schema error.
///
/// # Errors
/// Returns `SchemaError` if the JSON is malformed, the document has no
/// `definitions` mapping, or a definition body is not a JSON object.
pub fn parse_schema(json: &str) -> Result<SchemaDocument> {
    let value: Value = serde_json::from_str(json)?;
    parse_schema_value(value)
}

/// Parses a schema document from an already decoded JSON value.
///
/// # Errors
/// Returns `SchemaError` if the document has no `definitions` mapping or a
/// definition body is not a JSON object.
pub fn parse_schema_value(value: Value) -> Result<SchemaDocument> {
    let Value::Object(mut root) = value else {
        return Err(SchemaError::MissingDefinitions);
    };
    let Some(Value::Object(definitions)) = root.remove("definitions") else {
        return Err(SchemaError::MissingDefinitions);
    };

    let mut document = SchemaDocument::new();
    for (name, body) in definitions {
        match body {
            Value::Object(body) => document.add_definition(RawDefinition::new(name, body)),
            other => {
                return Err(SchemaError::malformed_definition(
                    name,
                    format!("expected a JSON object, found {}", json_kind(&other)),
                ));
            }
        }
    }

    tracing::debug!(definitions = document.len(), "parsed schema document");
    Ok(document)
}

/// Parses a single property descriptor.
///
/// Exactly one of `type`, `$ref` and `oneOf` must be present.
///
/// # Arguments
/// * `value` - Raw descriptor
/// * `context` - Dotted location used in error messages (e.g. `Foo.bar.items`)
///
/// # Errors
/// Returns `SchemaError` if the descriptor shape is not recognized or its
/// content is invalid.
pub fn parse_property(value: &Value, context: &str) -> Result<PropertySpec> {
    let Value::Object(map) = value else {
        return Err(SchemaError::malformed_attr(
            context,
            format!("expected a JSON object, found {}", json_kind(value)),
        ));
    };

    let shape_keys: Vec<&str> = ["type", "$ref", "oneOf"]
        .into_iter()
        .filter(|key| map.contains_key(*key))
        .collect();

    match shape_keys.as_slice() {
        ["type"] => parse_typed(map, context).map(PropertySpec::Typed),
        ["$ref"] => parse_reference(map, context).map(PropertySpec::Reference),
        ["oneOf"] => parse_union(map, context).map(PropertySpec::Union),
        _ => Err(SchemaError::unrecognized_shape(context, key_list(map))),
    }
}

/// Parses a `type`-keyed descriptor.
fn parse_typed(map: &Map<String, Value>, context: &str) -> Result<TypedSpec> {
    let kind = match map.get("type") {
        Some(Value::String(s)) => ValueKind::parse(s).ok_or_else(|| {
            SchemaError::UnsupportedAttributeType {
                context: context.to_string(),
                kind: s.clone(),
            }
        })?,
        Some(other) => {
            return Err(SchemaError::UnsupportedAttributeType {
                context: context.to_string(),
                kind: other.to_string(),
            });
        }
        None => return Err(SchemaError::unrecognized_shape(context, key_list(map))),
    };

    let items = if kind == ValueKind::Array {
        let items = map
            .get("items")
            .ok_or_else(|| SchemaError::malformed_attr(context, "array without 'items'"))?;
        Some(Box::new(parse_property(items, &format!("{context}.items"))?))
    } else {
        None
    };

    Ok(TypedSpec {
        kind,
        items,
        meta: parse_meta(map, context)?,
    })
}

/// Parses a `$ref`-keyed descriptor.
fn parse_reference(map: &Map<String, Value>, context: &str) -> Result<ReferenceSpec> {
    let reference = match map.get("$ref") {
        Some(Value::String(s)) => s,
        other => {
            return Err(SchemaError::InvalidReference {
                context: context.to_string(),
                reference: other.map(Value::to_string).unwrap_or_default(),
            });
        }
    };

    Ok(ReferenceSpec {
        target: reference_target(reference, context)?.to_string(),
        meta: parse_meta(map, context)?,
    })
}

/// Parses a `oneOf`-keyed descriptor.
fn parse_union(map: &Map<String, Value>, context: &str) -> Result<UnionSpec> {
    let Some(Value::Array(raw_alternatives)) = map.get("oneOf") else {
        return Err(SchemaError::malformed_attr(context, "'oneOf' must be an array"));
    };
    if raw_alternatives.is_empty() {
        return Err(SchemaError::malformed_attr(
            context,
            "'oneOf' must list at least one alternative",
        ));
    }

    let alternatives = raw_alternatives
        .iter()
        .enumerate()
        .map(|(i, alt)| parse_property(alt, &format!("{context}.oneOf[{i}]")))
        .collect::<Result<Vec<_>>>()?;

    Ok(UnionSpec {
        alternatives,
        meta: parse_meta(map, context)?,
    })
}

/// Reads `description`, `minimum` and `maximum`.
fn parse_meta(map: &Map<String, Value>, context: &str) -> Result<AttributeMeta> {
    let description = match map.get("description") {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            return Err(SchemaError::malformed_attr(
                context,
                "'description' must be a string",
            ));
        }
    };

    Ok(AttributeMeta {
        description,
        minimum: parse_bound(map, "minimum", context)?,
        maximum: parse_bound(map, "maximum", context)?,
    })
}

fn parse_bound(map: &Map<String, Value>, key: &str, context: &str) -> Result<Option<Number>> {
    match map.get(key) {
        None => Ok(None),
        Some(Value::Number(n)) => Ok(Some(n.clone())),
        Some(_) => Err(SchemaError::malformed_attr(
            context,
            format!("'{key}' must be a number"),
        )),
    }
}

/// Extracts the definition name from a `#/definitions/<Name>` reference.
///
/// # Errors
/// Returns `SchemaError::InvalidReference` for any other reference form.
pub fn reference_target<'a>(reference: &'a str, context: &str) -> Result<&'a str> {
    match reference.strip_prefix(DEFINITIONS_PREFIX) {
        Some(name) if !name.is_empty() && !name.contains('/') => Ok(name),
        _ => Err(SchemaError::InvalidReference {
            context: context.to_string(),
            reference: reference.to_string(),
        }),
    }
}

fn key_list(map: &Map<String, Value>) -> String {
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.join(", ")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_schema() {
        let json = r#"{
            "definitions": {
                "Foo": {"type": "object", "properties": {"bar": {"type": "number"}}},
                "Color": {"type": "string", "enum": ["red", "green", "blue"]}
            }
        }"#;

        let doc = parse_schema(json).expect("Failed to parse");
        assert_eq!(doc.len(), 2);
        assert_eq!(
            doc.get_definition("Foo").and_then(|d| d.declared_kind()),
            Some("object")
        );
        assert_eq!(
            doc.get_definition("Color").and_then(|d| d.declared_kind()),
            Some("string")
        );
    }

    #[test]
    fn test_parse_schema_missing_definitions() {
        let result = parse_schema(r#"{"$schema": "http://json-schema.org/draft-04/schema#"}"#);
        assert!(matches!(result, Err(SchemaError::MissingDefinitions)));

        let result = parse_schema("[]");
        assert!(matches!(result, Err(SchemaError::MissingDefinitions)));
    }

    #[test]
    fn test_parse_schema_invalid_json() {
        let result = parse_schema("{not json");
        assert!(matches!(result, Err(SchemaError::Json(_))));
    }

    #[test]
    fn test_parse_schema_non_object_definition() {
        let result = parse_schema(r#"{"definitions": {"Foo": 3}}"#);
        assert!(matches!(
            result,
            Err(SchemaError::MalformedDefinition { name, .. }) if name == "Foo"
        ));
    }

    #[test]
    fn test_parse_typed_number_with_bounds() {
        let spec = parse_property(
            &json!({"type": "number", "minimum": 0, "maximum": 1.5, "description": "Opacity."}),
            "Mark.opacity",
        )
        .expect("Failed to parse");

        let PropertySpec::Typed(typed) = spec else {
            panic!("expected typed spec");
        };
        assert_eq!(typed.kind, ValueKind::Number);
        assert!(typed.items.is_none());
        assert_eq!(typed.meta.minimum.map(|n| n.to_string()), Some("0".to_string()));
        assert_eq!(typed.meta.maximum.map(|n| n.to_string()), Some("1.5".to_string()));
        assert_eq!(typed.meta.description.as_deref(), Some("Opacity."));
    }

    #[test]
    fn test_parse_array_items() {
        let spec = parse_property(
            &json!({"type": "array", "items": {"$ref": "#/definitions/Bar"}}),
            "Foo.bars",
        )
        .expect("Failed to parse");

        let PropertySpec::Typed(typed) = spec else {
            panic!("expected typed spec");
        };
        assert_eq!(typed.kind, ValueKind::Array);
        let items = typed.items.expect("items");
        assert!(matches!(*items, PropertySpec::Reference(ref r) if r.target == "Bar"));
    }

    #[test]
    fn test_parse_array_without_items() {
        let result = parse_property(&json!({"type": "array"}), "Foo.bars");
        assert!(matches!(
            result,
            Err(SchemaError::MalformedAttribute { context, .. }) if context == "Foo.bars"
        ));
    }

    #[test]
    fn test_parse_unsupported_type() {
        let result = parse_property(&json!({"type": "integer"}), "Foo.n");
        assert!(matches!(
            result,
            Err(SchemaError::UnsupportedAttributeType { kind, .. }) if kind == "integer"
        ));

        let result = parse_property(&json!({"type": ["string", "null"]}), "Foo.s");
        assert!(matches!(result, Err(SchemaError::UnsupportedAttributeType { .. })));
    }

    #[test]
    fn test_parse_union() {
        let spec = parse_property(
            &json!({"oneOf": [{"type": "number"}, {"type": "boolean"}]}),
            "Foo.u",
        )
        .expect("Failed to parse");

        let PropertySpec::Union(union) = spec else {
            panic!("expected union spec");
        };
        assert_eq!(union.alternatives.len(), 2);
    }

    #[test]
    fn test_parse_empty_union() {
        let result = parse_property(&json!({"oneOf": []}), "Foo.u");
        assert!(matches!(result, Err(SchemaError::MalformedAttribute { .. })));
    }

    #[test]
    fn test_parse_nested_error_context() {
        let result = parse_property(
            &json!({"oneOf": [{"type": "number"}, {"enum": ["a"]}]}),
            "Foo.u",
        );
        assert!(matches!(
            result,
            Err(SchemaError::UnrecognizedAttributeShape { context, .. }) if context == "Foo.u.oneOf[1]"
        ));
    }

    #[test]
    fn test_parse_unrecognized_shape() {
        let result = parse_property(&json!({"description": "nothing else"}), "Foo.x");
        assert!(matches!(
            result,
            Err(SchemaError::UnrecognizedAttributeShape { keys, .. }) if keys == "description"
        ));
    }

    #[test]
    fn test_parse_ambiguous_shape() {
        let result = parse_property(
            &json!({"type": "string", "$ref": "#/definitions/Bar"}),
            "Foo.x",
        );
        assert!(matches!(result, Err(SchemaError::UnrecognizedAttributeShape { .. })));
    }

    #[test]
    fn test_reference_target() {
        assert_eq!(reference_target("#/definitions/Bar", "x").ok(), Some("Bar"));
        assert!(reference_target("#/definitions/", "x").is_err());
        assert!(reference_target("#/properties/Bar", "x").is_err());
        assert!(reference_target("other.json#/definitions/Bar", "x").is_err());
        assert!(reference_target("#/definitions/Bar/baz", "x").is_err());
    }

    #[test]
    fn test_parse_bad_bound() {
        let result = parse_property(&json!({"type": "number", "minimum": "0"}), "Foo.n");
        assert!(matches!(result, Err(SchemaError::MalformedAttribute { .. })));
    }
}
