//! # traitgen Bench
//!
//! Synthetic schema fixtures for traitgen performance testing.

use serde_json::{Map, Value, json};

/// Builds a schema document with `objects` object definitions.
///
/// Every object `ObjNNNN` gets a scalar of each kind, an array of
/// references, a union and a reference to the next object, plus a
/// companion enumerated (`ModeNNNN`) and plain (`LabelNNNN`) string
/// definition. References only point forward, so the document is acyclic.
#[must_use]
pub fn synthetic_schema(objects: usize) -> Value {
    let mut definitions = Map::new();

    for i in 0..objects {
        let mode = format!("Mode{i:04}");
        let label = format!("Label{i:04}");
        let mut properties = json!({
            "flag": {"type": "boolean", "description": "Whether the flag is set."},
            "size": {"type": "number", "minimum": 0, "maximum": 100},
            "title": {
                "type": "string",
                "description": "Title of the object (e.g. \"main\"). Shown on top."
            },
            "extra": {"type": "object"},
            "modes": {"type": "array", "items": {"$ref": format!("#/definitions/{mode}")}},
            "choice": {"oneOf": [
                {"$ref": format!("#/definitions/{label}")},
                {"type": "number"},
                {"type": "array", "items": {"type": "string"}}
            ]}
        });
        if i + 1 < objects {
            properties["next"] = json!({"$ref": format!("#/definitions/Obj{:04}", i + 1)});
        }

        definitions.insert(
            format!("Obj{i:04}"),
            json!({"type": "object", "description": "Synthetic object.", "properties": properties}),
        );
        definitions.insert(
            mode,
            json!({"type": "string", "enum": ["fast", "slow", "auto"]}),
        );
        definitions.insert(label, json!({"type": "string"}));
    }

    json!({ "definitions": definitions })
}

/// Returns [`synthetic_schema`] as JSON text.
#[must_use]
pub fn synthetic_schema_json(objects: usize) -> String {
    synthetic_schema(objects).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use traitgen_codegen::{GeneratorConfig, generate_from_json};

    #[test]
    fn test_synthetic_schema_generates() {
        let package = generate_from_json(&synthetic_schema_json(3), &GeneratorConfig::default())
            .expect("Failed to generate");

        assert_eq!(package.modules.len(), 9);
        assert!(package.cycles.is_empty());
        let first = package.module("obj0000").expect("module obj0000");
        assert_eq!(first.imports, vec!["label0000", "mode0000", "obj0001"]);
    }
}
