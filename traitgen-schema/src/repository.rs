//! Schema repository.
//!
//! Loads a schema document and hands out its definitions, classified, in
//! name order.

use crate::classifier::classify_definition;
use crate::error::Result;
use crate::parser::parse_schema;
use crate::types::{Definition, SchemaDocument};
use std::path::Path;

/// Source of classified definitions for a generation run.
#[derive(Debug, Clone)]
pub struct SchemaRepository {
    document: SchemaDocument,
}

impl SchemaRepository {
    /// Wraps an already parsed document.
    #[must_use]
    pub fn new(document: SchemaDocument) -> Self {
        Self { document }
    }

    /// Loads a schema document from a JSON file.
    ///
    /// # Errors
    /// Returns `SchemaError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "reading schema");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parses a schema document from a JSON string.
    ///
    /// # Errors
    /// Returns `SchemaError` if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(parse_schema(json)?))
    }

    /// Returns the underlying document.
    #[must_use]
    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }

    /// Iterates `(name, definition)` pairs in name order.
    ///
    /// Each definition is classified as it is reached; the first failure
    /// is expected to end the run.
    pub fn iterate_definitions(&self) -> impl Iterator<Item = Result<(&str, Definition)>> + '_ {
        self.document
            .definitions()
            .map(|raw| classify_definition(raw).map(|def| (raw.name.as_str(), def)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;

    #[test]
    fn test_iterate_definitions_sorted() {
        let repo = SchemaRepository::from_json(
            r#"{"definitions": {
                "Zoo": {"type": "string"},
                "Apple": {"type": "object", "properties": {}},
                "Mango": {"type": "string", "enum": ["a"]}
            }}"#,
        )
        .expect("Failed to parse");

        let names: Vec<String> = repo
            .iterate_definitions()
            .map(|r| r.map(|(name, _)| name.to_string()))
            .collect::<Result<_>>()
            .expect("Failed to classify");
        assert_eq!(names, vec!["Apple", "Mango", "Zoo"]);
    }

    #[test]
    fn test_iterate_definitions_reports_unsupported_kind() {
        let repo = SchemaRepository::from_json(
            r#"{"definitions": {
                "A": {"type": "string"},
                "B": {"type": "number"}
            }}"#,
        )
        .expect("Failed to parse");

        let results: Vec<_> = repo.iterate_definitions().collect();
        assert!(results[0].is_ok());
        assert!(matches!(
            &results[1],
            Err(SchemaError::UnsupportedDefinitionKind { name, kind }) if name == "B" && kind == "number"
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = SchemaRepository::load(Path::new("/nonexistent/schema.json"));
        assert!(matches!(result, Err(SchemaError::Io(_))));
    }
}
