//! Class module generation.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::python::{is_identifier, string_list};
use traitgen_schema::ir::{ClassBody, ClassIr, NamedAttribute, escape_docstring};

/// Import line every generated module starts with.
pub const TRAITLETS_IMPORT: &str = "import traitlets as T";

/// Generator for class modules.
pub struct ClassEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> ClassEmitter<'a> {
    /// Creates a new class emitter.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates the full source of a class module.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidIdentifier` if the class name or a
    /// property name cannot be used in Python source.
    pub fn emit(&self, class: &ClassIr) -> Result<String, CodegenError> {
        check_identifier(&class.name, &class.name)?;
        if let ClassBody::Object { attributes } = &class.body {
            for attr in attributes {
                check_identifier(&attr.name, &format!("{}.{}", class.name, attr.name))?;
            }
        }

        let imports = self.import_lines(class).join("\n");
        let code = self.class_code(class);
        Ok(format!(
            "{}\n\n{}\n\n\n{}\n",
            self.config.header_comment, imports, code
        ))
    }

    /// Returns the import lines of a class module, base imports first.
    #[must_use]
    pub fn import_lines(&self, class: &ClassIr) -> Vec<String> {
        let mut lines = vec![TRAITLETS_IMPORT.to_string()];
        if class.is_object() {
            lines.push(format!(
                "from {} import {}",
                self.config.base_module, self.config.base_class
            ));
        }
        lines.extend(class.imports.iter().map(ToString::to_string));
        lines
    }

    /// Generates the class statement, without trailing newline.
    #[must_use]
    pub fn class_code(&self, class: &ClassIr) -> String {
        match &class.body {
            ClassBody::Object { attributes } => self.generate_object(class, attributes),
            ClassBody::Enum { values } => self.generate_enum(class, values),
            ClassBody::Text => self.generate_text(class),
        }
    }

    /// Generates an object class.
    fn generate_object(&self, class: &ClassIr, attributes: &[NamedAttribute]) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "class {}({}):",
            class.name, self.config.base_class
        ));
        if let Some(doc) = &class.doc {
            output.push_str(&docstring_line(doc));
        }
        for attr in attributes {
            output.push_str(&format!("\n    {} = {}", attr.name, attr.attribute));
        }
        if attributes.is_empty() && class.doc.is_none() {
            output.push_str("\n    pass");
        }

        output
    }

    /// Generates an enumerated string class.
    fn generate_enum(&self, class: &ClassIr, values: &[String]) -> String {
        let mut output = String::new();
        let super_call = format!("        super({}, self).__init__(", class.name);
        let indent = " ".repeat(super_call.len());

        output.push_str(&format!("class {}(T.Enum):", class.name));
        if let Some(doc) = &class.doc {
            output.push_str(&docstring_line(doc));
        }
        output.push_str("\n    def __init__(self, default_value=T.Undefined, **metadata):\n");
        output.push_str(&format!("{}{},\n", super_call, string_list(values)));
        output.push_str(&format!("{indent}default_value=default_value,\n"));
        output.push_str(&format!("{indent}**metadata)"));

        output
    }

    /// Generates a plain string wrapper class.
    fn generate_text(&self, class: &ClassIr) -> String {
        let mut output = String::new();

        output.push_str(&format!("class {}(T.Unicode):", class.name));
        match &class.doc {
            Some(doc) => output.push_str(&docstring_line(doc)),
            None => output.push_str("\n    pass"),
        }

        output
    }
}

fn docstring_line(doc: &str) -> String {
    format!("\n    \"\"\"{}.\"\"\"", escape_docstring(doc))
}

fn check_identifier(name: &str, context: &str) -> Result<(), CodegenError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(CodegenError::InvalidIdentifier {
            name: name.to_string(),
            context: context.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use traitgen_schema::{
        AttributeResolver, DefinitionClassifier, SchemaDocument, build_class, parse_schema,
    };

    fn class_for(doc: &SchemaDocument, name: &str) -> ClassIr {
        let def = DefinitionClassifier::new(doc)
            .classify(name)
            .expect("Failed to classify");
        build_class(&def, &AttributeResolver::new(doc)).expect("Failed to build")
    }

    #[test]
    fn test_emit_object_module() {
        let doc = parse_schema(
            r#"{"definitions": {"Foo": {"type": "object", "properties": {
                "bar": {"type": "number", "minimum": 0}
            }}}}"#,
        )
        .expect("Failed to parse");
        let config = GeneratorConfig::default();
        let source = ClassEmitter::new(&config)
            .emit(&class_for(&doc, "Foo"))
            .expect("Failed to emit");

        let expected = format!(
            "{}\n\n\
             import traitlets as T\n\
             from ..baseobject import BaseObject\n\n\n\
             class Foo(BaseObject):\n\
             \x20   bar = T.CFloat(allow_none=True, default_value=None, min=0)\n",
            config.header_comment
        );
        assert_eq!(source, expected);
    }

    #[test]
    fn test_emit_object_with_reference() {
        let doc = parse_schema(
            r##"{"definitions": {
                "A": {"type": "object", "properties": {"b": {"$ref": "#/definitions/B"}}},
                "B": {"type": "object", "properties": {}}
            }}"##,
        )
        .expect("Failed to parse");
        let config = GeneratorConfig::default();
        let emitter = ClassEmitter::new(&config);

        let source = emitter.emit(&class_for(&doc, "A")).expect("Failed to emit");
        assert_eq!(source.matches("from .b import B").count(), 1);
        assert!(source.contains("    b = T.Instance(B, allow_none=True, default_value=None)"));

        let empty = emitter.emit(&class_for(&doc, "B")).expect("Failed to emit");
        assert!(empty.ends_with("class B(BaseObject):\n    pass\n"));
    }

    #[test]
    fn test_emit_enum_module() {
        let doc = parse_schema(
            r#"{"definitions": {"Color": {"type": "string", "enum": ["red", "green", "blue"]}}}"#,
        )
        .expect("Failed to parse");
        let config = GeneratorConfig::default();
        let emitter = ClassEmitter::new(&config);
        let class = class_for(&doc, "Color");

        assert_eq!(emitter.import_lines(&class), vec![TRAITLETS_IMPORT]);
        assert_eq!(
            emitter.class_code(&class),
            "class Color(T.Enum):\n\
             \x20   def __init__(self, default_value=T.Undefined, **metadata):\n\
             \x20       super(Color, self).__init__(['red', 'green', 'blue'],\n\
             \x20                                   default_value=default_value,\n\
             \x20                                   **metadata)"
        );
    }

    #[test]
    fn test_emit_text_module() {
        let doc = parse_schema(
            r#"{"definitions": {
                "Label": {"type": "string"},
                "Title": {"type": "string", "description": "Chart title. Shown on top."}
            }}"#,
        )
        .expect("Failed to parse");
        let config = GeneratorConfig::default();
        let emitter = ClassEmitter::new(&config);

        assert_eq!(
            emitter.class_code(&class_for(&doc, "Label")),
            "class Label(T.Unicode):\n    pass"
        );
        assert_eq!(
            emitter.class_code(&class_for(&doc, "Title")),
            "class Title(T.Unicode):\n    \"\"\"Chart title.\"\"\""
        );
    }

    #[test]
    fn test_emit_custom_base_class() {
        let doc = parse_schema(r#"{"definitions": {"Foo": {"type": "object", "properties": {}}}}"#)
            .expect("Failed to parse");
        let config = GeneratorConfig::new().base_class("..base", "Base");
        let source = ClassEmitter::new(&config)
            .emit(&class_for(&doc, "Foo"))
            .expect("Failed to emit");

        assert!(source.contains("from ..base import Base\n"));
        assert!(source.contains("class Foo(Base):"));
    }

    #[test]
    fn test_emit_rejects_invalid_property_name() {
        let doc = parse_schema(
            r#"{"definitions": {"Foo": {"type": "object", "properties": {"$schema": {"type": "string"}}}}}"#,
        )
        .expect("Failed to parse");
        let config = GeneratorConfig::default();
        let result = ClassEmitter::new(&config).emit(&class_for(&doc, "Foo"));

        assert!(matches!(
            result,
            Err(CodegenError::InvalidIdentifier { name, context }) if name == "$schema" && context == "Foo.$schema"
        ));
    }

    #[test]
    fn test_emit_is_deterministic() {
        let doc = parse_schema(
            r##"{"definitions": {
                "A": {"type": "object", "properties": {
                    "z": {"oneOf": [{"type": "number"}, {"$ref": "#/definitions/B"}]},
                    "a": {"type": "array", "items": {"$ref": "#/definitions/B"}}
                }},
                "B": {"type": "object", "properties": {}}
            }}"##,
        )
        .expect("Failed to parse");
        let config = GeneratorConfig::default();
        let emitter = ClassEmitter::new(&config);

        let first = emitter.emit(&class_for(&doc, "A")).expect("Failed to emit");
        let second = emitter.emit(&class_for(&doc, "A")).expect("Failed to emit");
        assert_eq!(first, second);
        assert!(first.find("    a = ").unwrap_or(usize::MAX) < first.find("    z = ").unwrap_or(0));
    }
}
