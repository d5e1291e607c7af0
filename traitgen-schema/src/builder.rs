//! Class builders for classified definitions.

use crate::error::Result;
use crate::ir::{ClassBody, ClassIr, ImportSet, NamedAttribute};
use crate::resolver::{AttributeResolver, help_text};
use crate::types::{Definition, ObjectDef, StringDef, module_name};

/// Builds the class of an object definition.
pub struct ObjectDefinitionBuilder<'r, 'a> {
    resolver: &'r AttributeResolver<'a>,
}

impl<'r, 'a> ObjectDefinitionBuilder<'r, 'a> {
    /// Creates a builder resolving attributes with `resolver`.
    #[must_use]
    pub fn new(resolver: &'r AttributeResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Resolves every property in lexicographic order.
    ///
    /// # Errors
    /// Returns the first resolution error encountered.
    pub fn build(&self, def: &ObjectDef) -> Result<ClassIr> {
        let mut attributes = Vec::with_capacity(def.properties.len());
        let mut imports = ImportSet::new();

        for (name, spec) in def.sorted_properties() {
            let attribute = self.resolver.resolve(spec, &format!("{}.{}", def.name, name))?;
            imports.merge(&attribute.imports);
            attributes.push(NamedAttribute {
                name: name.to_string(),
                attribute,
            });
        }

        Ok(ClassIr {
            name: def.name.clone(),
            module: module_name(&def.name),
            doc: self.doc(def.description.as_deref()),
            body: ClassBody::Object { attributes },
            imports,
        })
    }

    fn doc(&self, description: Option<&str>) -> Option<String> {
        description.map(|d| help_text(d, self.resolver.options().summarize_help))
    }
}

/// Builds the class of a string definition.
pub struct StringDefinitionBuilder {
    summarize_help: bool,
}

impl StringDefinitionBuilder {
    /// Creates a builder.
    #[must_use]
    pub const fn new(summarize_help: bool) -> Self {
        Self { summarize_help }
    }

    /// Builds an enumerated class when the definition has a fixed value
    /// set, and a plain string wrapper otherwise.
    #[must_use]
    pub fn build(&self, def: &StringDef) -> ClassIr {
        let body = match &def.enum_values {
            Some(values) => ClassBody::Enum {
                values: values.clone(),
            },
            None => ClassBody::Text,
        };

        ClassIr {
            name: def.name.clone(),
            module: module_name(&def.name),
            doc: def
                .description
                .as_deref()
                .map(|d| help_text(d, self.summarize_help)),
            body,
            imports: ImportSet::new(),
        }
    }
}

/// Builds the class of any classified definition.
///
/// # Errors
/// Returns the first resolution error of an object definition.
pub fn build_class(definition: &Definition, resolver: &AttributeResolver<'_>) -> Result<ClassIr> {
    let class = match definition {
        Definition::Object(def) => ObjectDefinitionBuilder::new(resolver).build(def)?,
        Definition::String(def) => {
            StringDefinitionBuilder::new(resolver.options().summarize_help).build(def)
        }
    };
    tracing::debug!(
        class = %class.name,
        imports = class.imports.len(),
        "built class"
    );
    Ok(class)
}
