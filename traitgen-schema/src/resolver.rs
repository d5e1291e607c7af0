//! Attribute resolution.
//!
//! Maps one [`PropertySpec`] plus its schema context to a
//! [`ResolvedAttribute`]. Resolution is a pure function of its inputs: the
//! imports a property needs are returned with the attribute rather than
//! collected in shared state.

use crate::error::{Result, SchemaError};
use crate::ir::{Import, ImportSet, Keywords, ResolvedAttribute, TraitType};
use crate::types::{
    AttributeMeta, DefinitionKind, PropertySpec, ReferenceSpec, SchemaDocument, TypedSpec,
    UnionSpec, ValueKind,
};

/// Marker after which a description is considered example text.
pub const EXAMPLE_MARKER: &str = "(e.g.";

/// Options controlling attribute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Reduce descriptions to their first sentence.
    pub summarize_help: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            summarize_help: true,
        }
    }
}

/// Resolves property descriptors against a schema document.
#[derive(Debug, Clone, Copy)]
pub struct AttributeResolver<'a> {
    document: &'a SchemaDocument,
    options: ResolveOptions,
}

impl<'a> AttributeResolver<'a> {
    /// Creates a resolver with default options.
    #[must_use]
    pub fn new(document: &'a SchemaDocument) -> Self {
        Self::with_options(document, ResolveOptions::default())
    }

    /// Creates a resolver with the given options.
    #[must_use]
    pub fn with_options(document: &'a SchemaDocument, options: ResolveOptions) -> Self {
        Self { document, options }
    }

    /// Returns the resolver options.
    #[must_use]
    pub const fn options(&self) -> ResolveOptions {
        self.options
    }

    /// Resolves a property descriptor.
    ///
    /// # Arguments
    /// * `spec` - Property descriptor
    /// * `context` - Dotted location used in error messages
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownReference` or
    /// `SchemaError::UnsupportedReferenceKind` for references that cannot be
    /// resolved, and `SchemaError::MalformedAttribute` for arrays without
    /// an element descriptor.
    pub fn resolve(&self, spec: &PropertySpec, context: &str) -> Result<ResolvedAttribute> {
        match spec {
            PropertySpec::Typed(typed) => self.resolve_typed(typed, context),
            PropertySpec::Reference(reference) => self.resolve_reference(reference, context),
            PropertySpec::Union(union) => self.resolve_union(union, context),
        }
    }

    fn resolve_typed(&self, typed: &TypedSpec, context: &str) -> Result<ResolvedAttribute> {
        let mut keywords = self.keywords(&typed.meta);

        let attribute = match typed.kind {
            ValueKind::Array => {
                let items = typed
                    .items
                    .as_deref()
                    .ok_or_else(|| SchemaError::malformed_attr(context, "array without 'items'"))?;
                let inner = self.resolve(items, &format!("{context}.items"))?;
                let imports = inner.imports.clone();
                ResolvedAttribute {
                    trait_type: TraitType::List(Box::new(inner)),
                    keywords,
                    imports,
                }
            }
            ValueKind::Boolean => ResolvedAttribute::new(TraitType::Bool, keywords),
            ValueKind::Number => {
                keywords.min = typed.meta.minimum.clone();
                keywords.max = typed.meta.maximum.clone();
                ResolvedAttribute::new(TraitType::CFloat, keywords)
            }
            ValueKind::String => ResolvedAttribute::new(TraitType::Unicode, keywords),
            ValueKind::Object => ResolvedAttribute::new(TraitType::Any, keywords),
        };
        Ok(attribute)
    }

    fn resolve_reference(
        &self,
        reference: &ReferenceSpec,
        context: &str,
    ) -> Result<ResolvedAttribute> {
        let target = self
            .document
            .get_definition(&reference.target)
            .ok_or_else(|| SchemaError::UnknownReference {
                context: context.to_string(),
                target: reference.target.clone(),
            })?;

        let trait_type = match target.declared_kind().and_then(DefinitionKind::parse) {
            Some(DefinitionKind::Object) => TraitType::Instance(target.name.clone()),
            Some(DefinitionKind::String) => TraitType::StringValue(target.name.clone()),
            None => {
                return Err(SchemaError::UnsupportedReferenceKind {
                    target: target.name.clone(),
                    kind: target.kind_label(),
                });
            }
        };

        let mut attribute = ResolvedAttribute::new(trait_type, self.keywords(&reference.meta));
        attribute.imports.insert(Import::definition(&target.name));
        Ok(attribute)
    }

    fn resolve_union(&self, union: &UnionSpec, context: &str) -> Result<ResolvedAttribute> {
        let mut rendered = union
            .alternatives
            .iter()
            .enumerate()
            .map(|(i, alt)| {
                let attr = self.resolve(alt, &format!("{context}.oneOf[{i}]"))?;
                Ok((attr.to_string(), attr))
            })
            .collect::<Result<Vec<_>>>()?;
        rendered.sort_by(|a, b| a.0.cmp(&b.0));

        // Imports follow the sorted order so that reordered alternatives
        // produce identical modules.
        let mut imports = ImportSet::new();
        for (_, attr) in &rendered {
            imports.merge(&attr.imports);
        }

        Ok(ResolvedAttribute {
            trait_type: TraitType::Union(rendered.into_iter().map(|(_, attr)| attr).collect()),
            keywords: self.keywords(&union.meta),
            imports,
        })
    }

    fn keywords(&self, meta: &AttributeMeta) -> Keywords {
        Keywords {
            help: meta
                .description
                .as_deref()
                .map(|d| help_text(d, self.options.summarize_help)),
            ..Keywords::optional()
        }
    }
}

/// Derives the help text of a description.
///
/// With `summarize` the text is cut at the example marker and then at the
/// first `.`. Without it only a single trailing period is dropped, since
/// rendering appends one.
#[must_use]
pub fn help_text(description: &str, summarize: bool) -> String {
    if summarize {
        summarize_description(description)
    } else {
        let text = description.trim_end();
        text.strip_suffix('.').unwrap_or(text).to_string()
    }
}

/// Reduces a description to its first sentence.
///
/// Abbreviations such as "U.S." end the sentence early.
#[must_use]
pub fn summarize_description(description: &str) -> String {
    let before_example = description
        .split(EXAMPLE_MARKER)
        .next()
        .unwrap_or(description);
    let first_sentence = before_example.split('.').next().unwrap_or(before_example);
    first_sentence.trim_end().to_string()
}
