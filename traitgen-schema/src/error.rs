//! Error types for schema loading, classification and resolution.

use thiserror::Error;

/// Error type for schema operations.
///
/// Every variant is fatal for a generation run; callers are expected to
/// propagate it unchanged to the top of the run.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document has no `definitions` mapping.
    #[error("schema document has no 'definitions' mapping")]
    MissingDefinitions,

    /// Top-level definition whose declared type is neither object nor string.
    #[error("unsupported kind '{kind}' for definition '{name}'")]
    UnsupportedDefinitionKind {
        /// Definition name.
        name: String,
        /// Declared kind.
        kind: String,
    },

    /// Definition that cannot be read as its declared kind.
    #[error("malformed definition '{name}': {message}")]
    MalformedDefinition {
        /// Definition name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Property descriptor that is not exactly one of typed, reference or union.
    #[error("unrecognized attribute shape at '{context}' (keys: {keys})")]
    UnrecognizedAttributeShape {
        /// Location of the descriptor.
        context: String,
        /// Keys present on the descriptor.
        keys: String,
    },

    /// Typed descriptor with a kind outside the supported set.
    #[error("unsupported attribute type '{kind}' at '{context}'")]
    UnsupportedAttributeType {
        /// Location of the descriptor.
        context: String,
        /// Declared kind.
        kind: String,
    },

    /// Descriptor whose shape is known but whose content is invalid.
    #[error("malformed attribute at '{context}': {message}")]
    MalformedAttribute {
        /// Location of the descriptor.
        context: String,
        /// Error message.
        message: String,
    },

    /// `$ref` that is not of the form `#/definitions/<Name>`.
    #[error("invalid reference '{reference}' at '{context}'")]
    InvalidReference {
        /// Location of the descriptor.
        context: String,
        /// Raw reference string.
        reference: String,
    },

    /// `$ref` naming a definition that does not exist.
    #[error("reference to unknown definition '{target}' at '{context}'")]
    UnknownReference {
        /// Location of the descriptor.
        context: String,
        /// Target definition name.
        target: String,
    },

    /// `$ref` target whose declared kind is neither object nor string.
    #[error("reference to definition '{target}' of unsupported kind '{kind}'")]
    UnsupportedReferenceKind {
        /// Target definition name.
        target: String,
        /// Target's declared kind.
        kind: String,
    },

    /// Two definitions that lowercase to the same module name.
    #[error("definitions '{first}' and '{second}' both map to module '{module}'")]
    ModuleNameCollision {
        /// Module name.
        module: String,
        /// First definition name.
        first: String,
        /// Second definition name.
        second: String,
    },

    /// Definition whose module name clashes with a file the generator owns.
    #[error("definition '{name}' maps to reserved module '{module}'")]
    ReservedModuleName {
        /// Definition name.
        name: String,
        /// Module name.
        module: String,
    },

    /// Reference cycle between definitions.
    #[error("circular definition reference detected: {path}")]
    CyclicReference {
        /// Path of the circular reference.
        path: String,
    },
}

impl SchemaError {
    /// Creates a malformed definition error.
    pub fn malformed_definition(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedDefinition {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an unrecognized attribute shape error.
    pub fn unrecognized_shape(context: impl Into<String>, keys: impl Into<String>) -> Self {
        Self::UnrecognizedAttributeShape {
            context: context.into(),
            keys: keys.into(),
        }
    }

    /// Creates a malformed attribute error.
    pub fn malformed_attr(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedAttribute {
            context: context.into(),
            message: message.into(),
        }
    }
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
