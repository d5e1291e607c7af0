//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading, validation or resolution error.
    #[error("schema error: {0}")]
    Schema(#[from] traitgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },

    /// Name that cannot be used as a Python identifier.
    #[error("'{name}' in '{context}' is not a valid Python identifier")]
    InvalidIdentifier {
        /// Offending name.
        name: String,
        /// Definition or property location.
        context: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    #[must_use]
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}
