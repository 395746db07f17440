//! Error types for the snippet generation pipeline.

use thiserror::Error;

/// Rejected entity names. Raised once at the pipeline entry, before any derivation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Entity name must not be empty or whitespace")]
    EmptyName,
}

/// Errors that can occur while generating snippets
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to render template '{template}'")]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },
}
