//! Derivation of every name variant a snippet template needs from one entity name.

use serde::Serialize;

use crate::errors::ValidationError;
use crate::utils::naming;

/// All naming variants derived from a single entity name.
///
/// Field names double as the placeholder names exposed to the snippet templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedNames {
    /// The entity type name as supplied (trimmed, marker kept)
    pub entity_name: String,
    /// Entity name with the `Ref_` marker removed
    pub canonical_name: String,
    pub plural_name: String,
    /// lowerCamelCase form, used for parameter names
    pub camel_name: String,
    /// Space-separated lower-case singular, used in doc comments
    pub doc_singular: String,
    /// Space-separated lower-case plural, used in doc comments
    pub doc_plural: String,
}

impl DerivedNames {
    /// Validate `raw` and derive all name variants from it.
    pub fn derive(raw: &str) -> Result<Self, ValidationError> {
        let entity_name = raw.trim();
        if entity_name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let canonical_name = naming::normalize(entity_name);
        let plural_name = naming::pluralize(&canonical_name);
        let camel_name = naming::to_camel_case(&canonical_name);
        let doc_singular = naming::to_spaced_lower(&canonical_name);
        let doc_plural = naming::to_spaced_lower(&plural_name);

        Ok(Self {
            entity_name: entity_name.to_string(),
            canonical_name,
            plural_name,
            camel_name,
            doc_singular,
            doc_plural,
        })
    }

    /// Build the template context holding every placeholder value.
    pub fn to_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        context.insert("entity_name", &self.entity_name);
        context.insert("canonical_name", &self.canonical_name);
        context.insert("plural_name", &self.plural_name);
        context.insert("camel_name", &self.camel_name);
        context.insert("doc_singular", &self.doc_singular);
        context.insert("doc_plural", &self.doc_plural);
        context
    }
}
