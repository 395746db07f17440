//! Rendering of the repository and service snippets for an entity.

use serde::{Deserialize, Serialize};

use super::names::DerivedNames;
use crate::errors::GenerateError;
use crate::templates::{self, TemplateEngine};

/// The four snippets generated per entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SnippetKind {
    RepositoryInterface,
    Repository,
    ServiceInterface,
    Service,
}

impl SnippetKind {
    pub const ALL: [SnippetKind; 4] = [
        SnippetKind::RepositoryInterface,
        SnippetKind::Repository,
        SnippetKind::ServiceInterface,
        SnippetKind::Service,
    ];

    fn template_name(self) -> &'static str {
        match self {
            SnippetKind::RepositoryInterface => templates::REPOSITORY_INTERFACE,
            SnippetKind::Repository => templates::REPOSITORY,
            SnippetKind::ServiceInterface => templates::SERVICE_INTERFACE,
            SnippetKind::Service => templates::SERVICE,
        }
    }

    /// File name the snippet is written to, e.g. `IProductRepository.ts`
    pub fn file_name(self, canonical_name: &str) -> String {
        match self {
            SnippetKind::RepositoryInterface => format!("I{}Repository.ts", canonical_name),
            SnippetKind::Repository => format!("{}Repository.ts", canonical_name),
            SnippetKind::ServiceInterface => format!("I{}Service.ts", canonical_name),
            SnippetKind::Service => format!("{}Service.ts", canonical_name),
        }
    }
}

impl std::fmt::Display for SnippetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnippetKind::RepositoryInterface => write!(f, "repository-interface"),
            SnippetKind::Repository => write!(f, "repository"),
            SnippetKind::ServiceInterface => write!(f, "service-interface"),
            SnippetKind::Service => write!(f, "service"),
        }
    }
}

/// All four rendered snippets for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippets {
    pub names: DerivedNames,
    pub repository_interface: String,
    pub repository: String,
    pub service_interface: String,
    pub service: String,
}

impl Snippets {
    pub fn get(&self, kind: SnippetKind) -> &str {
        match kind {
            SnippetKind::RepositoryInterface => &self.repository_interface,
            SnippetKind::Repository => &self.repository,
            SnippetKind::ServiceInterface => &self.service_interface,
            SnippetKind::Service => &self.service,
        }
    }
}

/// Render a single snippet from already-derived names.
pub fn generate(
    engine: &TemplateEngine,
    kind: SnippetKind,
    names: &DerivedNames,
) -> Result<String, GenerateError> {
    engine.render(kind.template_name(), &names.to_context())
}

/// Validate `raw`, derive its names and render all four snippets.
///
/// Fails with a validation error before any rendering if `raw` is blank.
pub fn generate_all(engine: &TemplateEngine, raw: &str) -> Result<Snippets, GenerateError> {
    let names = DerivedNames::derive(raw)?;

    Ok(Snippets {
        repository_interface: generate(engine, SnippetKind::RepositoryInterface, &names)?,
        repository: generate(engine, SnippetKind::Repository, &names)?,
        service_interface: generate(engine, SnippetKind::ServiceInterface, &names)?,
        service: generate(engine, SnippetKind::Service, &names)?,
        names,
    })
}
