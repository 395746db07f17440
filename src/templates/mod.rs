use anyhow::{Context, Result};
use tera::Tera;

use crate::errors::GenerateError;

// ============================================================================
// Snippet Templates
// ============================================================================

const TPL_REPOSITORY_INTERFACE: &str = include_str!("snippets/repository_interface.ts.tera");
const TPL_REPOSITORY: &str = include_str!("snippets/repository.ts.tera");
const TPL_SERVICE_INTERFACE: &str = include_str!("snippets/service_interface.ts.tera");
const TPL_SERVICE: &str = include_str!("snippets/service.ts.tera");

pub const REPOSITORY_INTERFACE: &str = "snippets/repository_interface.ts";
pub const REPOSITORY: &str = "snippets/repository.ts";
pub const SERVICE_INTERFACE: &str = "snippets/service_interface.ts";
pub const SERVICE: &str = "snippets/service.ts";

/// Compiled snippet templates. Immutable once built, so one engine can
/// serve any number of independent render calls.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        let templates: [(&str, &str); 4] = [
            (REPOSITORY_INTERFACE, TPL_REPOSITORY_INTERFACE),
            (REPOSITORY, TPL_REPOSITORY),
            (SERVICE_INTERFACE, TPL_SERVICE_INTERFACE),
            (SERVICE, TPL_SERVICE),
        ];

        for (name, content) in &templates {
            tera.add_raw_template(name, content)
                .with_context(|| format!("Failed to register template: {}", name))?;
        }

        Ok(Self { tera })
    }

    pub fn render(
        &self,
        template_name: &str,
        context: &tera::Context,
    ) -> Result<String, GenerateError> {
        self.tera
            .render(template_name, context)
            .map_err(|source| GenerateError::Render {
                template: template_name.to_string(),
                source,
            })
    }
}
