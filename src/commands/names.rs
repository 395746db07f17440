//! `repogen names <name>` — show every name derived from an entity name

use anyhow::{Context, Result};

use super::{NamesArgs, NamesFormat};
use crate::codegen::names::DerivedNames;

pub fn run(args: NamesArgs) -> Result<()> {
    let names = DerivedNames::derive(&args.name)?;
    print!("{}", render(&names, args.format)?);
    Ok(())
}

fn render(names: &DerivedNames, format: NamesFormat) -> Result<String> {
    let rendered = match format {
        NamesFormat::Text => {
            let rows = [
                ("entity name", &names.entity_name),
                ("canonical name", &names.canonical_name),
                ("plural name", &names.plural_name),
                ("camel name", &names.camel_name),
                ("doc singular", &names.doc_singular),
                ("doc plural", &names.doc_plural),
            ];
            rows.iter()
                .map(|(label, value)| format!("{:<16}{}\n", label, value))
                .collect::<String>()
        }
        NamesFormat::Json => {
            let mut json = serde_json::to_string_pretty(names)
                .with_context(|| "Failed to serialize names as JSON")?;
            json.push('\n');
            json
        }
        NamesFormat::Yaml => {
            serde_yaml::to_string(names).with_context(|| "Failed to serialize names as YAML")?
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let names = DerivedNames::derive("CampaignAttribute").unwrap();
        let text = render(&names, NamesFormat::Text).unwrap();
        assert!(text.contains("canonical name  CampaignAttribute\n"));
        assert!(text.contains("plural name     CampaignAttributes\n"));
        assert!(text.contains("doc plural      campaign attributes\n"));
    }

    #[test]
    fn test_render_json() {
        let names = DerivedNames::derive("Ref_Product").unwrap();
        let json = render(&names, NamesFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["entity_name"], "Ref_Product");
        assert_eq!(value["canonical_name"], "Product");
        assert_eq!(value["camel_name"], "product");
    }

    #[test]
    fn test_render_yaml() {
        let names = DerivedNames::derive("Category").unwrap();
        let yaml = render(&names, NamesFormat::Yaml).unwrap();
        assert!(yaml.contains("plural_name: Categories"));
        assert!(yaml.contains("doc_singular: category"));
    }
}
