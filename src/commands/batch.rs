//! `repogen batch` — generate snippets for every entity listed in repogen.yaml

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::generate::{plan_snippet, warn_if_marker_only, write_planned};
use super::{BatchArgs, selected_kinds};
use crate::codegen::names::DerivedNames;
use crate::codegen::snippets;
use crate::config::{self, CONFIG_FILE_NAME};
use crate::templates::TemplateEngine;
use crate::utils::file_writer::{FileWriter, PlannedFile};
use crate::utils::output;

pub fn run(args: BatchArgs, writer: &dyn FileWriter) -> Result<()> {
    let config_path = match args.config {
        Some(path) => path,
        None => locate_config(&std::env::current_dir()?)?,
    };
    let config = config::load_config(&config_path)?;

    if config.entities.is_empty() {
        bail!(
            "No entities listed in {}. Add names under 'entities:' first.",
            config_path.display()
        );
    }

    // Validate every entry before anything is written
    let all_names = derive_all(&config.entities)
        .with_context(|| format!("Invalid entity list in {}", config_path.display()))?;

    let out_dir = match args.out {
        Some(dir) => dir,
        None => config_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(&config.output_dir),
    };
    let kinds = selected_kinds(&config.snippets);

    if writer.is_dry_run() {
        output::print_step("Dry run — no files will be written");
    }
    output::print_step(&format!(
        "Generating snippets for {} entities...",
        all_names.len()
    ));

    let engine = TemplateEngine::new()?;
    let mut files: Vec<PlannedFile> = Vec::with_capacity(all_names.len() * kinds.len());

    for names in &all_names {
        output::print_info(&format!(
            "{} -> {} / {}",
            &names.entity_name, &names.canonical_name, &names.plural_name
        ));
        warn_if_marker_only(names);
        for &kind in &kinds {
            let content = snippets::generate(&engine, kind, names)?;
            files.push(plan_snippet(&out_dir, kind, names, &content));
        }
    }

    // Every entity's files are checked before the first one is written
    writer.create_dir_all(&out_dir)?;
    write_planned(writer, &files)?;

    if !writer.is_dry_run() {
        output::print_success(&format!(
            "Generated {} file(s) for {} entities in {}",
            files.len(),
            all_names.len(),
            out_dir.display()
        ));
    }

    Ok(())
}

fn locate_config(start: &Path) -> Result<PathBuf> {
    match config::find_config_root_from(start) {
        Some(root) => Ok(root.join(CONFIG_FILE_NAME)),
        None => bail!(
            "No {} found in {} or any parent directory.\n\
             Run 'repogen init' to create one, or pass --config <path>.",
            CONFIG_FILE_NAME,
            start.display()
        ),
    }
}

/// Derive names for every entity, rejecting blank entries and entries whose
/// canonical names collide (they would write the same files). Names differing
/// only in case collide too: case-insensitive filesystems map them to one file.
fn derive_all(entities: &[String]) -> Result<Vec<DerivedNames>> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut all_names = Vec::with_capacity(entities.len());

    for (i, entity) in entities.iter().enumerate() {
        let names = DerivedNames::derive(entity)
            .with_context(|| format!("Entity #{} ('{}')", i + 1, entity))?;

        let key = names.canonical_name.to_ascii_lowercase();
        if let Some(previous) = seen.insert(key, entity) {
            bail!(
                "Entities '{}' and '{}' both generate snippets for '{}'",
                previous,
                entity,
                names.canonical_name
            );
        }
        all_names.push(names);
    }

    Ok(all_names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::utils::file_writer::RealWriter;
    use tempfile::TempDir;

    fn write_config(dir: &Path, config: &GeneratorConfig) -> PathBuf {
        let path = dir.join(CONFIG_FILE_NAME);
        config::save_config(&path, config, &RealWriter { overwrite: false }).unwrap();
        path
    }

    fn entities(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_derive_all_valid() {
        let names = derive_all(&entities(&["CampaignAttribute", "Ref_Product"])).unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(names[1].canonical_name, "Product");
    }

    #[test]
    fn test_derive_all_rejects_blank_entry() {
        let err = derive_all(&entities(&["Product", "  "])).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Entity #2"));
        assert!(message.contains("must not be empty"));
    }

    #[test]
    fn test_derive_all_rejects_canonical_collision() {
        let err = derive_all(&entities(&["Product", "Ref_Product"])).unwrap_err();
        assert!(err.to_string().contains("both generate snippets for 'Product'"));
    }

    #[test]
    fn test_derive_all_rejects_case_only_collision() {
        let err = derive_all(&entities(&["Product", "ref_product"])).unwrap_err();
        assert!(err.to_string().contains("Entities 'Product' and 'ref_product'"));
    }

    #[test]
    fn test_batch_existing_target_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let config = GeneratorConfig {
            entities: entities(&["Category", "Product"]),
            ..GeneratorConfig::default()
        };
        let path = write_config(tmp.path(), &config);
        let out = tmp.path().join("generated");
        std::fs::create_dir_all(&out).unwrap();
        std::fs::write(out.join("ProductService.ts"), "original").unwrap();

        let args = BatchArgs {
            config: Some(path),
            out: None,
            force: false,
        };
        let err = run(args, &RealWriter { overwrite: false }).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        let files: Vec<_> = std::fs::read_dir(&out).unwrap().collect();
        assert_eq!(files.len(), 1, "only the pre-existing file should remain");
        assert!(!out.join("CategoryRepository.ts").exists());
    }

    #[test]
    fn test_batch_writes_files_next_to_config() {
        let tmp = TempDir::new().unwrap();
        let config = GeneratorConfig {
            entities: entities(&["CampaignAttribute", "Ref_Product"]),
            ..GeneratorConfig::default()
        };
        let path = write_config(tmp.path(), &config);

        let args = BatchArgs {
            config: Some(path),
            out: None,
            force: false,
        };
        run(args, &RealWriter { overwrite: false }).unwrap();

        let out = tmp.path().join("generated");
        assert!(out.join("ICampaignAttributeRepository.ts").exists());
        assert!(out.join("CampaignAttributeService.ts").exists());
        assert!(out.join("IProductService.ts").exists());
        assert!(out.join("ProductRepository.ts").exists());
    }

    #[test]
    fn test_batch_invalid_entry_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let config = GeneratorConfig {
            entities: entities(&["Product", ""]),
            ..GeneratorConfig::default()
        };
        let path = write_config(tmp.path(), &config);

        let args = BatchArgs {
            config: Some(path),
            out: None,
            force: false,
        };
        assert!(run(args, &RealWriter { overwrite: false }).is_err());
        assert!(!tmp.path().join("generated").exists());
    }

    #[test]
    fn test_locate_config_missing() {
        let tmp = TempDir::new().unwrap();
        let err = locate_config(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("No repogen.yaml found"));
    }
}
