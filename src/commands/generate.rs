//! `repogen generate <name>` — render the four snippets for one entity

use std::path::Path;

use anyhow::Result;

use super::{GenerateArgs, selected_kinds};
use crate::codegen::names::DerivedNames;
use crate::codegen::snippets::{self, SnippetKind};
use crate::templates::TemplateEngine;
use crate::utils::file_writer::{FileWriter, PlannedFile};
use crate::utils::{naming, output};

pub fn run(args: GenerateArgs, writer: &dyn FileWriter) -> Result<()> {
    let engine = TemplateEngine::new()?;
    let generated = snippets::generate_all(&engine, &args.name)?;
    let kinds = selected_kinds(&args.only);

    let Some(out_dir) = args.out else {
        print_snippets(&generated, &kinds);
        return Ok(());
    };

    if writer.is_dry_run() {
        output::print_step("Dry run — no files will be written");
    }
    output::print_step(&format!(
        "Generating snippets for '{}'...",
        &generated.names.entity_name
    ));

    warn_if_marker_only(&generated.names);

    let files: Vec<PlannedFile> = kinds
        .iter()
        .map(|&kind| plan_snippet(&out_dir, kind, &generated.names, generated.get(kind)))
        .collect();

    writer.create_dir_all(&out_dir)?;
    write_planned(writer, &files)?;

    if !writer.is_dry_run() {
        output::print_success(&format!(
            "Generated {} snippet(s) for '{}' in {}",
            kinds.len(),
            &generated.names.canonical_name,
            out_dir.display()
        ));
    }

    Ok(())
}

/// Print the selected snippets to stdout, each under a comment header.
fn print_snippets(generated: &snippets::Snippets, kinds: &[SnippetKind]) {
    for (i, &kind) in kinds.iter().enumerate() {
        if i > 0 {
            println!();
        }
        output::print_snippet_header(
            &kind.to_string(),
            &kind.file_name(&generated.names.canonical_name),
        );
        print!("{}", generated.get(kind));
    }
}

/// Warn when the input was nothing but the `Ref_` marker.
pub fn warn_if_marker_only(names: &DerivedNames) {
    if names.canonical_name.is_empty() {
        output::print_warn(&format!(
            "'{}' has nothing after the {} marker — generated names will be empty",
            &names.entity_name,
            naming::REF_MARKER
        ));
    }
}

/// Place one rendered snippet in `dir` under its conventional file name.
pub fn plan_snippet(
    dir: &Path,
    kind: SnippetKind,
    names: &DerivedNames,
    content: &str,
) -> PlannedFile {
    PlannedFile {
        path: dir.join(kind.file_name(&names.canonical_name)),
        content: content.to_string(),
    }
}

/// Write all planned snippets; nothing is written if any target is blocked.
pub fn write_planned(writer: &dyn FileWriter, files: &[PlannedFile]) -> Result<()> {
    writer.write_all(files)?;
    if !writer.is_dry_run() {
        for file in files {
            output::print_file_created(&file.path);
        }
    }
    Ok(())
}
