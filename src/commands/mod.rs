pub mod batch;
pub mod completions;
pub mod generate;
pub mod init;
pub mod names;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::codegen::snippets::SnippetKind;

/// repogen - scaffold repository and service snippets from an entity name
#[derive(Parser)]
#[command(name = "repogen", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Simulate operations without writing any files
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the repository and service snippets for one entity
    Generate(GenerateArgs),

    /// Show the names derived from an entity name
    Names(NamesArgs),

    /// Generate snippets for every entity listed in repogen.yaml
    Batch(BatchArgs),

    /// Create a starter repogen.yaml
    Init(InitArgs),

    /// Generate shell completions
    ///
    /// Example: repogen completions bash > ~/.local/share/bash-completion/completions/repogen
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Arguments for `repogen generate <name>`
#[derive(Parser)]
pub struct GenerateArgs {
    /// Entity name (PascalCase, optionally prefixed with "Ref_", e.g. "CampaignAttribute")
    pub name: String,

    /// Only generate the given snippet kinds (repeatable, default: all)
    #[arg(long, value_enum)]
    pub only: Vec<SnippetKind>,

    /// Write one file per snippet into this directory instead of printing to stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Overwrite files that already exist
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `repogen names <name>`
#[derive(Parser)]
pub struct NamesArgs {
    /// Entity name to inspect
    pub name: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = NamesFormat::Text)]
    pub format: NamesFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NamesFormat {
    Text,
    Json,
    Yaml,
}

/// Arguments for `repogen batch`
#[derive(Parser)]
pub struct BatchArgs {
    /// Path to the config file (default: repogen.yaml, searched upwards from the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory (overrides output_dir from the config)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Overwrite files that already exist
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `repogen init`
#[derive(Parser)]
pub struct InitArgs {
    /// Directory to create repogen.yaml in
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}

/// Normalize a snippet selection: empty means all, order follows `SnippetKind::ALL`.
pub fn selected_kinds(only: &[SnippetKind]) -> Vec<SnippetKind> {
    if only.is_empty() {
        return SnippetKind::ALL.to_vec();
    }
    let mut kinds = only.to_vec();
    kinds.sort();
    kinds.dedup();
    kinds
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_selected_kinds_defaults_to_all() {
        assert_eq!(selected_kinds(&[]), SnippetKind::ALL.to_vec());
    }

    #[test]
    fn test_selected_kinds_ordered_and_deduplicated() {
        let kinds = selected_kinds(&[
            SnippetKind::Service,
            SnippetKind::RepositoryInterface,
            SnippetKind::Service,
        ]);
        assert_eq!(
            kinds,
            vec![SnippetKind::RepositoryInterface, SnippetKind::Service]
        );
    }

    #[test]
    fn test_parse_generate_only() {
        let cli = Cli::try_parse_from([
            "repogen",
            "generate",
            "Product",
            "--only",
            "service",
            "--only",
            "repository-interface",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.name, "Product");
                assert_eq!(
                    args.only,
                    vec![SnippetKind::Service, SnippetKind::RepositoryInterface]
                );
                assert!(args.out.is_none());
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_parse_global_dry_run_after_subcommand() {
        let cli = Cli::try_parse_from(["repogen", "batch", "--dry-run"]).unwrap();
        assert!(cli.dry_run);
    }
}
