mod codegen;
mod commands;
mod config;
mod errors;
mod templates;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Cli, Commands};
use utils::file_writer::{DryRunWriter, FileWriter, RealWriter};
use utils::output;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let dry_run = cli.dry_run;

    match cli.command {
        Commands::Generate(args) => {
            let overwrite = args.force;
            with_writer(dry_run, overwrite, |w| commands::generate::run(args, w))
        }
        Commands::Names(args) => commands::names::run(args),
        Commands::Batch(args) => {
            let overwrite = args.force;
            with_writer(dry_run, overwrite, |w| commands::batch::run(args, w))
        }
        Commands::Init(args) => with_writer(dry_run, false, |w| commands::init::run(args, w)),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

/// Run a file-producing command against the real or dry-run writer.
fn with_writer(
    dry_run: bool,
    overwrite: bool,
    command: impl FnOnce(&dyn FileWriter) -> Result<()>,
) -> Result<()> {
    if dry_run {
        let writer = DryRunWriter::new(overwrite);
        command(&writer)?;
        writer.print_summary();
        Ok(())
    } else {
        command(&RealWriter { overwrite })
    }
}
