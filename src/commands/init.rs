use anyhow::{Result, bail};

use super::InitArgs;
use crate::config::{self, CONFIG_FILE_NAME, GeneratorConfig};
use crate::utils::file_writer::FileWriter;
use crate::utils::output;

pub fn run(args: InitArgs, writer: &dyn FileWriter) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        bail!(
            "'{}' already exists. Edit it directly or remove it first.",
            config_path.display()
        );
    }

    output::print_banner();
    output::print_step(&format!("Creating {}", config_path.display()));

    let config = GeneratorConfig {
        entities: vec!["CampaignAttribute".to_string(), "Ref_Product".to_string()],
        ..GeneratorConfig::default()
    };

    writer.create_dir_all(&args.path)?;
    config::save_config(&config_path, &config, writer)?;

    if writer.is_dry_run() {
        return Ok(());
    }

    output::print_file_created(&config_path);
    output::print_success(&format!("{} created!", CONFIG_FILE_NAME));
    output::print_next_steps(&[
        &format!("# List your entities under 'entities:' in {}", CONFIG_FILE_NAME),
        "repogen batch",
        &format!("# Snippets will be written to ./{}", config.output_dir),
    ]);

    Ok(())
}
