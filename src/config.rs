use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::codegen::snippets::SnippetKind;
use crate::utils::file_writer::FileWriter;

/// File name looked up when no explicit config path is given.
pub const CONFIG_FILE_NAME: &str = "repogen.yaml";

/// Batch generation settings, stored in `repogen.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    /// Directory the snippets are written to, relative to the config file
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Snippet kinds to generate for every entity
    #[serde(default = "default_snippets")]
    pub snippets: Vec<SnippetKind>,

    /// Entity names, as they would be passed to `repogen generate`
    #[serde(default)]
    pub entities: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            snippets: default_snippets(),
            entities: Vec::new(),
        }
    }
}

fn default_output_dir() -> String {
    "generated".to_string()
}

fn default_snippets() -> Vec<SnippetKind> {
    SnippetKind::ALL.to_vec()
}

/// Load a generator configuration from a `repogen.yaml` file.
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: GeneratorConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(config)
}

/// Save a generator configuration to a `repogen.yaml` file.
pub fn save_config(path: &Path, config: &GeneratorConfig, writer: &dyn FileWriter) -> Result<()> {
    let content = serde_yaml::to_string(config).with_context(|| "Failed to serialize config")?;
    writer
        .write_file(path, &content)
        .with_context(|| format!("Failed to write config: {}", path.display()))
}

/// Find the directory holding `repogen.yaml`, walking up from `start`.
pub fn find_config_root_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE_NAME).exists() {
            return Some(current);
        }

        if !current.pop() {
            break;
        }
    }

    None
}
