use std::cell::RefCell;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;

/// A rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Abstraction for file system operations, enabling dry-run mode.
pub trait FileWriter {
    /// Create a directory and all parent directories
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Write a generated file
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    /// Whether existing files may be replaced
    fn overwrite(&self) -> bool;

    /// Whether this is a dry-run (no actual writes)
    fn is_dry_run(&self) -> bool;

    /// Fail if `path` exists and overwriting is disabled.
    fn check_target(&self, path: &Path) -> Result<()> {
        if !self.overwrite() && path.exists() {
            bail!(
                "File '{}' already exists. Use --force to overwrite it.",
                path.display()
            );
        }
        Ok(())
    }

    /// Write every planned file, or none of them if any target is blocked.
    fn write_all(&self, files: &[PlannedFile]) -> Result<()> {
        for file in files {
            self.check_target(&file.path)?;
        }
        for file in files {
            self.write_file(&file.path, &file.content)?;
        }
        Ok(())
    }
}

/// Real file writer — actually writes to disk
pub struct RealWriter {
    /// Replace files that already exist instead of failing
    pub overwrite: bool,
}

impl FileWriter for RealWriter {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        self.check_target(path)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write: {}", path.display()))
    }

    fn overwrite(&self) -> bool {
        self.overwrite
    }

    fn is_dry_run(&self) -> bool {
        false
    }
}

/// Dry-run writer — reports what would happen without writing.
///
/// Applies the same overwrite rule as [`RealWriter`], so a dry run fails
/// exactly where the real run would.
pub struct DryRunWriter {
    overwrite: bool,
    files_created: RefCell<Vec<PathBuf>>,
    files_replaced: RefCell<Vec<PathBuf>>,
}

impl DryRunWriter {
    pub fn new(overwrite: bool) -> Self {
        Self {
            overwrite,
            files_created: RefCell::new(Vec::new()),
            files_replaced: RefCell::new(Vec::new()),
        }
    }

    /// Print summary of what would be done
    pub fn print_summary(&self) {
        let created = self.files_created.borrow();
        let replaced = self.files_replaced.borrow();

        println!();
        if !created.is_empty() {
            println!(
                "  {} file(s) would be created",
                created.len().to_string().bold()
            );
        }
        if !replaced.is_empty() {
            println!(
                "  {} file(s) would be replaced",
                replaced.len().to_string().bold()
            );
        }
        if created.is_empty() && replaced.is_empty() {
            println!("  {}", "No changes would be made".dimmed());
        }
    }
}

impl FileWriter for DryRunWriter {
    fn create_dir_all(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, _content: &str) -> Result<()> {
        self.check_target(path)?;
        if path.exists() {
            println!("  {} {}", "Would replace:".yellow(), path.display());
            self.files_replaced.borrow_mut().push(path.to_path_buf());
        } else {
            println!("  {} {}", "Would create:".cyan(), path.display());
            self.files_created.borrow_mut().push(path.to_path_buf());
        }
        Ok(())
    }

    fn overwrite(&self) -> bool {
        self.overwrite
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}
