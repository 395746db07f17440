use std::path::Path;

use colored::Colorize;

/// Print the repogen banner with the running version
pub fn print_banner() {
    let title = format!("repogen v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("  {}", title.cyan().bold());
    println!(
        "  {}",
        "repository + service snippets from one entity name".dimmed()
    );
    println!();
}

/// Print a step in progress
pub fn print_step(msg: &str) {
    println!("{} {}", "›".cyan().bold(), msg.bold());
}

/// Print a generated (or config) file path
pub fn print_file_created(path: &Path) {
    println!("  {} {}", "+".green(), path.display().to_string().dimmed());
}

pub fn print_success(msg: &str) {
    println!("{} {}", "✔".green().bold(), msg.green().bold());
}

/// Errors go to stderr so snippet output on stdout stays clean
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "error:".red().bold(), msg.red());
}

pub fn print_info(msg: &str) {
    println!("  {}", msg);
}

/// Warnings go to stderr as well
pub fn print_warn(msg: &str) {
    eprintln!("  {} {}", "warning:".yellow().bold(), msg.yellow());
}

/// Print the comment line separating snippets on stdout.
/// Kept as a plain `//` comment so the stream stays valid TypeScript.
pub fn print_snippet_header(kind: &str, file_name: &str) {
    println!("{}", format!("// ---- {} ({}) ----", kind, file_name).dimmed());
}

/// Print next steps instructions
pub fn print_next_steps(steps: &[&str]) {
    println!();
    println!("{}", "Next steps:".bold());
    for step in steps {
        println!("  {}", step);
    }
}
