use crate::constants::CONFIG_FILENAME;

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Default `.linefix.toml` written by `linefix init`.
const DEFAULT_CONFIG: &str = r#"
[linefix]
# Directory catalog paths are relative to (defaults to the current directory)
# root = "."

# Catalog of diagnostics to silence (.toml or .json)
catalog = "lint-fixes.toml"

dry_run = false            # Report rewrites without writing files
verbose = false            # Print per-entry diagnostics to stderr
param_name = "request"     # Parameter renamed by unused_param entries without detail
"#;

/// Executes the init command in the current directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined or the
/// config file cannot be written.
pub fn run_init<W: Write>(writer: &mut W) -> Result<()> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    run_init_in(&current_dir, writer)
}

/// Executes the init command in a specific directory.
///
/// # Errors
///
/// Returns an error if the config file cannot be written.
pub fn run_init_in<W: Write>(root: &Path, writer: &mut W) -> Result<()> {
    writeln!(writer, "Initializing linefix configuration...")?;

    let config_path = root.join(CONFIG_FILENAME);
    if config_path.exists() {
        writeln!(writer, "  • {CONFIG_FILENAME} already exists - skipping.")?;
        return Ok(());
    }

    let mut file = fs::File::create(&config_path)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    writeln!(file, "{}", DEFAULT_CONFIG.trim())?;
    writeln!(
        writer,
        "  • Created {CONFIG_FILENAME} with default configuration."
    )?;

    writeln!(writer, "Initialization complete!")?;
    Ok(())
}
