use crate::catalog::Catalog;
use crate::cli::{Cli, Commands};
use crate::commands::{run_fix, run_init, run_init_in, FixOptions};
use crate::config::Config;
use crate::constants::{DEFAULT_CATALOG_FILENAME, DEFAULT_PARAM_NAME};

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Runs linefix with the given arguments, writing to stdout.
///
/// # Errors
///
/// Returns an error if writing output fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run linefix with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
/// Returns the process exit code: 0 once the catalog has been run (whatever
/// individual entries did), 1 when arguments, root or catalog are unusable.
///
/// # Errors
///
/// Returns an error if writing output fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["linefix".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    if let Some(Commands::Init { path }) = cli_var.command {
        match path {
            Some(dir) => run_init_in(&dir, writer)?,
            None => run_init(writer)?,
        }
        return Ok(0);
    }

    // Config is looked up from the root, the catalog, or the working directory
    let config = match cli_var.root.as_deref().or(cli_var.catalog.as_deref()) {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };

    let root = cli_var
        .root
        .clone()
        .or_else(|| config.root())
        .unwrap_or_else(|| PathBuf::from("."));
    let catalog_path = cli_var
        .catalog
        .clone()
        .or_else(|| config.catalog())
        .unwrap_or_else(|| root.join(DEFAULT_CATALOG_FILENAME));
    let options = FixOptions {
        root,
        dry_run: cli_var.dry_run || config.linefix.dry_run.unwrap_or(false),
        verbose: (cli_var.verbose || config.linefix.verbose.unwrap_or(false)) && !cli_var.json,
        param_name: cli_var
            .param_name
            .or_else(|| config.linefix.param_name.clone())
            .unwrap_or_else(|| DEFAULT_PARAM_NAME.to_owned()),
    };

    if options.verbose {
        eprintln!("[VERBOSE] linefix v{}", env!("CARGO_PKG_VERSION"));
        if let Some(path) = &config.config_file_path {
            eprintln!("[VERBOSE] Config: {}", path.display());
        }
        eprintln!("[VERBOSE] Root: {}", options.root.display());
        eprintln!("[VERBOSE] Catalog: {}", catalog_path.display());
        eprintln!("[VERBOSE] Default parameter: {}", options.param_name);
    }

    if !options.root.is_dir() {
        eprintln!(
            "Error: The root directory '{}' does not exist.",
            options.root.display()
        );
        return Ok(1);
    }
    if !catalog_path.exists() {
        eprintln!(
            "Error: The catalog '{}' does not exist.",
            catalog_path.display()
        );
        return Ok(1);
    }

    let catalog = match Catalog::load(&catalog_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return Ok(1);
        }
    };

    if options.verbose {
        eprintln!("[VERBOSE] Entries: {}", catalog.len());
        eprintln!();
    }

    if cli_var.json {
        let report = run_fix(&catalog, &options, std::io::sink())?;
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        run_fix(&catalog, &options, &mut *writer)?;
    }

    Ok(0)
}
