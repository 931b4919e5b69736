use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.linefix.toml):
  Create this file in your project root to set defaults.

  [linefix]
  root = \".\"                 # Directory catalog paths are relative to
  catalog = \"lint-fixes.toml\" # Catalog of diagnostics (.toml or .json)
  dry_run = false            # Report rewrites without writing files
  verbose = false            # Print per-entry diagnostics to stderr
  param_name = \"request\"     # Parameter renamed by unused_param entries without detail

CATALOG ENTRY:
  [[fix]]
  file = \"src/app/api/admin/maintenance/route.ts\"
  line = 156
  category = \"unused_param\"   # unused_param | unused_var | explicit_any | empty_object | unused_import
  detail = \"request\"
";

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "linefix - Silence catalogued lint diagnostics with line-local rewrites",
    long_about = None,
    args_conflicts_with_subcommands = true,
    after_help = CONFIG_HELP
)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are legitimately booleans
pub struct Cli {
    #[command(subcommand)]
    /// The subcommand to execute.
    pub command: Option<Commands>,

    /// Catalog file (.toml or .json).
    /// Defaults to the configured catalog, then `lint-fixes.toml` under the root.
    pub catalog: Option<PathBuf>,

    /// Directory catalog paths are relative to, and the containment
    /// boundary for rewritten files.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Show what would change without writing files.
    #[arg(long)]
    pub dry_run: bool,

    /// Output the run report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output for debugging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Parameter renamed by `unused_param` entries that carry no detail.
    #[arg(long)]
    pub param_name: Option<String>,
}

#[derive(Subcommand, Debug)]
/// Available subcommands.
pub enum Commands {
    /// Initialize linefix configuration.
    /// Creates `.linefix.toml` unless one already exists.
    Init {
        /// Directory to write the config file into (defaults to the current directory).
        path: Option<PathBuf>,
    },
}
