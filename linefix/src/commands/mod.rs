//! Commands module - CLI subcommand implementations.

mod fix;
mod init;

pub use fix::{run_fix, EntryResult, EntryStatus, FixOptions, FixReport};
pub use init::{run_init, run_init_in};
