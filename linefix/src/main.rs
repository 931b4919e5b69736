//! Main binary entry point for the `linefix` patcher.
//!
//! This binary simply delegates to the shared `entry_point::run_with_args()` function
//! so it behaves exactly like the `linefix` binary from `linefix-cli`.

use anyhow::Result;

fn main() -> Result<()> {
    let code = linefix::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
