//! Utility functions shared by the commands.

mod paths;

pub use paths::{normalize_display_path, validate_path_within_root};
