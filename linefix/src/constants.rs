//! Shared constants and cached regex patterns.

use regex::Regex;
use std::sync::OnceLock;

/// Name of the project configuration file.
pub const CONFIG_FILENAME: &str = ".linefix.toml";

/// Catalog file looked up under the root when none is given.
pub const DEFAULT_CATALOG_FILENAME: &str = "lint-fixes.toml";

/// Prefix that marks an identifier as intentionally unused.
pub const SENTINEL_PREFIX: &str = "_";

/// Parameter renamed by `unused_param` entries that carry no detail.
pub const DEFAULT_PARAM_NAME: &str = "request";

/// Type that replaces `any` and `{}` annotations.
pub const UNKNOWN_TYPE: &str = "unknown";

/// Regex for `: any` type annotations.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_annotation_any_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r":\s*any\b").expect("Invalid annotation any regex pattern"))
}

/// Regex for `<any>` type arguments.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_generic_any_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"<any>").expect("Invalid generic any regex pattern"))
}

/// Regex for `as any` casts.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_cast_any_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"\bas\s+any\b").expect("Invalid cast any regex pattern"))
}

/// Regex for `: {}` type annotations, whitespace inside the braces allowed.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_annotation_empty_object_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r":\s*\{\s*\}").expect("Invalid annotation empty object regex pattern")
    })
}

/// Regex for `<{}>` type arguments.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_generic_empty_object_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"<\{\s*\}>").expect("Invalid generic empty object regex pattern")
    })
}

/// Regexes that tidy an import list after a name was removed, in the order
/// they run: doubled commas, comma after `{`, comma before `}`. Whitespace
/// next to a stripped brace comma is kept.
///
/// # Panics
///
/// Panics if any of the regex patterns is invalid.
pub fn get_import_cleanup_res() -> &'static [(Regex, &'static str); 3] {
    static RES: OnceLock<[(Regex, &'static str); 3]> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RES.get_or_init(|| {
        [
            (
                Regex::new(r",\s*,").expect("Invalid doubled comma regex pattern"),
                ",",
            ),
            (
                Regex::new(r"\{(\s*),").expect("Invalid leading comma regex pattern"),
                "{${1}",
            ),
            (
                Regex::new(r",(\s*)\}").expect("Invalid trailing comma regex pattern"),
                "${1}}",
            ),
        ]
    })
}

/// Regex for an emptied brace list that follows a default import,
/// as in `import React, { } from 'react'`.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_empty_named_imports_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"\s*,\s*\{\s*\}").expect("Invalid empty named imports regex pattern")
    })
}
