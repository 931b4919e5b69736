use super::patterns::{first_match, ident, SubPattern, IDENT_BEFORE};
use super::{Category, Rule};
use crate::constants::SENTINEL_PREFIX;

/// Renames an unused parameter to its sentinel-prefixed form.
///
/// The parameter is the entry's detail, or the configured default name
/// (`request` unless overridden) when the entry carries none.
pub struct UnusedParamRule {
    default_name: String,
}

impl UnusedParamRule {
    /// Creates the rule with the name used for entries without detail.
    pub fn new(default_name: impl Into<String>) -> Self {
        Self {
            default_name: default_name.into(),
        }
    }

    fn sub_patterns(name: &str) -> Vec<SubPattern> {
        let id = ident(name);
        let renamed = format!("{SENTINEL_PREFIX}{name}");
        [
            (format!(r"{IDENT_BEFORE}(?P<target>{id}\s*:)"), format!("{renamed}:")),
            (format!(r"{IDENT_BEFORE}(?P<target>{id}\s*\))"), format!("{renamed})")),
            (format!(r"{IDENT_BEFORE}(?P<target>{id}\s*,)"), format!("{renamed},")),
        ]
        .into_iter()
        .filter_map(|(pattern, replacement)| SubPattern::new(&pattern, replacement))
        .collect()
    }
}

impl Rule for UnusedParamRule {
    fn name(&self) -> &'static str {
        "UnusedParamRule"
    }

    fn category(&self) -> Category {
        Category::UnusedParam
    }

    fn rewrite(&self, line: &str, detail: Option<&str>) -> Option<String> {
        let name = detail.unwrap_or(&self.default_name);
        if name.is_empty() {
            return None;
        }
        first_match(line, &Self::sub_patterns(name))
    }
}
