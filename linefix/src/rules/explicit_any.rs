use super::patterns::{apply_all, SubPattern};
use super::{Category, Rule};
use crate::constants::{get_annotation_any_re, get_cast_any_re, get_generic_any_re, UNKNOWN_TYPE};

/// Replaces explicit `any` with `unknown` in annotations, type arguments
/// and casts. Unlike the renaming rules, every sub-pattern is applied and
/// every occurrence on the line is rewritten.
pub struct ExplicitAnyRule;

impl ExplicitAnyRule {
    fn sub_patterns() -> [SubPattern; 3] {
        [
            SubPattern::from_regex(get_annotation_any_re(), format!(": {UNKNOWN_TYPE}")),
            SubPattern::from_regex(get_generic_any_re(), format!("<{UNKNOWN_TYPE}>")),
            SubPattern::from_regex(get_cast_any_re(), format!("as {UNKNOWN_TYPE}")),
        ]
    }
}

impl Rule for ExplicitAnyRule {
    fn name(&self) -> &'static str {
        "ExplicitAnyRule"
    }

    fn category(&self) -> Category {
        Category::ExplicitAny
    }

    fn rewrite(&self, line: &str, _detail: Option<&str>) -> Option<String> {
        apply_all(line, &Self::sub_patterns())
    }
}
