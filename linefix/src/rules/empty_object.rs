use super::patterns::{apply_all, SubPattern};
use super::{Category, Rule};
use crate::constants::{
    get_annotation_empty_object_re, get_generic_empty_object_re, UNKNOWN_TYPE,
};

/// Replaces the empty object type `{}` with `unknown`, both as an
/// annotation and as a type argument. Every occurrence is rewritten.
pub struct EmptyObjectRule;

impl EmptyObjectRule {
    fn sub_patterns() -> [SubPattern; 2] {
        [
            SubPattern::from_regex(
                get_annotation_empty_object_re(),
                format!(": {UNKNOWN_TYPE}"),
            ),
            SubPattern::from_regex(get_generic_empty_object_re(), format!("<{UNKNOWN_TYPE}>")),
        ]
    }
}

impl Rule for EmptyObjectRule {
    fn name(&self) -> &'static str {
        "EmptyObjectRule"
    }

    fn category(&self) -> Category {
        Category::EmptyObject
    }

    fn rewrite(&self, line: &str, _detail: Option<&str>) -> Option<String> {
        apply_all(line, &Self::sub_patterns())
    }
}
