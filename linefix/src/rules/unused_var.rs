use super::patterns::{first_match, ident, SubPattern, IDENT_AFTER, IDENT_BEFORE};
use super::{Category, Rule};
use crate::constants::SENTINEL_PREFIX;

/// Prefixes an unused binding named by the entry's detail.
///
/// Sub-patterns, tried in order: `const x`, `let x`, `x:`, `x)`, `x,`,
/// `= x`. Declaration keywords are kept; only the identifier is renamed.
pub struct UnusedVarRule;

impl UnusedVarRule {
    fn sub_patterns(name: &str) -> Vec<SubPattern> {
        let id = ident(name);
        let renamed = format!("{SENTINEL_PREFIX}{name}");
        [
            (
                format!(r"(?P<target>\bconst\s+{id}){IDENT_AFTER}"),
                format!("const {renamed}"),
            ),
            (
                format!(r"(?P<target>\blet\s+{id}){IDENT_AFTER}"),
                format!("let {renamed}"),
            ),
            (format!(r"{IDENT_BEFORE}(?P<target>{id}\s*:)"), format!("{renamed}:")),
            (format!(r"{IDENT_BEFORE}(?P<target>{id}\s*\))"), format!("{renamed})")),
            (format!(r"{IDENT_BEFORE}(?P<target>{id}\s*,)"), format!("{renamed},")),
            (
                format!(r"(?P<target>=\s*{id}){IDENT_AFTER}"),
                format!("= {renamed}"),
            ),
        ]
        .into_iter()
        .filter_map(|(pattern, replacement)| SubPattern::new(&pattern, replacement))
        .collect()
    }
}

impl Rule for UnusedVarRule {
    fn name(&self) -> &'static str {
        "UnusedVarRule"
    }

    fn category(&self) -> Category {
        Category::UnusedVar
    }

    fn rewrite(&self, line: &str, detail: Option<&str>) -> Option<String> {
        let name = detail.filter(|name| !name.is_empty())?;
        first_match(line, &Self::sub_patterns(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(line: &str, name: &str) -> Option<String> {
        UnusedVarRule.rewrite(line, Some(name))
    }

    #[test]
    fn test_const_declaration() {
        assert_eq!(
            fix("const data = fetch();", "data").as_deref(),
            Some("const _data = fetch();")
        );
    }

    #[test]
    fn test_let_declaration() {
        assert_eq!(
            fix("  let   count = 0;", "count").as_deref(),
            Some("  let _count = 0;")
        );
    }

    #[test]
    fn test_destructured_binding() {
        assert_eq!(
            fix("const { data, error } = await query;", "data").as_deref(),
            Some("const { _data, error } = await query;")
        );
    }

    #[test]
    fn test_annotation_form() {
        assert_eq!(
            fix("function f(options: Options) {", "options").as_deref(),
            Some("function f(_options: Options) {")
        );
    }

    #[test]
    fn test_closing_paren_form() {
        assert_eq!(
            fix("items.map((item) => 1);", "item").as_deref(),
            Some("items.map((_item) => 1);")
        );
    }

    #[test]
    fn test_comma_form() {
        assert_eq!(
            fix("const [first, second] = pair;", "first").as_deref(),
            Some("const [_first, second] = pair;")
        );
    }

    #[test]
    fn test_assignment_form() {
        assert_eq!(
            fix("result = data;", "data").as_deref(),
            Some("result = _data;")
        );
    }

    #[test]
    fn test_declaration_wins_over_annotation() {
        assert_eq!(
            fix("const data: Data = load(data);", "data").as_deref(),
            Some("const _data: Data = load(data);")
        );
    }

    #[test]
    fn test_paren_form_tried_before_comma_form() {
        assert_eq!(
            fix("f(data, data)", "data").as_deref(),
            Some("f(data, _data)")
        );
    }

    #[test]
    fn test_only_first_occurrence_of_winning_pattern() {
        assert_eq!(
            fix("a(data) + b(data)", "data").as_deref(),
            Some("a(_data) + b(data)")
        );
    }

    #[test]
    fn test_idempotent() {
        let once = fix("const data = fetch();", "data").unwrap();
        assert_eq!(fix(&once, "data"), None);
    }

    #[test]
    fn test_prefix_of_longer_name_is_ignored() {
        assert_eq!(fix("const database = open();", "data"), None);
    }

    #[test]
    fn test_dollar_identifier() {
        assert_eq!(
            fix("let $el = null;", "$el").as_deref(),
            Some("let _$el = null;")
        );
        assert_eq!(
            fix("items.map(($el) => 1)", "$el").as_deref(),
            Some("items.map((_$el) => 1)")
        );
        assert_eq!(
            fix("const [a, $el, b] = t;", "$el").as_deref(),
            Some("const [a, _$el, b] = t;")
        );
    }

    #[test]
    fn test_dollar_does_not_continue_a_plain_name() {
        assert_eq!(fix("const $data = 1;", "data"), None);
        assert_eq!(fix("const el$ = 1;", "el"), None);
    }

    #[test]
    fn test_missing_detail_is_no_match() {
        assert_eq!(UnusedVarRule.rewrite("const data = 1;", None), None);
        assert_eq!(UnusedVarRule.rewrite("const data = 1;", Some("")), None);
    }
}
