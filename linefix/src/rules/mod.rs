use crate::constants::DEFAULT_PARAM_NAME;
use crate::document::Document;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lint category a catalog entry asks to silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Unused function parameter.
    UnusedParam,
    /// Unused local binding.
    UnusedVar,
    /// Explicit `any` type.
    ExplicitAny,
    /// Empty object type `{}`.
    EmptyObject,
    /// Unused named import.
    UnusedImport,
}

impl Category {
    /// All categories in a fixed order.
    pub const ALL: [Category; 5] = [
        Category::UnusedParam,
        Category::UnusedVar,
        Category::ExplicitAny,
        Category::EmptyObject,
        Category::UnusedImport,
    ];

    /// Catalog spelling of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::UnusedParam => "unused_param",
            Category::UnusedVar => "unused_var",
            Category::ExplicitAny => "explicit_any",
            Category::EmptyObject => "empty_object",
            Category::UnusedImport => "unused_import",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a category name that is not one of [`Category::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// A rewrite rule for one lint category.
pub trait Rule: Send + Sync {
    /// Returns the descriptive name of the rule.
    fn name(&self) -> &'static str;
    /// Returns the category this rule silences.
    fn category(&self) -> Category;
    /// Rewrites `line`, or returns `None` when none of the rule's
    /// sub-patterns match.
    fn rewrite(&self, line: &str, detail: Option<&str>) -> Option<String>;
}

/// What [`RewriteEngine::apply`] did to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The targeted line was rewritten.
    Applied {
        /// Line text before the rewrite.
        before: String,
        /// Line text after the rewrite.
        after: String,
    },
    /// No sub-pattern matched, or the rewrite produced the same text.
    Unchanged,
    /// The line number does not exist in the document.
    OutOfBounds,
}

impl Outcome {
    /// Whether the document was modified.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied { .. })
    }
}

/// Dispatches catalog entries to the rule for their category.
pub struct RewriteEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RewriteEngine {
    /// Builds the engine with the five built-in rules. `param_name` is the
    /// parameter `unused_param` renames when an entry has no detail.
    #[must_use]
    pub fn new(param_name: impl Into<String>) -> Self {
        Self {
            rules: vec![
                Box::new(unused_param::UnusedParamRule::new(param_name)),
                Box::new(unused_var::UnusedVarRule),
                Box::new(explicit_any::ExplicitAnyRule),
                Box::new(empty_object::EmptyObjectRule),
                Box::new(unused_import::UnusedImportRule),
            ],
        }
    }

    /// Returns the rule registered for `category`.
    #[must_use]
    pub fn rule_for(&self, category: Category) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .find(|rule| rule.category() == category)
            .map(AsRef::as_ref)
    }

    /// Rewrites line `line_number` of `document` for `category`.
    ///
    /// Every other line is left untouched. Nothing here fails: a missing
    /// line or a line the rule does not recognise is reported through the
    /// returned [`Outcome`] and the document stays as it was.
    pub fn apply(
        &self,
        document: &mut Document,
        line_number: usize,
        category: Category,
        detail: Option<&str>,
    ) -> Outcome {
        let Some(line) = document.get_line(line_number) else {
            return Outcome::OutOfBounds;
        };
        let Some(rule) = self.rule_for(category) else {
            return Outcome::Unchanged;
        };

        match rule.rewrite(line, detail) {
            Some(after) if after != line => {
                let before = line.to_owned();
                document.set_line(line_number, after.clone());
                Outcome::Applied { before, after }
            }
            _ => Outcome::Unchanged,
        }
    }
}

impl Default for RewriteEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PARAM_NAME)
    }
}

/// Sub-pattern tables and the two ways of applying them.
pub mod patterns;

/// `unused_param`: prefix an unused parameter with the sentinel.
pub mod unused_param;
/// `unused_var`: prefix an unused binding with the sentinel.
pub mod unused_var;
/// `explicit_any`: `any` becomes `unknown`.
pub mod explicit_any;
/// `empty_object`: `{}` becomes `unknown`.
pub mod empty_object;
/// `unused_import`: drop a name from an import.
pub mod unused_import;

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::from_source(
            "import { Foo, Bar } from 'x';\n\
             export async function GET(request: Request) {\n\
             \x20 const data = fetch();\n\
             \x20 return data as any;\n\
             }\n",
        )
    }

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!(
            "no_such_rule".parse::<Category>(),
            Err(UnknownCategory("no_such_rule".to_owned()))
        );
    }

    #[test]
    fn test_every_category_has_a_rule() {
        let engine = RewriteEngine::default();
        for category in Category::ALL {
            let rule = engine.rule_for(category).unwrap();
            assert_eq!(rule.category(), category);
        }
    }

    #[test]
    fn test_apply_touches_only_target_line() {
        let engine = RewriteEngine::default();
        let original = doc();
        let mut document = original.clone();

        let outcome = engine.apply(&mut document, 3, Category::UnusedVar, Some("data"));
        assert_eq!(
            outcome,
            Outcome::Applied {
                before: "  const data = fetch();".to_owned(),
                after: "  const _data = fetch();".to_owned(),
            }
        );

        for n in 1..=original.line_count() {
            if n != 3 {
                assert_eq!(document.get_line(n), original.get_line(n), "line {n}");
            }
        }
        // `data` on line 4 is a different line and must survive
        assert_eq!(document.get_line(4), Some("  return data as any;"));
    }

    #[test]
    fn test_apply_out_of_bounds_is_noop() {
        let engine = RewriteEngine::default();
        let original = doc();
        for line_number in [0, original.line_count() + 1, usize::MAX] {
            let mut document = original.clone();
            let outcome = engine.apply(&mut document, line_number, Category::ExplicitAny, None);
            assert_eq!(outcome, Outcome::OutOfBounds);
            assert_eq!(document, original);
        }
    }

    #[test]
    fn test_apply_no_match_is_unchanged() {
        let engine = RewriteEngine::default();
        let original = doc();
        let mut document = original.clone();

        let outcome = engine.apply(&mut document, 5, Category::UnusedImport, Some("Foo"));
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(document, original);
    }

    #[test]
    fn test_apply_twice_is_idempotent() {
        let engine = RewriteEngine::default();
        let mut document = doc();

        assert!(engine
            .apply(&mut document, 2, Category::UnusedParam, Some("request"))
            .is_applied());
        let once = document.clone();
        assert_eq!(
            engine.apply(&mut document, 2, Category::UnusedParam, Some("request")),
            Outcome::Unchanged
        );
        assert_eq!(document, once);
        assert_eq!(
            document.get_line(2),
            Some("export async function GET(_request: Request) {")
        );
    }

    #[test]
    fn test_import_removal_keeps_line_numbers() {
        let engine = RewriteEngine::default();
        let mut document = Document::from_source("import { Foo } from 'x';\nconst a: any = 1;\n");
        let count = document.line_count();

        engine.apply(&mut document, 1, Category::UnusedImport, Some("Foo"));
        assert_eq!(document.line_count(), count);
        assert_eq!(document.get_line(1), Some(""));

        engine.apply(&mut document, 2, Category::ExplicitAny, None);
        assert_eq!(document.to_string(), "\nconst a: unknown = 1;\n");
    }
}
