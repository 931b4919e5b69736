use crate::fix::{Edit, LineRewriter};
use regex::{Match, Regex};

/// Start of line or a character that cannot continue a JS identifier.
/// Unlike `\b` this also works for names that start with `$`.
pub const IDENT_BEFORE: &str = r"(?:^|[^\w$])";

/// End of line or a character that cannot continue a JS identifier.
pub const IDENT_AFTER: &str = r"(?:[^\w$]|$)";

/// Capture group naming the span a sub-pattern rewrites. Patterns without
/// it rewrite the whole match.
pub const TARGET_GROUP: &str = "target";

/// One candidate match-and-replace within a rule family.
#[derive(Debug, Clone)]
pub struct SubPattern {
    /// Pattern searched for anywhere in the line.
    pub regex: Regex,
    /// Literal text that replaces a match (no `$` expansion).
    pub replacement: String,
}

impl SubPattern {
    /// Compiles `pattern`. Returns `None` when it does not compile, which
    /// only happens for pathological identifiers.
    #[must_use]
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Option<Self> {
        Regex::new(pattern).ok().map(|regex| Self {
            regex,
            replacement: replacement.into(),
        })
    }

    /// Leftmost span of `line` this pattern rewrites: the `target` group
    /// when the pattern has one, otherwise the whole match.
    pub fn find<'a>(&self, line: &'a str) -> Option<Match<'a>> {
        let caps = self.regex.captures(line)?;
        caps.name(TARGET_GROUP).or_else(|| caps.get(0))
    }

    /// Wraps an already compiled regex.
    #[must_use]
    pub fn from_regex(regex: &Regex, replacement: impl Into<String>) -> Self {
        Self {
            regex: regex.clone(),
            replacement: replacement.into(),
        }
    }
}

/// Tries `patterns` in order; the first one that matches rewrites its
/// leftmost occurrence and the rest are never consulted.
pub fn first_match(line: &str, patterns: &[SubPattern]) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        let m = pattern.find(line)?;
        let mut rewriter = LineRewriter::new(line);
        rewriter.add_edit(Edit::from_match(&m, pattern.replacement.as_str()));
        rewriter.apply().ok()
    })
}

/// Runs every pattern in order over the line, each one replacing all of its
/// occurrences in the output of the previous. Returns `None` when nothing
/// matched at all.
pub fn apply_all(line: &str, patterns: &[SubPattern]) -> Option<String> {
    let mut current = line.to_owned();
    let mut matched = false;

    for pattern in patterns {
        let mut rewriter = LineRewriter::new(current.as_str());
        rewriter.add_edits(
            pattern
                .regex
                .find_iter(&current)
                .map(|m| Edit::from_match(&m, pattern.replacement.as_str())),
        );
        if !rewriter.has_edits() {
            continue;
        }
        if let Ok(next) = rewriter.apply() {
            current = next;
            matched = true;
        }
    }

    matched.then_some(current)
}

/// Escaped form of `identifier` for embedding in a pattern.
pub fn ident(identifier: &str) -> String {
    regex::escape(identifier)
}
