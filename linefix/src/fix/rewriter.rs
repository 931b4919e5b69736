//! Byte-range rewriter for a single line of text.
//!
//! Rules describe their changes as [`Edit`]s against the original line and
//! hand them to a [`LineRewriter`], which checks them and splices them in
//! from the end of the line backwards so earlier offsets stay valid.
//!
//! ```
//! use linefix::fix::{Edit, LineRewriter};
//!
//! let mut rewriter = LineRewriter::new("const data = 1;");
//! rewriter.add_edit(Edit::insert(6, "_"));
//! assert_eq!(rewriter.apply().unwrap(), "const _data = 1;");
//! ```

use std::ops::Range;

/// Replacement of one byte range of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Bytes being replaced, `start..end` of the original line.
    pub range: Range<usize>,
    /// Text spliced in place of `range`.
    pub replacement: String,
}

impl Edit {
    /// Replaces `start..end` with `replacement`.
    #[must_use]
    pub fn new(start: usize, end: usize, replacement: impl Into<String>) -> Self {
        Self {
            range: start..end,
            replacement: replacement.into(),
        }
    }

    /// Replaces the text a regex matched.
    #[must_use]
    pub fn from_match(m: &regex::Match<'_>, replacement: impl Into<String>) -> Self {
        Self::new(m.start(), m.end(), replacement)
    }

    /// Inserts `text` before byte `at`.
    #[must_use]
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::new(at, at, text)
    }

    /// Whether the two edits touch a common byte. Two insertions at the same
    /// offset also conflict, since their order would be ambiguous.
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        if self.range.is_empty() && other.range.is_empty() {
            return self.range.start == other.range.start;
        }
        self.range.start < other.range.end && other.range.start < self.range.end
    }
}

/// Why a set of edits was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
    /// Two edits claim the same bytes.
    #[error("Edits {first} and {second} overlap")]
    Overlap {
        /// Position of the earlier edit, in insertion order.
        first: usize,
        /// Position of the later edit, in insertion order.
        second: usize,
    },
    /// An edit reaches past the end of the line or is reversed.
    #[error("Edit {index} spans {start}..{end} but the line is {len} bytes")]
    OutOfRange {
        /// Position of the edit, in insertion order.
        index: usize,
        /// Range start.
        start: usize,
        /// Range end.
        end: usize,
        /// Line length in bytes.
        len: usize,
    },
    /// An edit boundary falls inside a multi-byte character.
    #[error("Edit {index} splits a UTF-8 character")]
    SplitsChar {
        /// Position of the edit, in insertion order.
        index: usize,
    },
}

/// Collects [`Edit`]s against one line and applies them together.
#[derive(Debug, Clone)]
pub struct LineRewriter {
    line: String,
    edits: Vec<Edit>,
}

impl LineRewriter {
    /// Starts a rewrite of `line`.
    #[must_use]
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            edits: Vec::new(),
        }
    }

    /// Queues one edit.
    pub fn add_edit(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    /// Queues several edits.
    pub fn add_edits(&mut self, edits: impl IntoIterator<Item = Edit>) {
        self.edits.extend(edits);
    }

    /// Whether anything is queued.
    #[must_use]
    pub fn has_edits(&self) -> bool {
        !self.edits.is_empty()
    }

    /// Checks the queued edits against the line without applying them.
    ///
    /// # Errors
    ///
    /// Fails on the first edit that is out of range, splits a character,
    /// or conflicts with another edit.
    pub fn validate(&self) -> Result<(), RewriteError> {
        let len = self.line.len();
        for (index, edit) in self.edits.iter().enumerate() {
            let Range { start, end } = edit.range;
            if start > end || end > len {
                return Err(RewriteError::OutOfRange {
                    index,
                    start,
                    end,
                    len,
                });
            }
            if !self.line.is_char_boundary(start) || !self.line.is_char_boundary(end) {
                return Err(RewriteError::SplitsChar { index });
            }
        }

        let mut order: Vec<usize> = (0..self.edits.len()).collect();
        order.sort_by_key(|&i| (self.edits[i].range.start, self.edits[i].range.end));
        for pair in order.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if self.edits[a].conflicts_with(&self.edits[b]) {
                return Err(RewriteError::Overlap {
                    first: a.min(b),
                    second: a.max(b),
                });
            }
        }
        Ok(())
    }

    /// Applies every queued edit and returns the new line.
    ///
    /// # Errors
    ///
    /// Returns the [`validate`](Self::validate) error, leaving nothing applied.
    pub fn apply(self) -> Result<String, RewriteError> {
        self.validate()?;

        let Self {
            mut line,
            mut edits,
        } = self;
        edits.sort_by(|a, b| b.range.start.cmp(&a.range.start));
        for edit in edits {
            line.replace_range(edit.range, &edit.replacement);
        }
        Ok(line)
    }
}
