//! Shared fix module for line rewriting.
//!
//! Every rewrite rule expresses its change as a set of byte-range edits
//! against the targeted line. `LineRewriter` validates and applies them.

mod rewriter;

pub use rewriter::{Edit, LineRewriter, RewriteError};
