//! Bracket pair matching for editors.
//!
//! Given a cursor position, finds the bracket next to it and its partner, or
//! the innermost pair that encloses it. Brackets come from two sources:
//!
//! * **Structural** tokens: syntax tree nodes whose type declares which types
//!   close (or open) it, or whose single-char name appears in the pair table.
//!   Partners are searched among siblings, so tree structure decides nesting.
//! * **Plain** chars from the pair table (default `"()[]{}"`), scanned through
//!   the text up to [`BracketConfig::max_scan_distance`] chars. When a tree is
//!   present, only chars of the same node type as the origin are counted.
//!
//! Every query is a pure function of a document snapshot, an optional tree
//! snapshot, a position, and a configuration.
//!
//! # Outcomes
//!
//! * `None`: no bracket at the position, or the scan hit the bound before
//!   reaching the end of the document.
//! * `matched: false` without `end`: the document ran out first, so the bracket
//!   is unbalanced.
//! * `matched: false` with `end`: the partner is a different kind of bracket.
//! * `matched: true`: a correct pair.
//!
//! ```
//! use pairlight_brackets::{BracketConfig, match_brackets};
//! use pairlight_primitives::{Direction, Rope, Span};
//!
//! let doc = Rope::from("(ab)");
//! let found = match_brackets(&doc, None, 0, Direction::Forward, &BracketConfig::default()).unwrap();
//! assert!(found.matched);
//! assert_eq!(found.end, Some(Span::new(3, 4)));
//! ```

mod classify;
mod config;
mod dispatch;
mod enclosing;
mod error;
mod handle;
mod highlight;
mod pairs;
mod plain;
mod render;
mod result;
mod structural;

#[cfg(test)]
mod tests;

pub use classify::{Counterparts, classify};
pub use config::{BracketConfig, DEFAULT_MAX_SCAN_DISTANCE, MatchMode};
pub use dispatch::{CursorMatches, match_at_cursor, match_brackets};
pub use enclosing::match_enclosing_brackets;
pub use error::{ConfigError, Result};
pub use handle::handle_of;
pub use highlight::{BracketHighlighter, Changes, highlight};
pub use pairs::{DEFAULT_BRACKETS, PairTable};
pub use render::{BracketMark, MarkKind, RenderMatch, default_render_match};
pub use result::MatchResult;
