//! Turning match results into highlight marks.

use std::fmt;
use std::sync::Arc;

use pairlight_primitives::Span;

use crate::result::MatchResult;

/// Style tag applied to a highlighted bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkKind {
	/// Part of a correctly matched pair.
	Matching,
	/// A lone or mismatched bracket.
	Nonmatching,
}

impl MarkKind {
	pub fn class_name(self) -> &'static str {
		match self {
			Self::Matching => "matching-bracket",
			Self::Nonmatching => "nonmatching-bracket",
		}
	}
}

/// A span of text to highlight, with its style tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BracketMark {
	pub span: Span,
	pub kind: MarkKind,
}

/// Marks every span of `result` as matching or nonmatching.
pub fn default_render_match(result: &MatchResult) -> Vec<BracketMark> {
	let kind = if result.matched { MarkKind::Matching } else { MarkKind::Nonmatching };
	result.spans().map(|span| BracketMark { span, kind }).collect()
}

type RenderFn = dyn Fn(&MatchResult) -> Vec<BracketMark> + Send + Sync;

/// Callback that decides how a match result is highlighted.
#[derive(Clone)]
pub struct RenderMatch(Arc<RenderFn>);

impl RenderMatch {
	pub fn new(f: impl Fn(&MatchResult) -> Vec<BracketMark> + Send + Sync + 'static) -> Self {
		Self(Arc::new(f))
	}

	pub fn render(&self, result: &MatchResult) -> Vec<BracketMark> {
		(self.0)(result)
	}
}

impl Default for RenderMatch {
	fn default() -> Self {
		Self::new(default_render_match)
	}
}

impl fmt::Debug for RenderMatch {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("RenderMatch(..)")
	}
}
