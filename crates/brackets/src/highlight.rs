//! Highlight marks for every cursor in a selection.

use bitflags::bitflags;
use pairlight_primitives::{Document, Selection};
use pairlight_syntax::SyntaxTree;

use crate::config::BracketConfig;
use crate::dispatch::match_at_cursor;
use crate::render::BracketMark;

bitflags! {
	/// What changed since the last highlight pass.
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub struct Changes: u8 {
		const DOCUMENT = 1 << 0;
		const SELECTION = 1 << 1;
	}
}

/// Computes the bracket marks for all collapsed cursors in `selection`.
///
/// Non-empty ranges are skipped. Marks are sorted by position.
pub fn highlight<D: Document + ?Sized>(
	doc: &D,
	tree: Option<&SyntaxTree>,
	selection: &Selection,
	config: &BracketConfig,
) -> Vec<BracketMark> {
	let mut marks = Vec::new();
	for pos in selection.cursor_heads() {
		for result in match_at_cursor(doc, tree, pos, config) {
			marks.extend(config.render_match.render(&result));
		}
	}
	marks.sort_by_key(|mark| (mark.span.from, mark.span.to));
	marks
}

/// Holds the current mark set and rebuilds it when the document or selection changes.
#[derive(Debug, Default)]
pub struct BracketHighlighter {
	config: BracketConfig,
	marks: Vec<BracketMark>,
}

impl BracketHighlighter {
	pub fn new(config: BracketConfig) -> Self {
		Self {
			config,
			marks: Vec::new(),
		}
	}

	pub fn config(&self) -> &BracketConfig {
		&self.config
	}

	pub fn marks(&self) -> &[BracketMark] {
		&self.marks
	}

	/// Recomputes the marks from scratch unless `changes` is empty.
	pub fn update<D: Document + ?Sized>(
		&mut self,
		doc: &D,
		tree: Option<&SyntaxTree>,
		selection: &Selection,
		changes: Changes,
	) -> &[BracketMark] {
		if changes.is_empty() {
			return &self.marks;
		}
		self.marks = highlight(doc, tree, selection, &self.config);
		tracing::debug!(marks = self.marks.len(), ?changes, "brackets.highlight.recomputed");
		&self.marks
	}
}
