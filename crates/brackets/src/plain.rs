//! Character-scanning matchers for brackets the syntax tree doesn't mark.
//!
//! Scans walk the document chunk by chunk and give up on the first char that
//! lies more than the configured bound from the query position. Running out of
//! chunks proves the token has no partner (`matched: false`, no `end`);
//! stopping at the bound proves nothing, so the query yields `None`.
//!
//! When a tree is present, only bracket chars whose resolved node type equals
//! the origin's are counted. That keeps a `)` inside a string literal from
//! pairing with code outside it.

use pairlight_primitives::{CharIdx, CharLen, Direction, Document, Span};
use pairlight_syntax::{NodeTypeId, Side, SyntaxTree};

use crate::pairs::PairTable;
use crate::result::MatchResult;

/// Equality filter on the node type a bracket char resolves to.
#[derive(Clone, Copy)]
pub(crate) struct TypeFilter<'t> {
	tree: Option<&'t SyntaxTree>,
	token_type: Option<NodeTypeId>,
}

impl<'t> TypeFilter<'t> {
	pub(crate) fn new(tree: Option<&'t SyntaxTree>, token_type: Option<NodeTypeId>) -> Self {
		Self { tree, token_type }
	}

	/// A filter comparing against whatever type `pos` resolves to.
	pub(crate) fn at(tree: Option<&'t SyntaxTree>, pos: CharIdx) -> Self {
		Self::new(tree, tree.map(|t| t.type_id(t.resolve_inner(pos, Side::After))))
	}

	fn accepts(&self, pos: CharIdx) -> bool {
		match (self.tree, self.token_type) {
			(Some(tree), Some(ty)) => tree.type_id(tree.resolve_inner(pos, Side::After)) == ty,
			_ => true,
		}
	}
}

/// Finds the partner of the bracket char adjacent to `pos` on the `dir` side.
///
/// Returns `None` when that char is not a bracket scanning in `dir`, and when
/// the bound stops the scan.
pub(crate) fn match_plain<D: Document + ?Sized>(
	doc: &D,
	pos: CharIdx,
	dir: Direction,
	filter: TypeFilter<'_>,
	max_scan_distance: CharLen,
	pairs: &PairTable,
) -> Option<MatchResult> {
	let start_at = match dir {
		Direction::Forward => pos,
		Direction::Backward => pos.checked_sub(1)?,
	};
	let bracket = pairs.index_of(doc.char_at(start_at)?)?;
	if PairTable::direction_of(bracket) != dir {
		return None;
	}
	let start = Span::char_at(start_at);

	let end = match dir {
		Direction::Forward => doc.len_chars(),
		Direction::Backward => 0,
	};
	let mut depth = 0usize;

	for chunk in doc.iter_chunks(pos, end) {
		for (at, c) in chunk.chars(dir) {
			if gap(pos, at, dir) > max_scan_distance {
				tracing::trace!(pos, ?dir, at, "brackets.plain.inconclusive");
				return None;
			}
			let Some(found) = pairs.index_of(c) else {
				continue;
			};
			if !filter.accepts(at) {
				continue;
			}
			if PairTable::direction_of(found) == dir {
				depth += 1;
			} else if depth == 1 {
				let end = Span::char_at(at);
				return Some(if PairTable::same_pair(found, bracket) {
					MatchResult::matched(start, end)
				} else {
					MatchResult::mismatched(start, Some(end))
				});
			} else if depth > 1 {
				depth -= 1;
			}
		}
	}

	Some(MatchResult::unmatched(start))
}

/// Finds the innermost bracket pair around `pos` by scanning chars.
///
/// The backward pass looks for the nearest opener left unclosed between it and
/// `pos`; the forward pass then looks for the first closer left unopened after
/// `pos`.
pub(crate) fn match_plain_enclosing<D: Document + ?Sized>(
	doc: &D,
	pos: CharIdx,
	filter: TypeFilter<'_>,
	max_scan_distance: CharLen,
	pairs: &PairTable,
) -> Option<MatchResult> {
	let (start, bracket) = find_unclosed_opener(doc, pos, filter, max_scan_distance, pairs)?;

	let mut depth = 0usize;

	for chunk in doc.iter_chunks(pos, doc.len_chars()) {
		for (at, c) in chunk.chars(Direction::Forward) {
			if gap(pos, at, Direction::Forward) > max_scan_distance {
				tracing::trace!(pos, at, "brackets.plain_enclosing.inconclusive");
				return None;
			}
			let Some(found) = pairs.index_of(c) else {
				continue;
			};
			if !filter.accepts(at) {
				continue;
			}
			if PairTable::direction_of(found) == Direction::Forward {
				depth += 1;
			} else if depth == 0 {
				let end = Span::char_at(at);
				return Some(if PairTable::same_pair(found, bracket) {
					MatchResult::matched(start, end)
				} else {
					MatchResult::mismatched(start, Some(end))
				});
			} else {
				depth -= 1;
			}
		}
	}

	Some(MatchResult::unmatched(start))
}

fn find_unclosed_opener<D: Document + ?Sized>(
	doc: &D,
	pos: CharIdx,
	filter: TypeFilter<'_>,
	max_scan_distance: CharLen,
	pairs: &PairTable,
) -> Option<(Span, usize)> {
	let mut depth = 0usize;

	for chunk in doc.iter_chunks(pos, 0) {
		for (at, c) in chunk.chars(Direction::Backward) {
			if gap(pos, at, Direction::Backward) > max_scan_distance {
				return None;
			}
			let Some(found) = pairs.index_of(c) else {
				continue;
			};
			if !filter.accepts(at) {
				continue;
			}
			if PairTable::direction_of(found) == Direction::Backward {
				depth += 1;
			} else if depth == 0 {
				return Some((Span::char_at(at), found));
			} else {
				depth -= 1;
			}
		}
	}

	None
}

/// Chars strictly between `pos` and the near edge of the char at `at`.
///
/// The char adjacent to `pos` in the scan direction is at gap zero.
#[inline]
fn gap(pos: CharIdx, at: CharIdx, dir: Direction) -> CharLen {
	match dir {
		Direction::Forward => at - pos,
		Direction::Backward => pos - at - 1,
	}
}
