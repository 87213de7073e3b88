//! Matching brackets that the syntax tree marks as tokens.
//!
//! A structural bracket is a node whose type classifies as an opener or closer.
//! Its partner is searched among its siblings only: the walk never leaves the
//! parent, so a `(` inside one group can't pair with a `)` in another.

use pairlight_primitives::{CharIdx, CharLen, Direction, Span};
use pairlight_syntax::{NodeId, SyntaxTree};

use crate::classify::{Counterparts, classify};
use crate::handle::handle_of;
use crate::pairs::PairTable;
use crate::result::MatchResult;

/// A classified bracket node whose handle the query position touches.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Origin<'t> {
	pub(crate) node: NodeId,
	pub(crate) handle: Span,
	pub(crate) matching: Counterparts<'t>,
}

/// Yields every bracket origin at `pos`, innermost first.
///
/// Starts from the innermost node leaning into `dir` and climbs the ancestor
/// chain, keeping nodes that classify in `dir`, are non-empty, and whose
/// handle touches `pos`.
pub(crate) fn origins<'t>(
	tree: &'t SyntaxTree,
	start: NodeId,
	pos: CharIdx,
	dir: Direction,
	pairs: &'t PairTable,
) -> impl Iterator<Item = Origin<'t>> + 't {
	tree.ancestors(start).filter_map(move |node| {
		let matching = classify(tree.node_type(node), dir, pairs)?;
		if tree.span(node).is_empty() {
			return None;
		}
		let handle = handle_of(tree, node);
		handle.touches(pos, dir).then_some(Origin { node, handle, matching })
	})
}

/// How a sibling walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Walk {
	/// A depth-0 token of the opposite role.
	Partner { handle: Span, matched: bool },
	/// The parent ran out of siblings.
	Exhausted,
	/// The next sibling lies beyond the scan bound.
	OutOfRange,
}

/// Walks the origin's siblings in `dir`, tracking nesting depth.
///
/// `anchor` and `max_scan_distance` bound the walk: a sibling starting (or,
/// backward, ending) further than that from `anchor` stops it.
pub(crate) fn walk_siblings(
	tree: &SyntaxTree,
	origin: &Origin<'_>,
	dir: Direction,
	pairs: &PairTable,
	anchor: CharIdx,
	max_scan_distance: CharLen,
) -> Walk {
	let mut depth = 0usize;
	let mut next = tree.sibling(origin.node, dir);

	while let Some(node) = next {
		next = tree.sibling(node, dir);
		let span = tree.span(node);
		if span.is_empty() {
			continue;
		}
		let beyond = match dir {
			Direction::Forward => span.from.saturating_sub(anchor),
			Direction::Backward => anchor.saturating_sub(span.to),
		};
		if beyond > max_scan_distance {
			return Walk::OutOfRange;
		}

		let ty = tree.node_type(node);
		if depth == 0 && origin.matching.contains(ty.name()) {
			return Walk::Partner {
				handle: handle_of(tree, node),
				matched: true,
			};
		}
		if classify(ty, dir, pairs).is_some() {
			depth += 1;
		} else if classify(ty, dir.reverse(), pairs).is_some() {
			if depth == 0 {
				return Walk::Partner {
					handle: handle_of(tree, node),
					matched: false,
				};
			}
			depth -= 1;
		}
	}

	Walk::Exhausted
}

/// Completes a directional query from a structural origin.
pub(crate) fn match_marked(
	tree: &SyntaxTree,
	pos: CharIdx,
	dir: Direction,
	origin: &Origin<'_>,
	pairs: &PairTable,
	max_scan_distance: CharLen,
) -> Option<MatchResult> {
	match walk_siblings(tree, origin, dir, pairs, pos, max_scan_distance) {
		Walk::Partner { handle, matched: true } => Some(MatchResult::matched(origin.handle, handle)),
		Walk::Partner { handle, matched: false } => {
			Some(MatchResult::mismatched(origin.handle, (!handle.is_empty()).then_some(handle)))
		}
		Walk::Exhausted => Some(MatchResult::unmatched(origin.handle)),
		Walk::OutOfRange => {
			tracing::trace!(pos, ?dir, max_scan_distance, "brackets.structural.out_of_range");
			None
		}
	}
}

/// Completes an enclosing query from an opener found at or before `pos`.
///
/// The opener only encloses `pos` if its partner's handle starts at or after
/// `pos`; otherwise `None` tells the caller to keep looking further out.
pub(crate) fn match_marked_enclosing(
	tree: &SyntaxTree,
	pos: CharIdx,
	origin: &Origin<'_>,
	pairs: &PairTable,
	max_scan_distance: CharLen,
) -> Option<MatchResult> {
	match walk_siblings(tree, origin, Direction::Forward, pairs, pos, max_scan_distance) {
		Walk::Partner { handle, .. } if handle.from < pos => None,
		Walk::Partner { handle, matched: true } => Some(MatchResult::matched(origin.handle, handle)),
		Walk::Partner { handle, matched: false } => {
			Some(MatchResult::mismatched(origin.handle, (!handle.is_empty()).then_some(handle)))
		}
		Walk::Exhausted => Some(MatchResult::unmatched(origin.handle)),
		Walk::OutOfRange => None,
	}
}
