//! Finding the innermost bracket pair around a position.

use pairlight_primitives::{CharIdx, Direction, Document};
use pairlight_syntax::{Side, SyntaxTree};

use crate::config::BracketConfig;
use crate::plain::{TypeFilter, match_plain_enclosing};
use crate::result::MatchResult;
use crate::structural::{match_marked_enclosing, origins};

/// Finds the innermost pair whose opener is at or before `pos` and whose
/// closer, if any, is at or after it.
///
/// With a tree, candidate positions are visited from `pos` backward, one char
/// at a time, up to `max_scan_distance`. At each one every structural opener
/// touching it is tried, innermost first; an opener is only accepted if its
/// partner does not end up before `pos`. Without a structural hit, falls back
/// to a char scan.
///
/// Returns `None` when no opener is found in range, or the forward pass is cut
/// short by the bound.
pub fn match_enclosing_brackets<D: Document + ?Sized>(
	doc: &D,
	tree: Option<&SyntaxTree>,
	pos: CharIdx,
	config: &BracketConfig,
) -> Option<MatchResult> {
	let pos = pos.min(doc.len_chars());
	let max = config.max_scan_distance;
	let pairs = &config.brackets;

	if let Some(tree) = tree {
		for candidate in (pos.saturating_sub(max)..=pos).rev() {
			let start = tree.resolve_inner(candidate, Side::After);
			for origin in origins(tree, start, candidate, Direction::Forward, pairs) {
				if let Some(found) = match_marked_enclosing(tree, pos, &origin, pairs, max) {
					tracing::trace!(pos, candidate, "brackets.enclosing.structural");
					return Some(found);
				}
			}
		}
	}

	match_plain_enclosing(doc, pos, TypeFilter::at(tree, pos), max, pairs)
}
