//! Directional queries and the per-cursor policy.

use pairlight_primitives::{CharIdx, Direction, Document};
use pairlight_syntax::{Side, SyntaxTree};
use smallvec::SmallVec;

use crate::config::{BracketConfig, MatchMode};
use crate::enclosing::match_enclosing_brackets;
use crate::plain::{TypeFilter, match_plain};
use crate::result::MatchResult;
use crate::structural::{match_marked, origins};

/// Results for one cursor. Directional mode yields at most two.
pub type CursorMatches = SmallVec<[MatchResult; 2]>;

/// Finds the bracket next to `pos` on the `dir` side and its partner.
///
/// A structural bracket from the tree is preferred. Failing that, the char
/// adjacent to `pos` is scanned as a plain bracket. Returns `None` if there is
/// no bracket there, or the scan gave up at `max_scan_distance`.
pub fn match_brackets<D: Document + ?Sized>(
	doc: &D,
	tree: Option<&SyntaxTree>,
	pos: CharIdx,
	dir: Direction,
	config: &BracketConfig,
) -> Option<MatchResult> {
	let pos = pos.min(doc.len_chars());
	let max = config.max_scan_distance;
	let pairs = &config.brackets;

	let mut token_type = None;
	if let Some(tree) = tree {
		let node = tree.resolve_inner(pos, Side::from(dir));
		if let Some(origin) = origins(tree, node, pos, dir, pairs).next() {
			return match_marked(tree, pos, dir, &origin, pairs, max);
		}
		token_type = Some(tree.type_id(node));
	}

	match_plain(doc, pos, dir, TypeFilter::new(tree, token_type), max, pairs)
}

/// Runs the configured query policy for a collapsed cursor at `pos`.
///
/// * Enclosing: one enclosing-pair query.
/// * Directional: a closer before the cursor and an opener after it; both
///   results are kept.
/// * Non-directional: the first hit of backward at `pos`, forward at `pos - 1`,
///   then, with `after_cursor`, forward at `pos` and backward at `pos + 1`.
pub fn match_at_cursor<D: Document + ?Sized>(
	doc: &D,
	tree: Option<&SyntaxTree>,
	pos: CharIdx,
	config: &BracketConfig,
) -> CursorMatches {
	let mode = config.mode();
	tracing::trace!(pos, ?mode, "brackets.cursor");

	let mut found = CursorMatches::new();
	match mode {
		MatchMode::Enclosing => {
			found.extend(match_enclosing_brackets(doc, tree, pos, config));
		}
		MatchMode::Directional => {
			found.extend(match_brackets(doc, tree, pos, Direction::Backward, config));
			found.extend(match_brackets(doc, tree, pos, Direction::Forward, config));
		}
		MatchMode::NonDirectional => {
			found.extend(match_non_directional(doc, tree, pos, config));
		}
	}
	found
}

fn match_non_directional<D: Document + ?Sized>(
	doc: &D,
	tree: Option<&SyntaxTree>,
	pos: CharIdx,
	config: &BracketConfig,
) -> Option<MatchResult> {
	let at = |pos, dir| match_brackets(doc, tree, pos, dir, config);

	at(pos, Direction::Backward)
		.or_else(|| pos.checked_sub(1).and_then(|before| at(before, Direction::Forward)))
		.or_else(|| {
			if !config.after_cursor {
				return None;
			}
			at(pos, Direction::Forward).or_else(|| {
				(pos < doc.len_chars())
					.then(|| at(pos + 1, Direction::Backward))
					.flatten()
			})
		})
}
