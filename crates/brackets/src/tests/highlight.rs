use pretty_assertions::assert_eq;

use super::*;

fn mark(from: usize, to: usize, kind: MarkKind) -> BracketMark {
	BracketMark {
		span: span(from, to),
		kind,
	}
}

#[test]
fn every_cursor_is_marked_in_order() {
	let selection = Selection::cursors([6, 0]).unwrap();
	let marks = highlight(&doc("(a)(b)"), None, &selection, &config());
	assert_eq!(marks, vec![
		mark(0, 1, MarkKind::Matching),
		mark(2, 3, MarkKind::Matching),
		mark(3, 4, MarkKind::Matching),
		mark(5, 6, MarkKind::Matching),
	]);
}

#[test]
fn non_empty_ranges_are_skipped() {
	let selection = Selection::new(Range::new(0, 2), [Range::point(6)]);
	let marks = highlight(&doc("(a)(b)"), None, &selection, &config());
	assert_eq!(marks, vec![mark(3, 4, MarkKind::Matching), mark(5, 6, MarkKind::Matching)]);
}

#[test]
fn lone_and_mismatched_brackets_are_nonmatching() {
	let marks = highlight(&doc("(a"), None, &Selection::point(0), &config());
	assert_eq!(marks, vec![mark(0, 1, MarkKind::Nonmatching)]);

	let marks = highlight(&doc("(a]"), None, &Selection::point(0), &config());
	assert_eq!(marks, vec![mark(0, 1, MarkKind::Nonmatching), mark(2, 3, MarkKind::Nonmatching)]);
}

#[test]
fn custom_render_callback() {
	let render = RenderMatch::new(|result| {
		result
			.end
			.into_iter()
			.map(|span| BracketMark {
				span,
				kind: MarkKind::Matching,
			})
			.collect()
	});
	let config = config().with_render_match(render);
	let marks = highlight(&doc("(ab)"), None, &Selection::point(0), &config);
	assert_eq!(marks, vec![mark(3, 4, MarkKind::Matching)]);
}

#[test]
fn highlighter_recomputes_only_on_changes() {
	let text = doc("(a)(b)");
	let mut highlighter = BracketHighlighter::new(config());
	assert!(highlighter.marks().is_empty());

	let marks = highlighter.update(&text, None, &Selection::point(0), Changes::empty());
	assert!(marks.is_empty());

	let marks = highlighter.update(&text, None, &Selection::point(0), Changes::SELECTION).to_vec();
	assert_eq!(marks, vec![mark(0, 1, MarkKind::Matching), mark(2, 3, MarkKind::Matching)]);

	// Stale marks survive until something is reported as changed.
	highlighter.update(&text, None, &Selection::point(6), Changes::empty());
	assert_eq!(highlighter.marks(), marks.as_slice());

	highlighter.update(&text, None, &Selection::point(6), Changes::DOCUMENT | Changes::SELECTION);
	assert_eq!(highlighter.marks(), &[mark(3, 4, MarkKind::Matching), mark(5, 6, MarkKind::Matching)]);
}

#[test]
fn highlighter_uses_tree() {
	let (text, tree) = element_tree();
	let mut highlighter = BracketHighlighter::default();
	highlighter.update(&text, Some(&tree), &Selection::point(7), Changes::DOCUMENT);
	assert_eq!(highlighter.marks(), &[mark(1, 2, MarkKind::Matching), mark(6, 7, MarkKind::Matching)]);
	assert_eq!(highlighter.config().mode(), MatchMode::Directional);
}
