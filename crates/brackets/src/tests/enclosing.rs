use pretty_assertions::assert_eq;

use super::*;

fn around(text: &str, pos: usize) -> Option<MatchResult> {
	match_enclosing_brackets(&doc(text), None, pos, &config())
}

fn around_parsed(text: &str, pos: usize) -> Option<MatchResult> {
	let tree = parse(text);
	match_enclosing_brackets(&doc(text), Some(&tree), pos, &config())
}

#[rstest]
#[case("(ab)", 2, matched((0, 1), (3, 4)))]
#[case("(ab)", 1, matched((0, 1), (3, 4)))]
#[case("()", 1, matched((0, 1), (1, 2)))]
#[case("(ab)", 0, None)]
#[case("(ab)", 4, None)]
#[case("x (a [b] c) y", 9, matched((2, 3), (10, 11)))]
#[case("x (a [b] c) y", 6, matched((5, 6), (7, 8)))]
#[case("x (a [b] c) y", 5, matched((2, 3), (10, 11)))]
#[case("x (a [b] c) y", 12, None)]
#[case("(a]", 1, mismatched((0, 1), (2, 3)))]
#[case("(ab", 2, unmatched((0, 1)))]
fn plain_scenarios(#[case] text: &str, #[case] pos: usize, #[case] expected: Option<MatchResult>) {
	assert_eq!(around(text, pos), expected);
}

#[rstest]
#[case("(ab)", 3, matched((0, 1), (3, 4)))]
#[case("(ab)", 1, matched((0, 1), (3, 4)))]
#[case("(ab)", 4, None)]
#[case("(a (b) c)", 7, matched((0, 1), (8, 9)))]
#[case("(a (b) c)", 4, matched((3, 4), (5, 6)))]
#[case("(a (b) c)", 6, matched((0, 1), (8, 9)))]
fn structural_scenarios(#[case] text: &str, #[case] pos: usize, #[case] expected: Option<MatchResult>) {
	assert_eq!(around_parsed(text, pos), expected);
}

#[test]
fn structural_mismatch_and_unclosed() {
	assert_eq!(around_parsed("(a]", 1), mismatched((0, 1), (2, 3)));
	assert_eq!(around_parsed("(ab", 2), unmatched((0, 1)));
}

#[test]
fn tag_pair_encloses_text() {
	let (text, tree) = element_tree();
	assert_eq!(match_enclosing_brackets(&text, Some(&tree), 3, &config()), matched((1, 2), (6, 7)));
	assert_eq!(match_enclosing_brackets(&text, Some(&tree), 5, &config()), matched((1, 2), (6, 7)));
}

#[test]
fn string_contents_are_ignored() {
	let text = "(\")\" x)";
	let tree = strings_only(text);
	assert_eq!(
		match_enclosing_brackets(&doc(text), Some(&tree), 5, &config()),
		matched((0, 1), (6, 7))
	);
	// Without the tree the quoted paren closes the opener first.
	assert_eq!(around(text, 5), None);
}

#[test]
fn position_past_end_is_clamped() {
	assert_eq!(around("(ab", 99), unmatched((0, 1)));
}

#[rstest]
#[case(5, None)]
#[case(9, None)]
#[case(11, matched((0, 1), (21, 22)))]
fn plain_scan_distance(#[case] max: usize, #[case] expected: Option<MatchResult>) {
	let text = format!("({})", "x".repeat(20));
	let config = config().with_max_scan_distance(max).unwrap();
	assert_eq!(match_enclosing_brackets(&doc(&text), None, 10, &config), expected);
}

#[rstest]
#[case(10, None)]
#[case(25, None)]
#[case(26, matched((0, 1), (51, 52)))]
fn structural_scan_distance(#[case] max: usize, #[case] expected: Option<MatchResult>) {
	let text = format!("({})", "x".repeat(50));
	let tree = parse(&text);
	let config = config().with_max_scan_distance(max).unwrap();
	assert_eq!(match_enclosing_brackets(&doc(&text), Some(&tree), 25, &config), expected);
}

#[test]
fn wide_tree_enclosing() {
	let (text, tree, s) = wide_tree(40_000, 2_500);
	let close = s + 5_001;
	let text = doc(&text);
	assert_eq!(match_enclosing_brackets(&text, Some(&tree), s + 1, &config()), matched((s, s + 1), (close, close + 1)));
	assert_eq!(match_enclosing_brackets(&text, Some(&tree), s + 2, &config()), matched((s + 1, s + 2), (s + 2, s + 3)));
	// Inside the identifiers nothing encloses.
	assert_eq!(match_enclosing_brackets(&text, Some(&tree), 1_000, &config()), None);
}

#[test]
fn wide_parsed_tree_enclosing() {
	let text = format!("{}({})", "a ".repeat(40_000), "()".repeat(2_500));
	let tree = parse(&text);
	let s = 80_000;
	let close = s + 5_001;
	assert_eq!(
		match_enclosing_brackets(&doc(&text), Some(&tree), close, &config()),
		matched((s, s + 1), (close, close + 1))
	);
	assert_eq!(
		match_enclosing_brackets(&doc(&text), Some(&tree), s + 2, &config()),
		matched((s + 1, s + 2), (s + 2, s + 3))
	);
	assert_eq!(
		match_brackets(&doc(&text), Some(&tree), s, FWD, &config()),
		matched((s, s + 1), (close, close + 1))
	);
}
