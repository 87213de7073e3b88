//! Matching tests over plain text and small hand-built trees.

use std::sync::Arc;

use pairlight_primitives::{Direction, Range, Rope, Selection, Span};
use pairlight_syntax::{NodeId, NodeTypeSet, NodeTypeSpec, SyntaxTree, TreeBuilder};
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

mod enclosing;
mod highlight;

const FWD: Direction = Direction::Forward;
const BACK: Direction = Direction::Backward;

fn doc(text: &str) -> Rope {
	Rope::from(text)
}

fn config() -> BracketConfig {
	BracketConfig::default()
}

fn span(from: usize, to: usize) -> Span {
	Span::new(from, to)
}

fn matched(start: (usize, usize), end: (usize, usize)) -> Option<MatchResult> {
	Some(MatchResult::matched(span(start.0, start.1), span(end.0, end.1)))
}

fn unmatched(start: (usize, usize)) -> Option<MatchResult> {
	Some(MatchResult::unmatched(span(start.0, start.1)))
}

fn mismatched(start: (usize, usize), end: (usize, usize)) -> Option<MatchResult> {
	Some(MatchResult::mismatched(span(start.0, start.1), Some(span(end.0, end.1))))
}

fn tag_name(tree: &SyntaxTree, id: NodeId) -> Option<NodeId> {
	tree.child_by_name(id, "TagName")
}

fn lang() -> Arc<NodeTypeSet> {
	Arc::new(
		NodeTypeSet::builder("Document")
			.node("Group")
			.node("(")
			.node(")")
			.node("[")
			.node("]")
			.node("Ident")
			.node("String")
			.node("Element")
			.node("TagName")
			.node("Text")
			.spec(NodeTypeSpec::new("OpenTag").closed_by(["CloseTag"]).handle(tag_name))
			.spec(NodeTypeSpec::new("CloseTag").opened_by(["OpenTag"]).handle(tag_name))
			.build()
			.unwrap(),
	)
}

/// Parses a toy language: `(`/`[` open a `Group`, `)`/`]` close the innermost
/// one, `"..."` is a `String`, alphanumeric runs are `Ident`s.
fn parse(text: &str) -> SyntaxTree {
	let chars: Vec<char> = text.chars().collect();
	let len = chars.len();
	let mut b = TreeBuilder::new(lang(), len);
	let mut open = 0usize;
	let mut i = 0;
	while i < len {
		match chars[i] {
			c @ ('(' | '[') => {
				b.start("Group", i).unwrap().leaf(&c.to_string(), i, i + 1).unwrap();
				open += 1;
				i += 1;
			}
			c @ (')' | ']') => {
				b.leaf(&c.to_string(), i, i + 1).unwrap();
				if open > 0 {
					b.finish(i + 1).unwrap();
					open -= 1;
				}
				i += 1;
			}
			'"' => {
				let start = i;
				i += 1;
				while i < len && chars[i] != '"' {
					i += 1;
				}
				i = (i + 1).min(len);
				b.leaf("String", start, i).unwrap();
			}
			c if c.is_alphanumeric() => {
				let start = i;
				while i < len && chars[i].is_alphanumeric() {
					i += 1;
				}
				b.leaf("Ident", start, i).unwrap();
			}
			_ => i += 1,
		}
	}
	for _ in 0..open {
		b.finish(len).unwrap();
	}
	b.build().unwrap()
}

/// A tree that only marks string literals, leaving brackets to the char scan.
fn strings_only(text: &str) -> SyntaxTree {
	let chars: Vec<char> = text.chars().collect();
	let mut b = TreeBuilder::new(lang(), chars.len());
	let mut i = 0;
	while i < chars.len() {
		if chars[i] == '"' {
			let start = i;
			i += 1;
			while i < chars.len() && chars[i] != '"' {
				i += 1;
			}
			i = (i + 1).min(chars.len());
			b.leaf("String", start, i).unwrap();
		} else {
			i += 1;
		}
	}
	b.build().unwrap()
}

/// `<a>x</a>` with the tag names as handles.
fn element_tree() -> (Rope, SyntaxTree) {
	let text = "<a>x</a>";
	let mut b = TreeBuilder::new(lang(), 8);
	b.start("Element", 0).unwrap();
	b.start("OpenTag", 0).unwrap().leaf("TagName", 1, 2).unwrap().finish(3).unwrap();
	b.leaf("Text", 3, 4).unwrap();
	b.start("CloseTag", 4).unwrap().leaf("TagName", 6, 7).unwrap().finish(8).unwrap();
	b.finish(8).unwrap();
	(doc(text), b.build().unwrap())
}

/// `width` one-char identifiers followed by `(` + `()` x `pairs` + `)`.
///
/// Only the identifiers are in the tree, so the brackets sit directly in a
/// root with `width` children. Returns the text, the tree and the offset of
/// the outer `(`.
fn wide_tree(width: usize, pairs: usize) -> (String, SyntaxTree, usize) {
	let start = width * 2;
	let text = format!("{}({})", "a ".repeat(width), "()".repeat(pairs));
	let mut b = TreeBuilder::new(lang(), text.chars().count());
	for i in 0..width {
		b.leaf("Ident", i * 2, i * 2 + 1).unwrap();
	}
	(text, b.build().unwrap(), start)
}
