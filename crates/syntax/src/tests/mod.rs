//! Tree construction and navigation tests.

use std::sync::Arc;

use pairlight_primitives::{Direction, Span};
use pretty_assertions::assert_eq;

use super::*;


fn tag_name(tree: &SyntaxTree, id: NodeId) -> Option<NodeId> {
	tree.child_by_name(id, "TagName")
}

/// Types for a tiny language with paren groups and tags.
fn types() -> Arc<NodeTypeSet> {
	Arc::new(
		NodeTypeSet::builder("Document")
			.node("Group")
			.node("Ident")
			.node("(")
			.node(")")
			.node("Element")
			.node("TagName")
			.spec(NodeTypeSpec::new("OpenTag").closed_by(["CloseTag"]).handle(tag_name))
			.spec(NodeTypeSpec::new("CloseTag").opened_by(["OpenTag"]).handle(tag_name))
			.build()
			.unwrap(),
	)
}

/// `(ab)` as `Document > Group > ["(", Ident, ")"]`.
fn paren_tree() -> SyntaxTree {
	let mut b = TreeBuilder::new(types(), 4);
	b.start("Group", 0)
		.unwrap()
		.leaf("(", 0, 1)
		.unwrap()
		.leaf("Ident", 1, 3)
		.unwrap()
		.leaf(")", 3, 4)
		.unwrap()
		.finish(4)
		.unwrap();
	b.build().unwrap()
}

#[test]
fn type_set_metadata() {
	let types = types();
	assert_eq!(types.top().name(), "Document");
	assert_eq!(types.len(), 9);

	let open = types.by_name("OpenTag").unwrap();
	assert_eq!(open.counterparts(Direction::Forward).map(|s| s.len()), Some(1));
	assert_eq!(&*open.counterparts(Direction::Forward).unwrap()[0], "CloseTag");
	assert!(open.counterparts(Direction::Backward).is_none());
	assert!(open.handle().is_some());

	let ident = types.by_name("Ident").unwrap();
	assert!(ident.counterparts(Direction::Forward).is_none());
	assert!(ident.handle().is_none());
	assert!(types.by_name("Missing").is_none());
}

#[test]
fn duplicate_type_names_are_rejected() {
	let err = NodeTypeSet::builder("Document").node("A").node("A").build().unwrap_err();
	assert_eq!(err, SyntaxError::DuplicateType("A".into()));
}

#[test]
fn children_and_siblings() {
	let tree = paren_tree();
	let group = tree.first_child(tree.root()).unwrap();
	let kids: Vec<_> = tree.children(group).map(|id| tree.node_type(id).name().to_string()).collect();
	assert_eq!(kids, vec!["(", "Ident", ")"]);

	let open = tree.first_child(group).unwrap();
	let close = tree.last_child(group).unwrap();
	assert_eq!(tree.span(close), Span::new(3, 4));
	assert_eq!(tree.sibling(open, Direction::Forward).map(|id| tree.span(id)), Some(Span::new(1, 3)));
	assert_eq!(tree.sibling(open, Direction::Backward), None);
	assert_eq!(tree.prev_sibling(close).and_then(|id| tree.prev_sibling(id)), Some(open));
}

#[test]
fn ancestors_walk_to_root() {
	let tree = paren_tree();
	let ident = tree.resolve_inner(2, Side::After);
	let names: Vec<_> = tree.ancestors(ident).map(|id| tree.node_type(id).name()).collect();
	assert_eq!(names, vec!["Ident", "Group", "Document"]);
	assert_eq!(tree.parent(tree.root()), None);
}
