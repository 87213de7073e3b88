//! Handle resolution for structural tokens.

use pairlight_primitives::Span;
use pairlight_syntax::{NodeId, SyntaxTree};

/// Returns the part of `node` that the cursor must touch to activate it.
///
/// Types with a handle function may narrow the node (a tag to its name, say);
/// when the function finds nothing, or there is none, the node's own span is
/// the handle.
pub fn handle_of(tree: &SyntaxTree, node: NodeId) -> Span {
	tree.node_type(node)
		.handle()
		.and_then(|handle| handle(tree, node))
		.map_or_else(|| tree.span(node), |inner| tree.span(inner))
}
