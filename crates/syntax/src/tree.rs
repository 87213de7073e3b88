use std::sync::Arc;

use pairlight_primitives::{CharIdx, Direction, Span};

use crate::types::{NodeType, NodeTypeId, NodeTypeSet};

/// Index of a node within its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
	pub(crate) const ROOT: Self = Self(0);

	pub(crate) fn new(index: usize) -> Self {
		Self(index as u32)
	}

	#[inline]
	pub fn index(self) -> usize {
		self.0 as usize
	}
}

/// Which nodes touching a position [`SyntaxTree::resolve_inner`] may enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
	/// Nodes ending at or after the position and starting before it.
	Before,
	/// Only nodes strictly around the position.
	Around,
	/// Nodes starting at or before the position and ending after it.
	After,
}

impl Side {
	fn enters(self, span: Span, pos: CharIdx) -> bool {
		match self {
			Self::Before => span.from < pos && span.to >= pos,
			Self::Around => span.from < pos && span.to > pos,
			Self::After => span.from <= pos && span.to > pos,
		}
	}
}

impl From<Direction> for Side {
	/// Leans into the scan direction.
	fn from(dir: Direction) -> Self {
		match dir {
			Direction::Forward => Self::After,
			Direction::Backward => Self::Before,
		}
	}
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
	pub(crate) ty: NodeTypeId,
	pub(crate) span: Span,
	pub(crate) parent: Option<NodeId>,
	pub(crate) first_child: Option<NodeId>,
	pub(crate) last_child: Option<NodeId>,
	pub(crate) next_sibling: Option<NodeId>,
	pub(crate) prev_sibling: Option<NodeId>,
}

/// An immutable syntax tree snapshot.
///
/// Nodes are stored in an arena in pre-order, so the root is always the first
/// node. Traversal takes and returns [`NodeId`]s.
///
/// Each node's children also sit in one contiguous slice, sorted by position,
/// so descending to a position is a binary search per level.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
	types: Arc<NodeTypeSet>,
	nodes: Vec<NodeData>,
	/// Children of every node, grouped by parent.
	child_ids: Vec<NodeId>,
	/// Per node, the bounds of its group in `child_ids`.
	child_ranges: Vec<(u32, u32)>,
}

impl SyntaxTree {
	pub(crate) fn from_parts(types: Arc<NodeTypeSet>, nodes: Vec<NodeData>) -> Self {
		let mut child_ids = Vec::with_capacity(nodes.len().saturating_sub(1));
		let mut child_ranges = Vec::with_capacity(nodes.len());
		for data in &nodes {
			let start = child_ids.len() as u32;
			let mut next = data.first_child;
			while let Some(id) = next {
				child_ids.push(id);
				next = nodes[id.index()].next_sibling;
			}
			child_ranges.push((start, child_ids.len() as u32));
		}
		Self {
			types,
			nodes,
			child_ids,
			child_ranges,
		}
	}

	pub fn types(&self) -> &Arc<NodeTypeSet> {
		&self.types
	}

	pub fn root(&self) -> NodeId {
		NodeId::ROOT
	}

	/// Number of nodes, including the root.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	#[inline]
	fn data(&self, id: NodeId) -> &NodeData {
		&self.nodes[id.index()]
	}

	#[inline]
	pub fn node_type(&self, id: NodeId) -> &NodeType {
		self.types.get(self.data(id).ty)
	}

	#[inline]
	pub fn type_id(&self, id: NodeId) -> NodeTypeId {
		self.data(id).ty
	}

	#[inline]
	pub fn span(&self, id: NodeId) -> Span {
		self.data(id).span
	}

	#[inline]
	pub fn parent(&self, id: NodeId) -> Option<NodeId> {
		self.data(id).parent
	}

	#[inline]
	pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
		self.data(id).first_child
	}

	#[inline]
	pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
		self.data(id).last_child
	}

	#[inline]
	pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
		self.data(id).next_sibling
	}

	#[inline]
	pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
		self.data(id).prev_sibling
	}

	/// The sibling adjacent to `id` in `dir`.
	#[inline]
	pub fn sibling(&self, id: NodeId, dir: Direction) -> Option<NodeId> {
		match dir {
			Direction::Forward => self.next_sibling(id),
			Direction::Backward => self.prev_sibling(id),
		}
	}

	#[inline]
	fn child_slice(&self, id: NodeId) -> &[NodeId] {
		let (start, end) = self.child_ranges[id.index()];
		&self.child_ids[start as usize..end as usize]
	}

	/// Iterates the direct children of `id` in document order.
	pub fn children(&self, id: NodeId) -> Children<'_> {
		Children {
			inner: self.child_slice(id).iter(),
		}
	}

	/// Iterates `id` and then each of its ancestors up to the root.
	pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
		Ancestors { tree: self, next: Some(id) }
	}

	/// Finds the first child of `id` whose name is `name`.
	pub fn child_by_name(&self, id: NodeId, name: &str) -> Option<NodeId> {
		self.children(id).find(|&child| self.node_type(child).name() == name)
	}

	/// Returns the innermost node touching `pos` on `side`.
	///
	/// Zero-length nodes are never entered. Falls back to the root, whose type
	/// stands in for unparsed text.
	pub fn resolve_inner(&self, pos: CharIdx, side: Side) -> NodeId {
		let mut node = self.root();
		loop {
			let children = self.child_slice(node);
			// Siblings never overlap, so ends are sorted too. Only the first child
			// reaching `pos` can contain it; zero-length ones ending there sort
			// after any non-empty sibling that does.
			let at = match side {
				Side::Before => children.partition_point(|&c| self.span(c).to < pos),
				Side::Around | Side::After => children.partition_point(|&c| self.span(c).to <= pos),
			};
			match children.get(at) {
				Some(&child) if !self.span(child).is_empty() && side.enters(self.span(child), pos) => {
					node = child;
				}
				_ => return node,
			}
		}
	}
}

/// Iterator over the children of a node.
pub struct Children<'a> {
	inner: std::slice::Iter<'a, NodeId>,
}

impl Iterator for Children<'_> {
	type Item = NodeId;

	fn next(&mut self) -> Option<NodeId> {
		self.inner.next().copied()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl DoubleEndedIterator for Children<'_> {
	fn next_back(&mut self) -> Option<NodeId> {
		self.inner.next_back().copied()
	}
}

impl ExactSizeIterator for Children<'_> {}

/// Iterator from a node up to the root, inclusive of both.
pub struct Ancestors<'a> {
	tree: &'a SyntaxTree,
	next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
	type Item = NodeId;

	fn next(&mut self) -> Option<NodeId> {
		let id = self.next?;
		self.next = self.tree.parent(id);
		Some(id)
	}
}
