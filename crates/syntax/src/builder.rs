use std::sync::Arc;

use pairlight_primitives::{CharIdx, CharLen, Span};

use crate::error::{Result, SyntaxError};
use crate::tree::{NodeData, NodeId, SyntaxTree};
use crate::types::{NodeTypeId, NodeTypeSet};

/// Builds a [`SyntaxTree`] from a pre-order stream of node boundaries.
///
/// The root spans the whole document and uses the set's top type. Nodes are
/// opened with [`start`](Self::start) and closed with [`finish`](Self::finish);
/// children must appear in document order without overlapping.
///
/// ```
/// # use std::sync::Arc;
/// # use pairlight_syntax::{NodeTypeSet, NodeTypeSpec, TreeBuilder};
/// let types = Arc::new(
/// 	NodeTypeSet::builder("Document")
/// 		.node("Group")
/// 		.node("(")
/// 		.node(")")
/// 		.build()?,
/// );
/// let mut builder = TreeBuilder::new(types, 4);
/// builder.start("Group", 0)?.leaf("(", 0, 1)?.leaf(")", 3, 4)?.finish(4)?;
/// let tree = builder.build()?;
/// assert_eq!(tree.node_count(), 4);
/// # Ok::<(), pairlight_syntax::SyntaxError>(())
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
	types: Arc<NodeTypeSet>,
	nodes: Vec<NodeData>,
	open: Vec<NodeId>,
}

impl TreeBuilder {
	pub fn new(types: Arc<NodeTypeSet>, len: CharLen) -> Self {
		let root = NodeData {
			ty: types.top().id(),
			span: Span::new(0, len),
			parent: None,
			first_child: None,
			last_child: None,
			next_sibling: None,
			prev_sibling: None,
		};
		Self {
			types,
			nodes: vec![root],
			open: vec![NodeId::ROOT],
		}
	}

	fn resolve_type(&self, name: &str) -> Result<NodeTypeId> {
		self.types
			.by_name(name)
			.map(|ty| ty.id())
			.ok_or_else(|| SyntaxError::UnknownType(name.to_string()))
	}

	fn current(&self) -> NodeId {
		// The root never leaves the stack.
		self.open.last().copied().unwrap_or(NodeId::ROOT)
	}

	fn name_of(&self, id: NodeId) -> String {
		self.types.get(self.nodes[id.index()].ty).name().to_string()
	}

	/// Opens a node of type `name` at `from` as the last child of the current node.
	pub fn start(&mut self, name: &str, from: CharIdx) -> Result<&mut Self> {
		let ty = self.resolve_type(name)?;
		let parent = self.current();
		let parent_span = self.nodes[parent.index()].span;
		let root_len = self.nodes[NodeId::ROOT.index()].span.to;

		if from < parent_span.from || from > root_len {
			return Err(SyntaxError::OutsideParent {
				name: name.to_string(),
				from,
				to: from,
				parent_from: parent_span.from,
				parent_to: if parent == NodeId::ROOT { root_len } else { parent_span.to },
			});
		}

		let prev = self.nodes[parent.index()].last_child;
		if let Some(prev) = prev {
			let prev_to = self.nodes[prev.index()].span.to;
			if from < prev_to {
				return Err(SyntaxError::OverlapsSibling {
					name: name.to_string(),
					from,
					prev_to,
				});
			}
		}

		let id = NodeId::new(self.nodes.len());
		self.nodes.push(NodeData {
			ty,
			span: Span { from, to: from },
			parent: Some(parent),
			first_child: None,
			last_child: None,
			next_sibling: None,
			prev_sibling: prev,
		});
		if let Some(prev) = prev {
			self.nodes[prev.index()].next_sibling = Some(id);
		}
		let parent_data = &mut self.nodes[parent.index()];
		parent_data.first_child.get_or_insert(id);
		parent_data.last_child = Some(id);

		self.open.push(id);
		Ok(self)
	}

	/// Closes the current node at `to`.
	pub fn finish(&mut self, to: CharIdx) -> Result<&mut Self> {
		if self.open.len() <= 1 {
			return Err(SyntaxError::NothingToFinish);
		}
		let id = self.current();
		let from = self.nodes[id.index()].span.from;
		if to < from {
			return Err(SyntaxError::InvertedRange { from, to });
		}

		if let Some(last) = self.nodes[id.index()].last_child {
			let child = self.nodes[last.index()].span;
			if child.to > to {
				return Err(SyntaxError::OutsideParent {
					name: self.name_of(last),
					from: child.from,
					to: child.to,
					parent_from: from,
					parent_to: to,
				});
			}
		}

		let parent = self.open[self.open.len() - 2];
		let limit = if parent == NodeId::ROOT {
			self.nodes[NodeId::ROOT.index()].span.to
		} else {
			CharIdx::MAX
		};
		if to > limit {
			return Err(SyntaxError::OutsideParent {
				name: self.name_of(id),
				from,
				to,
				parent_from: 0,
				parent_to: limit,
			});
		}

		self.nodes[id.index()].span.to = to;
		self.open.pop();
		Ok(self)
	}

	/// Adds a childless node spanning `from..to`.
	///
	/// Fails without touching the tree, so a rejected leaf never captures
	/// later nodes as its children.
	pub fn leaf(&mut self, name: &str, from: CharIdx, to: CharIdx) -> Result<&mut Self> {
		if to < from {
			return Err(SyntaxError::InvertedRange { from, to });
		}
		let root_len = self.nodes[NodeId::ROOT.index()].span.to;
		if self.current() == NodeId::ROOT && to > root_len {
			self.resolve_type(name)?;
			return Err(SyntaxError::OutsideParent {
				name: name.to_string(),
				from,
				to,
				parent_from: 0,
				parent_to: root_len,
			});
		}
		self.start(name, from)?.finish(to)
	}

	pub fn build(self) -> Result<SyntaxTree> {
		let unclosed = self.open.len() - 1;
		if unclosed > 0 {
			return Err(SyntaxError::Unclosed(unclosed));
		}
		Ok(SyntaxTree::from_parts(self.types, self.nodes))
	}
}
