use pairlight_primitives::Direction;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{Result, SyntaxError};
use crate::tree::{NodeId, SyntaxTree};

/// Maps a bracket node to the sub-node the cursor must touch to activate it.
///
/// Returning `None` falls back to the node itself.
pub type HandleFn = fn(&SyntaxTree, NodeId) -> Option<NodeId>;

/// Index of a type within its [`NodeTypeSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeTypeId(u16);

impl NodeTypeId {
	#[inline]
	pub fn index(self) -> usize {
		self.0 as usize
	}
}

type NameSet = SmallVec<[Box<str>; 2]>;

/// A node type and its bracket metadata.
#[derive(Debug, Clone)]
pub struct NodeType {
	id: NodeTypeId,
	name: Box<str>,
	closed_by: Option<NameSet>,
	opened_by: Option<NameSet>,
	handle: Option<HandleFn>,
}

impl NodeType {
	pub fn id(&self) -> NodeTypeId {
		self.id
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Type names that pair with this type when scanning in `dir`.
	///
	/// Forward scans start from openers, so they read the `closed_by` set;
	/// backward scans read `opened_by`. `None` means the type declares no
	/// bracket role in that direction.
	pub fn counterparts(&self, dir: Direction) -> Option<&[Box<str>]> {
		match dir {
			Direction::Forward => self.closed_by.as_deref(),
			Direction::Backward => self.opened_by.as_deref(),
		}
	}

	pub fn handle(&self) -> Option<HandleFn> {
		self.handle
	}
}

/// Declarative description of one node type, consumed by [`NodeTypeSetBuilder`].
#[derive(Debug, Clone)]
pub struct NodeTypeSpec {
	name: Box<str>,
	closed_by: Option<NameSet>,
	opened_by: Option<NameSet>,
	handle: Option<HandleFn>,
}

impl NodeTypeSpec {
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			closed_by: None,
			opened_by: None,
			handle: None,
		}
	}

	/// Marks this type as an opener closed by any of `names`.
	pub fn closed_by<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<Box<str>>,
	{
		self.closed_by = Some(names.into_iter().map(Into::into).collect());
		self
	}

	/// Marks this type as a closer opened by any of `names`.
	pub fn opened_by<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<Box<str>>,
	{
		self.opened_by = Some(names.into_iter().map(Into::into).collect());
		self
	}

	pub fn handle(mut self, handle: HandleFn) -> Self {
		self.handle = Some(handle);
		self
	}
}

/// The closed set of node types a parser produces.
///
/// The first type is the top type: the root of every tree, and the type of
/// any region no finer node covers.
#[derive(Debug, Clone)]
pub struct NodeTypeSet {
	types: Vec<NodeType>,
	by_name: FxHashMap<Box<str>, NodeTypeId>,
}

impl NodeTypeSet {
	/// Starts a set whose top type is named `top`.
	pub fn builder(top: impl Into<Box<str>>) -> NodeTypeSetBuilder {
		NodeTypeSetBuilder {
			specs: vec![NodeTypeSpec::new(top)],
		}
	}

	pub fn top(&self) -> &NodeType {
		&self.types[0]
	}

	pub fn get(&self, id: NodeTypeId) -> &NodeType {
		&self.types[id.index()]
	}

	pub fn by_name(&self, name: &str) -> Option<&NodeType> {
		self.by_name.get(name).map(|&id| self.get(id))
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	/// Always false: a set holds at least its top type.
	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}
}

/// Collects [`NodeTypeSpec`]s and assigns ids in registration order.
#[derive(Debug, Clone)]
pub struct NodeTypeSetBuilder {
	specs: Vec<NodeTypeSpec>,
}

impl NodeTypeSetBuilder {
	/// Registers a plain node type with no bracket role.
	pub fn node(self, name: impl Into<Box<str>>) -> Self {
		self.spec(NodeTypeSpec::new(name))
	}

	pub fn spec(mut self, spec: NodeTypeSpec) -> Self {
		self.specs.push(spec);
		self
	}

	pub fn build(self) -> Result<NodeTypeSet> {
		let limit = u16::MAX as usize + 1;
		if self.specs.len() > limit {
			return Err(SyntaxError::TooManyTypes { limit });
		}

		let mut by_name = FxHashMap::default();
		let mut types = Vec::with_capacity(self.specs.len());
		for (index, spec) in self.specs.into_iter().enumerate() {
			let id = NodeTypeId(index as u16);
			if by_name.insert(spec.name.clone(), id).is_some() {
				return Err(SyntaxError::DuplicateType(spec.name.into()));
			}
			types.push(NodeType {
				id,
				name: spec.name,
				closed_by: spec.closed_by,
				opened_by: spec.opened_by,
				handle: spec.handle,
			});
		}

		Ok(NodeTypeSet { types, by_name })
	}
}
