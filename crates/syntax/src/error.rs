//! Error types for tree and type-table construction.

use pairlight_primitives::CharIdx;
use thiserror::Error;

/// Errors raised while building a [`NodeTypeSet`](crate::NodeTypeSet) or a
/// [`SyntaxTree`](crate::SyntaxTree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
	/// Two node types were registered under the same name.
	#[error("duplicate node type name: {0}")]
	DuplicateType(String),

	/// A node referenced a type name the set does not contain.
	#[error("unknown node type: {0}")]
	UnknownType(String),

	/// The type set grew past the id space.
	#[error("too many node types (limit {limit})")]
	TooManyTypes {
		/// Largest number of types a set can hold.
		limit: usize,
	},

	/// A node ended before it started.
	#[error("inverted node range {from}..{to}")]
	InvertedRange { from: CharIdx, to: CharIdx },

	/// A node does not nest within its parent.
	#[error("node {name} at {from}..{to} lies outside its parent {parent_from}..{parent_to}")]
	OutsideParent {
		name: String,
		from: CharIdx,
		to: CharIdx,
		parent_from: CharIdx,
		parent_to: CharIdx,
	},

	/// A node starts before its previous sibling ends.
	#[error("node {name} starting at {from} overlaps its previous sibling ending at {prev_to}")]
	OverlapsSibling { name: String, from: CharIdx, prev_to: CharIdx },

	/// `finish` was called with only the root open.
	#[error("finish called with no open node")]
	NothingToFinish,

	/// `build` was called while nodes were still open.
	#[error("{0} node(s) left open at build")]
	Unclosed(usize),
}

/// Result type for syntax construction.
pub type Result<T> = std::result::Result<T, SyntaxError>;
