//! Syntax trees for bracket matching.
//!
//! A [`SyntaxTree`] is an arena of nodes addressed by [`NodeId`]. Node types
//! live in a shared [`NodeTypeSet`], which also carries the bracket metadata
//! the matcher consults: which type names close or open a type, and an
//! optional handle function that narrows a large node (a tag, say) to the part
//! the cursor must touch.
//!
//! Parsers are external. They describe their output through a [`TreeBuilder`].

mod builder;
mod error;
mod tree;
mod types;

#[cfg(test)]
mod tests;

pub use builder::TreeBuilder;
pub use error::{Result, SyntaxError};
pub use tree::{Ancestors, Children, NodeId, Side, SyntaxTree};
pub use types::{HandleFn, NodeType, NodeTypeId, NodeTypeSet, NodeTypeSetBuilder, NodeTypeSpec};
