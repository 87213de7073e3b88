//! Bracket classification for structural tokens.

use pairlight_primitives::Direction;
use pairlight_syntax::NodeType;

use crate::pairs::PairTable;

/// The token identities that can close (or open) a classified bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counterparts<'a> {
	/// Type names declared by the node type's metadata.
	Names(&'a [Box<str>]),
	/// The single partner char from the pair table.
	Char(char),
}

impl Counterparts<'_> {
	/// Returns true if a token named `name` completes the pair.
	pub fn contains(&self, name: &str) -> bool {
		match *self {
			Self::Names(names) => names.iter().any(|n| &**n == name),
			Self::Char(c) => single_char(name) == Some(c),
		}
	}
}

/// Classifies a node type as a bracket scanning in `dir`.
///
/// Declared metadata wins. Types without it fall back to the pair table when
/// their name is a single char of the right parity; anything else is not a
/// bracket.
pub fn classify<'a>(ty: &'a NodeType, dir: Direction, pairs: &PairTable) -> Option<Counterparts<'a>> {
	if let Some(names) = ty.counterparts(dir) {
		return Some(Counterparts::Names(names));
	}
	let c = single_char(ty.name())?;
	pairs.counterpart(c, dir).map(Counterparts::Char)
}

fn single_char(s: &str) -> Option<char> {
	let mut chars = s.chars();
	match (chars.next(), chars.next()) {
		(Some(c), None) => Some(c),
		_ => None,
	}
}
