use pairlight_primitives::Direction;
use serde::Deserialize;

use crate::error::ConfigError;

/// Default bracket pairs: parentheses, square brackets, and braces.
pub const DEFAULT_BRACKETS: &str = "()[]{}";

/// An ordered table of bracket chars read two at a time as `(open, close)`.
///
/// Even indices are openers, odd indices closers, and `index / 2` identifies
/// the pair. Lookups use the first occurrence of a char.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct PairTable {
	chars: Vec<char>,
}

impl PairTable {
	pub fn new(brackets: &str) -> Result<Self, ConfigError> {
		let chars: Vec<char> = brackets.chars().collect();
		if chars.is_empty() {
			return Err(ConfigError::EmptyBrackets);
		}
		if chars.len() % 2 != 0 {
			return Err(ConfigError::UnpairedBrackets(brackets.to_string()));
		}
		Ok(Self { chars })
	}

	/// Position of `c` in the table.
	#[inline]
	pub fn index_of(&self, c: char) -> Option<usize> {
		self.chars.iter().position(|&b| b == c)
	}

	/// Which way a scan starting at the table entry `index` runs.
	#[inline]
	pub fn direction_of(index: usize) -> Direction {
		if index % 2 == 0 { Direction::Forward } else { Direction::Backward }
	}

	/// Returns true if the entries at `a` and `b` belong to the same pair.
	#[inline]
	pub fn same_pair(a: usize, b: usize) -> bool {
		a / 2 == b / 2
	}

	/// The char that pairs with `c` when a scan leaves `c` in `dir`.
	///
	/// `None` if `c` is not in the table, or is an opener asked about a
	/// backward scan (or a closer asked about a forward one).
	pub fn counterpart(&self, c: char, dir: Direction) -> Option<char> {
		let index = self.index_of(c)?;
		if Self::direction_of(index) != dir {
			return None;
		}
		let other = match dir {
			Direction::Forward => index + 1,
			Direction::Backward => index - 1,
		};
		self.chars.get(other).copied()
	}
}

impl Default for PairTable {
	fn default() -> Self {
		Self {
			chars: DEFAULT_BRACKETS.chars().collect(),
		}
	}
}

impl TryFrom<String> for PairTable {
	type Error = ConfigError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(&value)
	}
}

impl std::fmt::Display for PairTable {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.chars.iter().try_for_each(|c| write!(f, "{c}"))
	}
}
