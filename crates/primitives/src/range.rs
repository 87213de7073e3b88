/// Scan or selection direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Towards the end of the document.
	Forward,
	/// Towards the start of the document.
	Backward,
}

impl Direction {
	/// Returns the opposite direction.
	#[inline]
	pub fn reverse(self) -> Self {
		match self {
			Self::Forward => Self::Backward,
			Self::Backward => Self::Forward,
		}
	}
}

/// A char offset into a document.
///
/// Offsets sit between chars, so a document of `n` chars has offsets `0..=n`.
pub type CharIdx = usize;

/// A count of chars: a document length, or a scan distance.
pub type CharLen = usize;

/// A half-open extent `[from, to)` of a token in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
	pub from: CharIdx,
	pub to: CharIdx,
}

impl Span {
	/// Creates a span, ordering the endpoints if they were given reversed.
	pub fn new(from: CharIdx, to: CharIdx) -> Self {
		if from <= to { Self { from, to } } else { Self { from: to, to: from } }
	}

	/// The single-character span starting at `pos`.
	#[inline]
	pub fn char_at(pos: CharIdx) -> Self {
		Self { from: pos, to: pos + 1 }
	}

	#[inline]
	pub fn len(&self) -> CharLen {
		self.to - self.from
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.from == self.to
	}

	/// Returns true if `pos` touches this span from the side a scan in `dir` leaves from.
	///
	/// Forward scans need the position at or inside the start (`from <= pos < to`);
	/// backward scans need it inside or at the end (`from < pos <= to`).
	#[inline]
	pub fn touches(&self, pos: CharIdx, dir: Direction) -> bool {
		match dir {
			Direction::Forward => self.from <= pos && pos < self.to,
			Direction::Backward => self.from < pos && pos <= self.to,
		}
	}
}

/// A selection range: `anchor` stays put while `head` follows the cursor.
///
/// The two ends may be in either order. A range whose ends coincide is a
/// collapsed cursor, the only kind bracket matching looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Range {
	pub anchor: CharIdx,
	pub head: CharIdx,
}

impl Range {
	pub fn new(anchor: CharIdx, head: CharIdx) -> Self {
		Self { anchor, head }
	}

	/// A collapsed cursor at `pos`.
	pub fn point(pos: CharIdx) -> Self {
		Self::new(pos, pos)
	}

	#[inline]
	pub fn min(&self) -> CharIdx {
		self.anchor.min(self.head)
	}

	#[inline]
	pub fn max(&self) -> CharIdx {
		self.anchor.max(self.head)
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.head
	}

	/// `Backward` when the head sits before the anchor.
	#[inline]
	pub fn direction(&self) -> Direction {
		if self.head < self.anchor { Direction::Backward } else { Direction::Forward }
	}

	/// The covered text, ignoring which end is the head.
	#[inline]
	pub fn span(&self) -> Span {
		Span::new(self.anchor, self.head)
	}

	/// Returns true if the ranges share text, or are cursors at one position.
	pub fn overlaps(&self, other: &Range) -> bool {
		let (a, b) = (self.span(), other.span());
		(a.from < b.to && b.from < a.to) || (a.is_empty() && a == b)
	}

	/// The smallest range covering both, facing the way `self` does.
	pub fn merge(&self, other: &Range) -> Self {
		let from = self.min().min(other.min());
		let to = self.max().max(other.max());
		match self.direction() {
			Direction::Forward => Self::new(from, to),
			Direction::Backward => Self::new(to, from),
		}
	}

	/// Pulls both ends back to at most `len`.
	pub fn clamp(&self, len: CharLen) -> Self {
		Self::new(self.anchor.min(len), self.head.min(len))
	}
}
