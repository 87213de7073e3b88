use smallvec::{SmallVec, smallvec};

use crate::range::{CharIdx, CharLen, Range};


/// One or more ranges, sorted and non-overlapping, one of them primary.
///
/// Every range is a cursor as far as bracket matching is concerned, but only
/// collapsed ones are queried; see [`Selection::cursor_heads`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
	ranges: SmallVec<[Range; 1]>,
	primary: usize,
}

impl Selection {
	/// Builds a selection from a primary range and any number of others.
	///
	/// Ranges are sorted; overlapping ones and repeated cursors are merged,
	/// and the primary follows whichever range absorbed it.
	pub fn new(primary: Range, others: impl IntoIterator<Item = Range>) -> Self {
		let mut ranges: SmallVec<[Range; 1]> = smallvec![primary];
		ranges.extend(others);
		let mut sel = Self { ranges, primary: 0 };
		sel.normalize();
		sel
	}

	pub fn single(anchor: CharIdx, head: CharIdx) -> Self {
		Self::from(Range::new(anchor, head))
	}

	/// A lone collapsed cursor.
	pub fn point(pos: CharIdx) -> Self {
		Self::from(Range::point(pos))
	}

	/// Collapsed cursors at each position; the first one is primary.
	///
	/// `None` for an empty iterator, since a selection can't be empty.
	pub fn cursors(positions: impl IntoIterator<Item = CharIdx>) -> Option<Self> {
		let mut points = positions.into_iter().map(Range::point);
		let primary = points.next()?;
		Some(Self::new(primary, points))
	}

	pub fn primary(&self) -> Range {
		self.ranges[self.primary]
	}

	pub fn primary_index(&self) -> usize {
		self.primary
	}

	pub fn ranges(&self) -> &[Range] {
		&self.ranges
	}

	#[allow(clippy::len_without_is_empty, reason = "a selection holds at least one range")]
	pub fn len(&self) -> usize {
		self.ranges.len()
	}

	/// Positions of the collapsed cursors, in document order.
	pub fn cursor_heads(&self) -> impl Iterator<Item = CharIdx> + '_ {
		self.ranges.iter().filter(|r| r.is_empty()).map(|r| r.head)
	}

	pub fn push(&mut self, range: Range) {
		self.ranges.push(range);
		self.normalize();
	}

	/// Pulls every range back inside a document of `len` chars.
	pub fn clamp(&mut self, len: CharLen) {
		for range in &mut self.ranges {
			*range = range.clamp(len);
		}
		self.normalize();
	}

	/// Sorts by start and folds overlapping ranges together.
	///
	/// Touching ranges such as `0..5` and `5..10` stay apart.
	fn normalize(&mut self) {
		if self.ranges.len() < 2 {
			return;
		}

		let mut tagged: SmallVec<[(Range, bool); 4]> =
			self.ranges.iter().enumerate().map(|(i, &r)| (r, i == self.primary)).collect();
		tagged.sort_by_key(|(r, _)| r.min());

		let mut out: SmallVec<[Range; 1]> = SmallVec::with_capacity(tagged.len());
		let mut primary = 0;
		for (range, is_primary) in tagged {
			match out.last_mut() {
				Some(last) if last.overlaps(&range) => *last = last.merge(&range),
				_ => out.push(range),
			}
			if is_primary {
				primary = out.len() - 1;
			}
		}

		self.ranges = out;
		self.primary = primary;
	}
}

impl Default for Selection {
	fn default() -> Self {
		Self::point(0)
	}
}

impl From<Range> for Selection {
	fn from(range: Range) -> Self {
		Self {
			ranges: smallvec![range],
			primary: 0,
		}
	}
}
