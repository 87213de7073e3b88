//! Read-only text sources and lazy chunk iteration.
//!
//! Bracket scans never materialise the whole buffer. They walk a
//! [`TextChunks`] iterator instead, which hands out one line of content or one
//! line break at a time, in scan order.
//!
//! # Chunk contract
//!
//! * `iter_chunks(from, to)` scans forward when `from <= to` and backward otherwise.
//! * Chunks arrive in scan order, but the text inside each chunk is always in
//!   document order. Use [`TextChunk::chars`] to walk it in a given direction.
//! * A chunk is either a maximal run of line content or a single line break
//!   (`"\r\n"` is one break), clipped to the requested range. Chunks are never
//!   empty.
//! * The iterator is finite and single-pass. It cannot be rewound; start a new
//!   one to scan again.

use ropey::iter::Chars;
use ropey::{Rope, RopeSlice};

use crate::range::{CharIdx, CharLen, Direction};


/// An immutable, char-addressed text snapshot.
///
/// Implementors only provide [`Document::text`]; every query is derived from it.
pub trait Document {
	/// Returns the whole document as a rope slice.
	fn text(&self) -> RopeSlice<'_>;

	/// Returns the document length in chars.
	#[inline]
	fn len_chars(&self) -> CharLen {
		self.text().len_chars()
	}

	/// Returns the char at `pos`, or `None` past the end.
	fn char_at(&self, pos: CharIdx) -> Option<char> {
		self.text().get_char(pos)
	}

	/// Copies the text in `[from, to)`, clamped to the document.
	fn slice_text(&self, from: CharIdx, to: CharIdx) -> String {
		let text = self.text();
		let len = text.len_chars();
		let (from, to) = (from.min(len), to.min(len));
		if from >= to {
			return String::new();
		}
		text.slice(from..to).to_string()
	}

	/// Lazily iterates the chunks between `from` and `to`.
	///
	/// Both ends are clamped to the document. The scan runs backward when
	/// `from > to`.
	fn iter_chunks(&self, from: CharIdx, to: CharIdx) -> TextChunks<'_> {
		TextChunks::new(self.text(), from, to)
	}
}

impl Document for Rope {
	fn text(&self) -> RopeSlice<'_> {
		self.slice(..)
	}
}

impl Document for RopeSlice<'_> {
	fn text(&self) -> RopeSlice<'_> {
		*self
	}
}

/// One piece of a chunked scan.
#[derive(Debug, Clone, Copy)]
pub struct TextChunk<'a> {
	/// Char offset of the first char of `text` in the document.
	pub from: CharIdx,
	pub text: RopeSlice<'a>,
}

impl<'a> TextChunk<'a> {
	#[inline]
	pub fn len(&self) -> CharLen {
		self.text.len_chars()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Document offset just past the last char.
	#[inline]
	pub fn to(&self) -> CharIdx {
		self.from + self.len()
	}

	/// Walks the chunk in `dir`, yielding each char with its document offset.
	pub fn chars(&self, dir: Direction) -> ChunkChars<'a> {
		let (chars, pos) = match dir {
			Direction::Forward => (self.text.chars(), self.from),
			Direction::Backward => (self.text.chars_at(self.len()), self.to()),
		};
		ChunkChars { chars, pos, dir }
	}
}

/// Iterator over the chars of a [`TextChunk`] in one direction.
pub struct ChunkChars<'a> {
	chars: Chars<'a>,
	/// Offset of the next char going forward, or one past it going backward.
	pos: CharIdx,
	dir: Direction,
}

impl Iterator for ChunkChars<'_> {
	type Item = (CharIdx, char);

	fn next(&mut self) -> Option<Self::Item> {
		match self.dir {
			Direction::Forward => {
				let c = self.chars.next()?;
				let at = self.pos;
				self.pos += 1;
				Some((at, c))
			}
			Direction::Backward => {
				let c = self.chars.prev()?;
				self.pos -= 1;
				Some((self.pos, c))
			}
		}
	}
}

/// Lazy, single-pass chunk iterator over a range of a document.
#[derive(Debug, Clone)]
pub struct TextChunks<'a> {
	text: RopeSlice<'a>,
	/// Boundary of the next chunk on the scan side.
	pos: CharIdx,
	/// Where the scan stops.
	end: CharIdx,
	dir: Direction,
}

impl<'a> TextChunks<'a> {
	pub fn new(text: RopeSlice<'a>, from: CharIdx, to: CharIdx) -> Self {
		let len = text.len_chars();
		let (pos, end) = (from.min(len), to.min(len));
		let dir = if pos <= end { Direction::Forward } else { Direction::Backward };
		Self { text, pos, end, dir }
	}

	fn next_forward(&mut self) -> Option<TextChunk<'a>> {
		if self.pos >= self.end {
			return None;
		}
		let start = self.pos;
		let c = self.text.char(start);
		let stop = if is_line_break(c) {
			if c == '\r' && start + 1 < self.end && self.text.char(start + 1) == '\n' {
				start + 2
			} else {
				start + 1
			}
		} else {
			let line = self.text.char_to_line(start);
			let next_line = self.text.line_to_char((line + 1).min(self.text.len_lines()));
			let mut stop = next_line.min(self.end);
			while stop > start && is_line_break(self.text.char(stop - 1)) {
				stop -= 1;
			}
			stop
		};
		self.pos = stop;
		Some(TextChunk {
			from: start,
			text: self.text.slice(start..stop),
		})
	}

	fn next_backward(&mut self) -> Option<TextChunk<'a>> {
		if self.pos <= self.end {
			return None;
		}
		let stop = self.pos;
		let c = self.text.char(stop - 1);
		let start = if is_line_break(c) {
			if c == '\n' && stop >= self.end + 2 && self.text.char(stop - 2) == '\r' {
				stop - 2
			} else {
				stop - 1
			}
		} else {
			let line = self.text.char_to_line(stop - 1);
			self.text.line_to_char(line).max(self.end)
		};
		self.pos = start;
		Some(TextChunk {
			from: start,
			text: self.text.slice(start..stop),
		})
	}
}

impl<'a> Iterator for TextChunks<'a> {
	type Item = TextChunk<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		match self.dir {
			Direction::Forward => self.next_forward(),
			Direction::Backward => self.next_backward(),
		}
	}
}

/// Chars that ropey treats as line breaks.
#[inline]
fn is_line_break(c: char) -> bool {
	matches!(c, '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}
