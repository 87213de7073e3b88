use pairlight_primitives::Span;

/// The outcome of a bracket query that found a token.
///
/// Queries that find no token at all (or give up at the scan bound) return
/// `None` instead of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchResult {
	/// The extent of the bracket token found at the query position.
	pub start: Span,
	/// The extent of the counterpart token, if one was found.
	pub end: Option<Span>,
	/// Whether `start` and `end` form a correct pair.
	///
	/// Can be false even when `end` is present: that token closes (or opens)
	/// a different kind of bracket.
	pub matched: bool,
}

impl MatchResult {
	pub fn matched(start: Span, end: Span) -> Self {
		Self {
			start,
			end: Some(end),
			matched: true,
		}
	}

	/// A token whose scan ran into the document boundary without a partner.
	pub fn unmatched(start: Span) -> Self {
		Self {
			start,
			end: None,
			matched: false,
		}
	}

	/// A token closed by a partner of the wrong identity.
	pub fn mismatched(start: Span, end: Option<Span>) -> Self {
		Self {
			start,
			end,
			matched: false,
		}
	}

	/// The start span followed by the end span, if any.
	pub fn spans(&self) -> impl Iterator<Item = Span> {
		std::iter::once(self.start).chain(self.end)
	}
}
