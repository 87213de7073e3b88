//! Core text types for bracket matching: ranges, spans, selections, and documents.

/// Read-only text sources and their lazy chunk iterators.
pub mod document;
/// Text range types measured in chars.
pub mod range;
/// Selection types for single and multi-cursor editing.
pub mod selection;

pub use document::{Document, TextChunk, TextChunks};
pub use range::{CharIdx, CharLen, Direction, Range, Span};
pub use ropey::{Rope, RopeSlice};
pub use selection::Selection;
