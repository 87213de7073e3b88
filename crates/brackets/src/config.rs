//! Bracket matching configuration.
//!
//! A [`BracketConfig`] is resolved once by the host and passed to every query.
//! It can be built in code or loaded from TOML:
//!
//! ```toml
//! after-cursor = false
//! brackets = "()[]{}<>"
//! directional = false
//! enclosing = false
//! max-scan-distance = 5000
//! ```
//!
//! Omitted keys take their defaults. The render callback can only be set in
//! code.

use pairlight_primitives::CharLen;
use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::pairs::PairTable;
use crate::render::RenderMatch;

/// Default bound on how far plain-text scans may look, in chars.
pub const DEFAULT_MAX_SCAN_DISTANCE: CharLen = 10_000;

/// Which queries the cursor policy issues for each collapsed cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
	/// One enclosing-pair query.
	Enclosing,
	/// A backward query and a forward query, both kept.
	Directional,
	/// The legacy fallback chain around the cursor, first hit wins.
	NonDirectional,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct BracketConfig {
	/// In non-directional mode, also try the bracket after the cursor.
	pub after_cursor: bool,
	/// Bracket chars used when the syntax tree has no pairing metadata.
	pub brackets: PairTable,
	/// Closers match only before the cursor and openers only after it.
	/// Overrides `after_cursor`.
	pub directional: bool,
	/// Highlight the innermost pair around the cursor instead.
	/// Overrides `directional` and `after_cursor`.
	pub enclosing: bool,
	/// How far scans may look before giving up, in chars.
	pub max_scan_distance: CharLen,
	#[serde(skip)]
	pub render_match: RenderMatch,
}

impl Default for BracketConfig {
	fn default() -> Self {
		Self {
			after_cursor: true,
			brackets: PairTable::default(),
			directional: true,
			enclosing: false,
			max_scan_distance: DEFAULT_MAX_SCAN_DISTANCE,
			render_match: RenderMatch::default(),
		}
	}
}

impl BracketConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		if self.max_scan_distance == 0 {
			return Err(ConfigError::ZeroScanDistance);
		}
		Ok(())
	}

	/// The active mode, by priority: enclosing, then directional.
	pub fn mode(&self) -> MatchMode {
		if self.enclosing {
			MatchMode::Enclosing
		} else if self.directional {
			MatchMode::Directional
		} else {
			MatchMode::NonDirectional
		}
	}

	pub fn with_brackets(mut self, brackets: &str) -> Result<Self> {
		self.brackets = PairTable::new(brackets)?;
		Ok(self)
	}

	pub fn with_max_scan_distance(mut self, distance: CharLen) -> Result<Self> {
		if distance == 0 {
			return Err(ConfigError::ZeroScanDistance);
		}
		self.max_scan_distance = distance;
		Ok(self)
	}

	pub fn with_mode(mut self, mode: MatchMode) -> Self {
		self.enclosing = mode == MatchMode::Enclosing;
		self.directional = mode == MatchMode::Directional;
		self
	}

	pub fn with_after_cursor(mut self, after_cursor: bool) -> Self {
		self.after_cursor = after_cursor;
		self
	}

	pub fn with_render_match(mut self, render_match: RenderMatch) -> Self {
		self.render_match = render_match;
		self
	}
}
