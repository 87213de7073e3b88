//! Error types for bracket matching configuration.

use thiserror::Error;

/// Errors that can occur when building or loading a [`BracketConfig`](crate::BracketConfig).
///
/// Matching itself never fails; these only guard configuration input.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// The bracket list was empty.
	#[error("bracket list must not be empty")]
	EmptyBrackets,

	/// The bracket list cannot be read as open/close pairs.
	#[error("bracket list {0:?} has an odd number of characters")]
	UnpairedBrackets(String),

	/// The scan bound must allow at least one character.
	#[error("max-scan-distance must be greater than zero")]
	ZeroScanDistance,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
