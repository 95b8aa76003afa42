//! Configuration error types.

/// Errors raised while loading or validating the bridge configuration.
///
/// Validation errors are fatal at boot: the bridge refuses to start on
/// a partially valid configuration.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The configuration file could not be read.
	#[error("failed to read configuration file '{path}': {source}")]
	Read {
		path: std::path::PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The raw configuration could not be parsed.
	#[error("failed to parse configuration: {0}")]
	Parse(#[from] toml::de::Error),

	/// A string field that must not be empty was empty.
	#[error("configuration field '{0}' must not be empty")]
	EmptyField(&'static str),

	/// A list field that must not be empty was empty.
	#[error("configuration list '{0}' must contain at least one entry")]
	EmptyList(&'static str),

	/// An integer field was outside its allowed range.
	#[error("configuration field '{field}' must be {constraint}, got {value}")]
	OutOfRange {
		field: &'static str,
		constraint: &'static str,
		value: i64,
	},
}
