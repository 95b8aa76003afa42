//! Static provider error types.

use std::path::PathBuf;

/// Errors raised while resolving static files.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StaticError {
	/// The request path escapes the configured root directories.
	#[error("request path '{0}' escapes the static root")]
	PathTraversal(String),

	/// A resolved file could not be read.
	#[error("failed to read static file '{path}': {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}
