//! HTTP bridge error types.

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, HttpError>;

/// Errors raised by the HTTP object model and its collaborators.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
	/// A request was built without a URI.
	#[error("request URI is required")]
	MissingUri,

	/// A request URI could not be parsed.
	#[error("invalid request URI: {0}")]
	InvalidUri(String),

	/// A body decoder failed to parse a body it claimed to support.
	#[error("failed to decode '{content_type}' body: {message}")]
	BodyDecode {
		content_type: String,
		message: String,
	},

	/// The host kernel failed to answer a request.
	#[error("kernel error: {0}")]
	Kernel(String),
}
