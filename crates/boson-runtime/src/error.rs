use thiserror::Error;

/// Errors raised while creating or driving the native runtime.
#[derive(Debug, Error)]
pub enum RuntimeError {
	/// The native window could not be created.
	#[error("failed to create window: {0}")]
	WindowCreation(String),

	/// The embedded webview could not be created.
	#[error("failed to create webview: {0}")]
	WebViewCreation(String),

	/// The webview rejected a navigation request.
	#[error("failed to navigate webview to {url}: {message}")]
	Navigation { url: String, message: String },
}
