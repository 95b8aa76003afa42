//! Runtime events handed to application callbacks.

use bytes::Bytes;

use crate::error::RuntimeError;

/// Fired whenever the webview issues a request on one of the intercepted
/// schemes.
///
/// The handler inspects [`request`](Self::request) and stores its answer with
/// [`respond`](Self::respond). An event left unanswered is served as
/// `404 Not Found`.
pub struct SchemeRequestReceived {
	/// The intercepted request, body already collected.
	pub request: http::Request<Bytes>,
	/// The response to serve, if any handler produced one.
	pub response: Option<http::Response<Bytes>>,
}

impl SchemeRequestReceived {
	pub fn new(request: http::Request<Bytes>) -> Self {
		Self {
			request,
			response: None,
		}
	}

	/// Store the response to serve for this request. A later call replaces
	/// an earlier one.
	pub fn respond(&mut self, response: http::Response<Bytes>) {
		self.response = Some(response);
	}
}

/// Navigation seam exposed to startup callbacks.
///
/// The production implementation is the embedded webview; tests substitute
/// a recording stub.
pub trait Navigate {
	/// Point the webview at the given URL.
	fn load_url(&self, url: &str) -> Result<(), RuntimeError>;
}

/// Fired once after the native window and webview exist, before the first
/// frame is processed.
pub struct ApplicationStarted<'a> {
	webview: &'a dyn Navigate,
}

impl<'a> ApplicationStarted<'a> {
	pub fn new(webview: &'a dyn Navigate) -> Self {
		Self { webview }
	}

	/// The webview of the main window.
	pub fn webview(&self) -> &dyn Navigate {
		self.webview
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unanswered_event_has_no_response() {
		// Arrange
		let request = http::Request::new(Bytes::new());

		// Act
		let event = SchemeRequestReceived::new(request);

		// Assert
		assert!(event.response.is_none());
	}

	#[test]
	fn test_later_respond_replaces_earlier() {
		// Arrange
		let mut event = SchemeRequestReceived::new(http::Request::new(Bytes::new()));
		let mut first = http::Response::new(Bytes::from_static(b"first"));
		*first.status_mut() = http::StatusCode::OK;
		let mut second = http::Response::new(Bytes::from_static(b"second"));
		*second.status_mut() = http::StatusCode::CREATED;

		// Act
		event.respond(first);
		event.respond(second);

		// Assert
		let response = event.response.unwrap();
		assert_eq!(response.status(), http::StatusCode::CREATED);
		assert_eq!(response.body().as_ref(), b"second");
	}
}
