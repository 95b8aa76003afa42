//! Translation between native webview requests and the host HTTP model.

use std::sync::Arc;

use bytes::Bytes;
use boson_http::{BodyDecoderFactory, HttpError, Request, Response, ServerGlobalsProvider};

/// Adapts the native request/response representation to the host kernel's.
///
/// Going in, headers keep their multiplicity, the raw body is carried
/// byte-for-byte, a decoded body is attached based on the content type,
/// and the server globals are reconstructed. Going out, status, headers
/// and body are copied over without transformation.
pub struct HttpAdapter {
	server: Arc<dyn ServerGlobalsProvider>,
	body: Arc<BodyDecoderFactory>,
}

impl HttpAdapter {
	pub fn new(server: Arc<dyn ServerGlobalsProvider>, body: Arc<BodyDecoderFactory>) -> Self {
		Self { server, body }
	}

	/// Builds a host request from an intercepted scheme request.
	///
	/// The native request carries an already-parsed URI, so the
	/// builder's URI validation cannot fail on this path; the `Result`
	/// mirrors the builder's signature.
	pub fn create_request(&self, native: &http::Request<Bytes>) -> Result<Request, HttpError> {
		let content_type = native
			.headers()
			.get(http::header::CONTENT_TYPE)
			.and_then(|value| value.to_str().ok());
		let decoded = self.body.decode(content_type, native.body());
		let server = self.server.globals(native);

		Request::builder()
			.method(native.method().clone())
			.uri(native.uri().clone())
			.version(native.version())
			.headers(native.headers().clone())
			.body(native.body().clone())
			.decoded(decoded)
			.server(server)
			.build()
	}

	/// Builds a native response from the kernel's response.
	pub fn create_response(&self, response: &Response) -> http::Response<Bytes> {
		let mut native = http::Response::new(response.body.clone());
		*native.status_mut() = response.status;
		*native.headers_mut() = response.headers.clone();
		native
	}
}
