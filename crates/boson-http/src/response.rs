//! Host-side HTTP response representation.

use bytes::Bytes;
use hyper::{HeaderMap, StatusCode};

/// An HTTP response produced by the host kernel.
///
/// Translated back into the native response representation by the
/// bridge's HTTP adapter; status, headers and body are carried over
/// without transformation.
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Creates a response with the given status code.
	///
	/// # Examples
	///
	/// ```
	/// use boson_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::new(StatusCode::ACCEPTED);
	/// assert_eq!(response.status, StatusCode::ACCEPTED);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// Creates a response with HTTP 200 OK status.
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Creates a response with HTTP 404 Not Found status.
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	/// Creates a response with HTTP 500 Internal Server Error status.
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// Sets the response body.
	///
	/// # Examples
	///
	/// ```
	/// use boson_http::Response;
	/// use bytes::Bytes;
	///
	/// let response = Response::ok().with_body("Hello, Boson!");
	/// assert_eq!(response.body, Bytes::from("Hello, Boson!"));
	/// ```
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Appends a header to the response, preserving multiplicity.
	///
	/// Invalid header names or values are silently dropped.
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let Ok(name) = hyper::header::HeaderName::from_bytes(name.as_bytes())
			&& let Ok(value) = hyper::header::HeaderValue::from_str(value)
		{
			self.headers.append(name, value);
		}
		self
	}

	/// Appends a header using typed name and value.
	pub fn with_typed_header(
		mut self,
		name: hyper::header::HeaderName,
		value: hyper::header::HeaderValue,
	) -> Self {
		self.headers.append(name, value);
		self
	}
}
