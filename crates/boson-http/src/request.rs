//! Host-side HTTP request representation.

use std::collections::HashMap;

use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};

use crate::body::DecodedBody;
use crate::error::{HttpError, Result};

/// An HTTP request as seen by the host kernel.
///
/// Built by the bridge's HTTP adapter from a native scheme request:
/// headers keep their multiplicity, the raw body is carried
/// byte-for-byte, and a decoded form of the body plus the server
/// globals are attached alongside.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	/// Structured form of the body, selected by content type.
	pub decoded: DecodedBody,
	/// Reconstructed server environment for this request.
	pub server: HashMap<String, String>,
}

impl Request {
	/// Creates a builder for a request.
	///
	/// # Examples
	///
	/// ```
	/// use boson_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::GET)
	///     .uri("boson://localhost/")
	///     .build()
	///     .unwrap();
	/// assert_eq!(request.uri.path(), "/");
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}

	/// Returns the request path.
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Returns the raw query string, if any.
	pub fn query(&self) -> Option<&str> {
		self.uri.query()
	}

	/// Returns the `Content-Type` header value, if any.
	pub fn content_type(&self) -> Option<&str> {
		self.headers
			.get(hyper::header::CONTENT_TYPE)
			.and_then(|value| value.to_str().ok())
	}
}

/// Builder for [`Request`].
#[derive(Debug, Default)]
pub struct RequestBuilder {
	method: Method,
	uri: Option<Uri>,
	invalid_uri: Option<String>,
	version: Version,
	headers: HeaderMap,
	body: Bytes,
	decoded: DecodedBody,
	server: HashMap<String, String>,
}

impl RequestBuilder {
	/// Sets the request method.
	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	/// Sets the request URI.
	pub fn uri<T>(mut self, uri: T) -> Self
	where
		Uri: TryFrom<T>,
		<Uri as TryFrom<T>>::Error: std::fmt::Display,
	{
		match Uri::try_from(uri) {
			Ok(uri) => self.uri = Some(uri),
			Err(error) => self.invalid_uri = Some(error.to_string()),
		}
		self
	}

	/// Sets the HTTP version.
	pub fn version(mut self, version: Version) -> Self {
		self.version = version;
		self
	}

	/// Replaces the full header map.
	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	/// Appends a single header, preserving multiplicity.
	pub fn header(mut self, name: hyper::header::HeaderName, value: hyper::header::HeaderValue) -> Self {
		self.headers.append(name, value);
		self
	}

	/// Sets the raw body.
	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Sets the decoded body.
	pub fn decoded(mut self, decoded: DecodedBody) -> Self {
		self.decoded = decoded;
		self
	}

	/// Sets the server globals.
	pub fn server(mut self, server: HashMap<String, String>) -> Self {
		self.server = server;
		self
	}

	/// Builds the request.
	///
	/// # Errors
	///
	/// Returns [`HttpError::MissingUri`] when no URI was supplied and
	/// [`HttpError::InvalidUri`] when the supplied URI failed to parse.
	pub fn build(self) -> Result<Request> {
		if let Some(message) = self.invalid_uri {
			return Err(HttpError::InvalidUri(message));
		}

		Ok(Request {
			method: self.method,
			uri: self.uri.ok_or(HttpError::MissingUri)?,
			version: self.version,
			headers: self.headers,
			body: self.body,
			decoded: self.decoded,
			server: self.server,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hyper::header::{HeaderName, HeaderValue};
	use rstest::rstest;

	#[rstest]
	fn test_builder_defaults() {
		// Act
		let request = Request::builder()
			.uri("boson://localhost/index.html?tab=1")
			.build()
			.unwrap();

		// Assert
		assert_eq!(request.method, Method::GET);
		assert_eq!(request.version, Version::HTTP_11);
		assert_eq!(request.path(), "/index.html");
		assert_eq!(request.query(), Some("tab=1"));
		assert!(request.body.is_empty());
		assert_eq!(request.decoded, DecodedBody::None);
		assert!(request.server.is_empty());
	}

	#[rstest]
	fn test_builder_without_uri_fails() {
		// Act
		let result = Request::builder().method(Method::POST).build();

		// Assert
		assert!(matches!(result, Err(HttpError::MissingUri)));
	}

	#[rstest]
	fn test_builder_with_invalid_uri_fails() {
		// Act
		let result = Request::builder().uri("not a uri").build();

		// Assert
		assert!(matches!(result, Err(HttpError::InvalidUri(_))));
	}

	#[rstest]
	fn test_header_appending_preserves_multiplicity() {
		// Arrange
		let accept = HeaderName::from_static("accept");

		// Act
		let request = Request::builder()
			.uri("boson://localhost/")
			.header(accept.clone(), HeaderValue::from_static("text/html"))
			.header(accept.clone(), HeaderValue::from_static("application/json"))
			.build()
			.unwrap();

		// Assert
		let values: Vec<_> = request.headers.get_all(&accept).iter().collect();
		assert_eq!(values.len(), 2);
	}

	#[rstest]
	fn test_content_type_accessor() {
		// Act
		let request = Request::builder()
			.uri("boson://localhost/submit")
			.header(
				hyper::header::CONTENT_TYPE,
				HeaderValue::from_static("application/x-www-form-urlencoded"),
			)
			.build()
			.unwrap();

		// Assert
		assert_eq!(
			request.content_type(),
			Some("application/x-www-form-urlencoded")
		);
	}
}
