//! Server-globals providers.
//!
//! A globals provider reconstructs the host framework's ambient
//! "server environment" (CGI-style `REQUEST_METHOD`, `HTTP_*` keys and
//! friends) from a native scheme request. Providers compose through
//! [`CompoundServerGlobalsProvider`], which merges them in a fixed
//! order.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use http::Request;

/// Rebuilds the ambient server environment from a native request.
pub trait ServerGlobalsProvider: Send + Sync {
	/// Returns the globals this provider contributes for `request`.
	fn globals(&self, request: &Request<Bytes>) -> HashMap<String, String>;
}

/// Provider for process-constant globals, computed once at construction.
pub struct StaticServerGlobalsProvider {
	entries: HashMap<String, String>,
}

impl StaticServerGlobalsProvider {
	pub fn new() -> Self {
		let mut entries = HashMap::new();
		entries.insert(
			"SERVER_SOFTWARE".to_string(),
			format!("boson-bridge/{}", env!("CARGO_PKG_VERSION")),
		);
		entries.insert("SERVER_NAME".to_string(), "localhost".to_string());
		entries.insert("SERVER_PORT".to_string(), "0".to_string());
		entries.insert("GATEWAY_INTERFACE".to_string(), "CGI/1.1".to_string());

		Self { entries }
	}
}

impl Default for StaticServerGlobalsProvider {
	fn default() -> Self {
		Self::new()
	}
}

impl ServerGlobalsProvider for StaticServerGlobalsProvider {
	fn globals(&self, _request: &Request<Bytes>) -> HashMap<String, String> {
		self.entries.clone()
	}
}

/// Provider for per-request globals derived from the request line,
/// headers and body metadata.
#[derive(Default)]
pub struct DefaultServerGlobalsProvider;

impl ServerGlobalsProvider for DefaultServerGlobalsProvider {
	fn globals(&self, request: &Request<Bytes>) -> HashMap<String, String> {
		let mut entries = HashMap::new();

		entries.insert("REQUEST_METHOD".to_string(), request.method().to_string());

		let uri = request.uri();
		let request_uri = match uri.query() {
			Some(query) => format!("{}?{}", uri.path(), query),
			None => uri.path().to_string(),
		};
		entries.insert("REQUEST_URI".to_string(), request_uri);
		entries.insert(
			"QUERY_STRING".to_string(),
			uri.query().unwrap_or_default().to_string(),
		);
		entries.insert(
			"SERVER_PROTOCOL".to_string(),
			format!("{:?}", request.version()),
		);
		entries.insert(
			"CONTENT_LENGTH".to_string(),
			request.body().len().to_string(),
		);

		for name in request.headers().keys() {
			let value = request
				.headers()
				.get_all(name)
				.iter()
				.filter_map(|value| value.to_str().ok())
				.collect::<Vec<_>>()
				.join(", ");

			let key = name.as_str().to_ascii_uppercase().replace('-', "_");

			// CONTENT_TYPE and CONTENT_LENGTH keep their CGI names
			// without the HTTP_ prefix.
			let key = match key.as_str() {
				"CONTENT_TYPE" | "CONTENT_LENGTH" => key,
				_ => format!("HTTP_{key}"),
			};

			entries.insert(key, value);
		}

		entries
	}
}

/// Ordered aggregate over globals providers.
///
/// Providers are merged in registration order; a later provider
/// overrides keys an earlier one contributed.
pub struct CompoundServerGlobalsProvider {
	providers: Vec<Arc<dyn ServerGlobalsProvider>>,
}

impl CompoundServerGlobalsProvider {
	pub fn new(providers: Vec<Arc<dyn ServerGlobalsProvider>>) -> Self {
		Self { providers }
	}

	/// The stock composition: static base values with the per-request
	/// defaults merged on top.
	pub fn with_defaults() -> Self {
		Self::new(vec![
			Arc::new(StaticServerGlobalsProvider::new()),
			Arc::new(DefaultServerGlobalsProvider),
		])
	}
}

impl ServerGlobalsProvider for CompoundServerGlobalsProvider {
	fn globals(&self, request: &Request<Bytes>) -> HashMap<String, String> {
		let mut merged = HashMap::new();

		for provider in &self.providers {
			merged.extend(provider.globals(request));
		}

		merged
	}
}
