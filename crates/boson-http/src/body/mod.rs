//! Request body decoding keyed by content type.
//!
//! Decoders implement [`BodyDecoder`] and are aggregated by
//! [`BodyDecoderFactory`] in a fixed order; the first decoder claiming
//! a content type wins. A content type no decoder claims is not an
//! error: the body is kept raw.

pub mod form;
pub mod multipart;

use std::sync::Arc;

use bytes::Bytes;

use crate::error::Result;

pub use form::FormUrlEncodedDecoder;
pub use multipart::MultipartFormDataDecoder;

/// The structured form of a request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DecodedBody {
	/// The request carried no body.
	#[default]
	None,
	/// The body was kept raw: unknown content type or decode failure.
	Raw(Bytes),
	/// `application/x-www-form-urlencoded` fields, in document order.
	Form(Vec<(String, String)>),
	/// `multipart/form-data` fields and uploaded files.
	Multipart {
		fields: Vec<(String, String)>,
		files: Vec<UploadedFile>,
	},
}

/// A file extracted from a multipart body.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
	/// The form field name.
	pub name: String,
	/// The client-supplied file name, if any.
	pub filename: Option<String>,
	/// The part's content type, if any.
	pub content_type: Option<String>,
	/// The file contents.
	pub data: Bytes,
}

/// Parses a raw request body of a specific content type.
pub trait BodyDecoder: Send + Sync {
	/// Whether this decoder handles `content_type`.
	fn supports(&self, content_type: &str) -> bool;

	/// Decodes `body`.
	///
	/// # Errors
	///
	/// Returns an error when the body does not match the content type
	/// it advertises; the factory degrades such bodies to raw.
	fn decode(&self, content_type: &str, body: &Bytes) -> Result<DecodedBody>;
}

/// Ordered aggregate over [`BodyDecoder`]s.
pub struct BodyDecoderFactory {
	decoders: Vec<Arc<dyn BodyDecoder>>,
}

impl BodyDecoderFactory {
	/// Creates a factory over `decoders`, consulted in order.
	pub fn new(decoders: Vec<Arc<dyn BodyDecoder>>) -> Self {
		Self { decoders }
	}

	/// Creates a factory with the stock decoders: form-url-encoded and
	/// multipart form data.
	pub fn with_defaults() -> Self {
		Self::new(vec![
			Arc::new(FormUrlEncodedDecoder),
			Arc::new(MultipartFormDataDecoder),
		])
	}

	/// Decodes a body by content type.
	///
	/// Never fails: an empty body is [`DecodedBody::None`], and an
	/// unknown content type or a decoder failure leaves the body raw.
	pub fn decode(&self, content_type: Option<&str>, body: &Bytes) -> DecodedBody {
		if body.is_empty() {
			return DecodedBody::None;
		}

		let Some(content_type) = content_type else {
			return DecodedBody::Raw(body.clone());
		};

		for decoder in &self.decoders {
			if !decoder.supports(content_type) {
				continue;
			}

			return match decoder.decode(content_type, body) {
				Ok(decoded) => decoded,
				Err(error) => {
					tracing::warn!(content_type, %error, "body decode failed, keeping raw body");
					DecodedBody::Raw(body.clone())
				}
			};
		}

		DecodedBody::Raw(body.clone())
	}
}

/// Strips content-type parameters, yielding the bare media type.
pub(crate) fn media_type(content_type: &str) -> &str {
	content_type
		.split(';')
		.next()
		.unwrap_or(content_type)
		.trim()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::HttpError;
	use rstest::rstest;

	#[rstest]
	fn test_empty_body_decodes_to_none() {
		// Arrange
		let factory = BodyDecoderFactory::with_defaults();

		// Act
		let decoded = factory.decode(Some("application/x-www-form-urlencoded"), &Bytes::new());

		// Assert
		assert_eq!(decoded, DecodedBody::None);
	}

	#[rstest]
	fn test_missing_content_type_keeps_raw_body() {
		// Arrange
		let factory = BodyDecoderFactory::with_defaults();
		let body = Bytes::from_static(b"\x00\x01\x02");

		// Act
		let decoded = factory.decode(None, &body);

		// Assert
		assert_eq!(decoded, DecodedBody::Raw(body));
	}

	#[rstest]
	fn test_unknown_content_type_keeps_raw_body() {
		// Arrange
		let factory = BodyDecoderFactory::with_defaults();
		let body = Bytes::from_static(b"{\"a\":1}");

		// Act
		let decoded = factory.decode(Some("application/vnd.custom+json"), &body);

		// Assert
		assert_eq!(decoded, DecodedBody::Raw(body));
	}

	#[rstest]
	fn test_form_content_type_selects_form_decoder() {
		// Arrange
		let factory = BodyDecoderFactory::with_defaults();
		let body = Bytes::from_static(b"a=1&b=two");

		// Act
		let decoded = factory.decode(Some("application/x-www-form-urlencoded"), &body);

		// Assert
		assert_eq!(
			decoded,
			DecodedBody::Form(vec![
				("a".to_string(), "1".to_string()),
				("b".to_string(), "two".to_string()),
			])
		);
	}

	struct FailingDecoder;

	impl BodyDecoder for FailingDecoder {
		fn supports(&self, _content_type: &str) -> bool {
			true
		}

		fn decode(&self, content_type: &str, _body: &Bytes) -> Result<DecodedBody> {
			Err(HttpError::BodyDecode {
				content_type: content_type.to_string(),
				message: "always fails".to_string(),
			})
		}
	}

	#[rstest]
	fn test_decoder_failure_degrades_to_raw() {
		// Arrange
		let factory = BodyDecoderFactory::new(vec![Arc::new(FailingDecoder)]);
		let body = Bytes::from_static(b"payload");

		// Act
		let decoded = factory.decode(Some("text/anything"), &body);

		// Assert
		assert_eq!(decoded, DecodedBody::Raw(body));
	}

	#[rstest]
	fn test_first_supporting_decoder_wins() {
		// Arrange
		struct Tagging(&'static str);

		impl BodyDecoder for Tagging {
			fn supports(&self, _content_type: &str) -> bool {
				true
			}

			fn decode(&self, _content_type: &str, _body: &Bytes) -> Result<DecodedBody> {
				Ok(DecodedBody::Form(vec![(self.0.to_string(), String::new())]))
			}
		}

		let factory =
			BodyDecoderFactory::new(vec![Arc::new(Tagging("first")), Arc::new(Tagging("second"))]);

		// Act
		let decoded = factory.decode(Some("text/plain"), &Bytes::from_static(b"x"));

		// Assert
		assert_eq!(
			decoded,
			DecodedBody::Form(vec![("first".to_string(), String::new())])
		);
	}

	#[rstest]
	#[case::bare("text/html", "text/html")]
	#[case::with_charset("text/html; charset=utf-8", "text/html")]
	#[case::padded("  multipart/form-data ; boundary=x", "multipart/form-data")]
	fn test_media_type_strips_parameters(#[case] raw: &str, #[case] expected: &str) {
		assert_eq!(media_type(raw), expected);
	}
}
