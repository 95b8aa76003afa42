//! `application/x-www-form-urlencoded` body decoder.

use bytes::Bytes;

use crate::error::{HttpError, Result};

use super::{BodyDecoder, DecodedBody, media_type};

/// Decodes URL-encoded form bodies into ordered field pairs.
pub struct FormUrlEncodedDecoder;

impl BodyDecoder for FormUrlEncodedDecoder {
	fn supports(&self, content_type: &str) -> bool {
		media_type(content_type).eq_ignore_ascii_case("application/x-www-form-urlencoded")
	}

	fn decode(&self, content_type: &str, body: &Bytes) -> Result<DecodedBody> {
		let fields: Vec<(String, String)> =
			serde_urlencoded::from_bytes(body).map_err(|error| HttpError::BodyDecode {
				content_type: content_type.to_string(),
				message: error.to_string(),
			})?;

		Ok(DecodedBody::Form(fields))
	}
}
