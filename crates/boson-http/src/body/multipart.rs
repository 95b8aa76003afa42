//! `multipart/form-data` body decoder.

use bytes::Bytes;

use crate::error::{HttpError, Result};

use super::{BodyDecoder, DecodedBody, UploadedFile, media_type};

/// Decodes multipart form bodies into fields and uploaded files.
///
/// Parts carrying a `filename` disposition parameter become
/// [`UploadedFile`]s; all other parts become text fields.
pub struct MultipartFormDataDecoder;

impl BodyDecoder for MultipartFormDataDecoder {
	fn supports(&self, content_type: &str) -> bool {
		media_type(content_type).eq_ignore_ascii_case("multipart/form-data")
	}

	fn decode(&self, content_type: &str, body: &Bytes) -> Result<DecodedBody> {
		let boundary = boundary_param(content_type).ok_or_else(|| HttpError::BodyDecode {
			content_type: content_type.to_string(),
			message: "missing boundary parameter".to_string(),
		})?;

		let malformed = |message: &str| HttpError::BodyDecode {
			content_type: content_type.to_string(),
			message: message.to_string(),
		};

		let delimiter = format!("--{boundary}");
		let delimiter = delimiter.as_bytes();
		let data = body.as_ref();

		let mut fields = Vec::new();
		let mut files = Vec::new();

		// A preamble before the first delimiter is legal and skipped.
		let mut pos = find_subsequence(data, delimiter)
			.ok_or_else(|| malformed("opening boundary not found"))?
			+ delimiter.len();

		loop {
			if data[pos..].starts_with(b"--") {
				break;
			}

			if !data[pos..].starts_with(b"\r\n") {
				return Err(malformed("malformed boundary line"));
			}
			pos += 2;

			let next = find_subsequence(&data[pos..], delimiter)
				.ok_or_else(|| malformed("unterminated part"))?;

			let segment = data[pos..pos + next]
				.strip_suffix(b"\r\n")
				.ok_or_else(|| malformed("part not terminated by CRLF"))?;

			let part = parse_part(segment).map_err(|message| malformed(message))?;

			if part.filename.is_some() {
				files.push(UploadedFile {
					name: part.name,
					filename: part.filename,
					content_type: part.content_type,
					data: Bytes::copy_from_slice(part.content),
				});
			} else {
				fields.push((
					part.name,
					String::from_utf8_lossy(part.content).into_owned(),
				));
			}

			pos += next + delimiter.len();
		}

		Ok(DecodedBody::Multipart { fields, files })
	}
}

struct Part<'a> {
	name: String,
	filename: Option<String>,
	content_type: Option<String>,
	content: &'a [u8],
}

fn parse_part(segment: &[u8]) -> std::result::Result<Part<'_>, &'static str> {
	let header_end = find_subsequence(segment, b"\r\n\r\n").ok_or("missing part header block")?;
	let (raw_headers, rest) = segment.split_at(header_end);
	let content = &rest[4..];

	let mut name = None;
	let mut filename = None;
	let mut content_type = None;

	for line in raw_headers.split(|&byte| byte == b'\n') {
		let line = String::from_utf8_lossy(line);
		let line = line.trim_end_matches('\r');

		let Some((header, value)) = line.split_once(':') else {
			continue;
		};

		if header.trim().eq_ignore_ascii_case("content-disposition") {
			for param in value.split(';').skip(1) {
				let Some((key, raw)) = param.split_once('=') else {
					continue;
				};

				let unquoted = raw.trim().trim_matches('"').to_string();
				match key.trim().to_ascii_lowercase().as_str() {
					"name" => name = Some(unquoted),
					"filename" => filename = Some(unquoted),
					_ => {}
				}
			}
		} else if header.trim().eq_ignore_ascii_case("content-type") {
			content_type = Some(value.trim().to_string());
		}
	}

	Ok(Part {
		name: name.ok_or("part without a field name")?,
		filename,
		content_type,
		content,
	})
}

fn boundary_param(content_type: &str) -> Option<String> {
	for param in content_type.split(';').skip(1) {
		let Some((key, value)) = param.split_once('=') else {
			continue;
		};

		if key.trim().eq_ignore_ascii_case("boundary") {
			let value = value.trim().trim_matches('"');
			if !value.is_empty() {
				return Some(value.to_string());
			}
		}
	}

	None
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
	haystack
		.windows(needle.len())
		.position(|window| window == needle)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	const BOUNDARY: &str = "---------boson42";

	fn content_type() -> String {
		format!("multipart/form-data; boundary={BOUNDARY}")
	}

	fn body_with(parts: &[&str]) -> Bytes {
		let mut raw = String::new();
		for part in parts {
			raw.push_str(&format!("--{BOUNDARY}\r\n{part}\r\n"));
		}
		raw.push_str(&format!("--{BOUNDARY}--\r\n"));
		Bytes::from(raw)
	}

	#[rstest]
	#[case("multipart/form-data; boundary=x", true)]
	#[case("MULTIPART/FORM-DATA; boundary=x", true)]
	#[case("application/x-www-form-urlencoded", false)]
	fn test_supports(#[case] raw: &str, #[case] expected: bool) {
		assert_eq!(MultipartFormDataDecoder.supports(raw), expected);
	}

	#[rstest]
	fn test_decode_fields_and_file() {
		// Arrange
		let body = body_with(&[
			"Content-Disposition: form-data; name=\"title\"\r\n\r\nhello",
			"Content-Disposition: form-data; name=\"upload\"; filename=\"a.bin\"\r\nContent-Type: application/octet-stream\r\n\r\n\x01\x02",
		]);

		// Act
		let decoded = MultipartFormDataDecoder
			.decode(&content_type(), &body)
			.unwrap();

		// Assert
		let DecodedBody::Multipart { fields, files } = decoded else {
			panic!("expected multipart body");
		};
		assert_eq!(fields, vec![("title".to_string(), "hello".to_string())]);
		assert_eq!(files.len(), 1);
		assert_eq!(files[0].name, "upload");
		assert_eq!(files[0].filename.as_deref(), Some("a.bin"));
		assert_eq!(files[0].content_type.as_deref(), Some("application/octet-stream"));
		assert_eq!(files[0].data.as_ref(), b"\x01\x02");
	}

	#[rstest]
	fn test_decode_preserves_field_order() {
		// Arrange
		let body = body_with(&[
			"Content-Disposition: form-data; name=\"first\"\r\n\r\n1",
			"Content-Disposition: form-data; name=\"second\"\r\n\r\n2",
		]);

		// Act
		let decoded = MultipartFormDataDecoder
			.decode(&content_type(), &body)
			.unwrap();

		// Assert
		let DecodedBody::Multipart { fields, .. } = decoded else {
			panic!("expected multipart body");
		};
		assert_eq!(
			fields,
			vec![
				("first".to_string(), "1".to_string()),
				("second".to_string(), "2".to_string()),
			]
		);
	}

	#[rstest]
	fn test_quoted_boundary_parameter() {
		// Arrange
		let body = body_with(&["Content-Disposition: form-data; name=\"a\"\r\n\r\nv"]);
		let quoted = format!("multipart/form-data; boundary=\"{BOUNDARY}\"");

		// Act
		let decoded = MultipartFormDataDecoder.decode(&quoted, &body).unwrap();

		// Assert
		let DecodedBody::Multipart { fields, .. } = decoded else {
			panic!("expected multipart body");
		};
		assert_eq!(fields, vec![("a".to_string(), "v".to_string())]);
	}

	#[rstest]
	fn test_missing_boundary_parameter_is_an_error() {
		// Act
		let result =
			MultipartFormDataDecoder.decode("multipart/form-data", &Bytes::from_static(b"x"));

		// Assert
		assert!(matches!(result, Err(HttpError::BodyDecode { .. })));
	}

	#[rstest]
	fn test_part_without_field_name_is_an_error() {
		// Arrange
		let body = body_with(&["Content-Disposition: form-data\r\n\r\norphan"]);

		// Act
		let result = MultipartFormDataDecoder.decode(&content_type(), &body);

		// Assert
		assert!(matches!(result, Err(HttpError::BodyDecode { .. })));
	}

	#[rstest]
	fn test_binary_field_value_is_lossy_utf8() {
		// Arrange
		let mut raw = Vec::new();
		raw.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
		raw.extend_from_slice(b"Content-Disposition: form-data; name=\"blob\"\r\n\r\n");
		raw.extend_from_slice(&[0xFF, 0xFE]);
		raw.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
		let body = Bytes::from(raw);

		// Act
		let decoded = MultipartFormDataDecoder
			.decode(&content_type(), &body)
			.unwrap();

		// Assert
		let DecodedBody::Multipart { fields, .. } = decoded else {
			panic!("expected multipart body");
		};
		assert_eq!(fields[0].0, "blob");
		assert_eq!(fields[0].1, "\u{FFFD}\u{FFFD}");
	}
}
