//! Filesystem static file provider.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use http::Request;
use percent_encoding::percent_decode_str;

use crate::error::StaticError;
use crate::mime::MimeTypeDetector;

/// A resolved static file.
#[derive(Debug, Clone)]
pub struct StaticFile {
	/// The filesystem path the request resolved to.
	pub path: PathBuf,
	/// The file contents.
	pub body: Bytes,
	/// The detected MIME type, if any.
	pub mime: Option<String>,
}

/// Resolves scheme requests to static files.
pub trait StaticProvider: Send + Sync {
	/// Looks up the file addressed by `request`.
	///
	/// Returns `Ok(None)` when no configured root contains the file.
	///
	/// # Errors
	///
	/// Returns a [`StaticError`] when the request path escapes the
	/// configured roots or a resolved file cannot be read.
	fn find(&self, request: &Request<Bytes>) -> Result<Option<StaticFile>, StaticError>;
}

/// Static provider backed by an ordered list of root directories.
///
/// Roots are consulted in configuration order; the first root holding
/// the requested file wins.
pub struct FilesystemStaticProvider {
	roots: Vec<PathBuf>,
	mime: Arc<dyn MimeTypeDetector>,
}

impl FilesystemStaticProvider {
	/// Creates a provider over `roots`, detecting MIME types with `mime`.
	pub fn new(roots: Vec<PathBuf>, mime: Arc<dyn MimeTypeDetector>) -> Self {
		Self { roots, mime }
	}

	/// Normalizes a request path into a relative filesystem path.
	///
	/// Percent-decodes the path and rejects any component that would
	/// climb out of a root directory.
	fn relative_path(raw: &str) -> Result<Option<PathBuf>, StaticError> {
		let decoded = percent_decode_str(raw).decode_utf8_lossy();
		let trimmed = decoded.trim_start_matches('/');

		if trimmed.is_empty() {
			return Ok(None);
		}

		let relative = Path::new(trimmed);

		for component in relative.components() {
			match component {
				Component::Normal(_) => {}
				Component::CurDir => {}
				_ => return Err(StaticError::PathTraversal(raw.to_string())),
			}
		}

		Ok(Some(relative.to_path_buf()))
	}
}

impl StaticProvider for FilesystemStaticProvider {
	fn find(&self, request: &Request<Bytes>) -> Result<Option<StaticFile>, StaticError> {
		let Some(relative) = Self::relative_path(request.uri().path())? else {
			return Ok(None);
		};

		for root in &self.roots {
			let candidate = root.join(&relative);

			if !candidate.is_file() {
				continue;
			}

			let body = fs::read(&candidate).map_err(|source| StaticError::Io {
				path: candidate.clone(),
				source,
			})?;

			tracing::debug!(path = %candidate.display(), "resolved static file");

			return Ok(Some(StaticFile {
				mime: self.mime.detect(&candidate),
				path: candidate,
				body: Bytes::from(body),
			}));
		}

		Ok(None)
	}
}
