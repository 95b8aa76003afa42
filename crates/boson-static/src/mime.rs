//! MIME type detection keyed by file extension.

use std::path::Path;

/// Detects the MIME type of a file.
pub trait MimeTypeDetector: Send + Sync {
	/// Returns the MIME type for `path`, or `None` when unknown.
	fn detect(&self, path: &Path) -> Option<String>;
}

/// Extension-keyed MIME type detector.
///
/// An optional delegate detector is consulted first; the extension
/// table only answers when the delegate does not.
#[derive(Default)]
pub struct ExtensionMimeTypeDetector {
	delegate: Option<Box<dyn MimeTypeDetector>>,
}

impl ExtensionMimeTypeDetector {
	/// Creates a detector, optionally wrapping a delegate.
	pub fn new(delegate: Option<Box<dyn MimeTypeDetector>>) -> Self {
		Self { delegate }
	}

	/// Maps a file extension to its MIME type.
	pub fn mime_type_for_extension(ext: &str) -> Option<&'static str> {
		let mime = match ext.to_lowercase().as_str() {
			"html" | "htm" => "text/html",
			"css" => "text/css",
			"js" | "mjs" => "application/javascript",
			"json" => "application/json",
			"txt" => "text/plain",
			"xml" => "application/xml",
			"pdf" => "application/pdf",
			"png" => "image/png",
			"jpg" | "jpeg" => "image/jpeg",
			"gif" => "image/gif",
			"svg" => "image/svg+xml",
			"webp" => "image/webp",
			"avif" => "image/avif",
			"ico" => "image/x-icon",
			"woff" => "font/woff",
			"woff2" => "font/woff2",
			"ttf" => "font/ttf",
			"otf" => "font/otf",
			"mp3" => "audio/mpeg",
			"mp4" => "video/mp4",
			"webm" => "video/webm",
			"wasm" => "application/wasm",
			_ => return None,
		};

		Some(mime)
	}
}

impl MimeTypeDetector for ExtensionMimeTypeDetector {
	fn detect(&self, path: &Path) -> Option<String> {
		if let Some(delegate) = &self.delegate
			&& let Some(mime) = delegate.detect(path)
		{
			return Some(mime);
		}

		path.extension()
			.and_then(|ext| ext.to_str())
			.and_then(Self::mime_type_for_extension)
			.map(str::to_string)
	}
}
