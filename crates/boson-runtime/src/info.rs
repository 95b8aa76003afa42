//! Immutable creation descriptors for the application, its window and the
//! embedded webview.
//!
//! These structs are plain data: they carry everything the runtime needs to
//! construct native resources, and nothing is read from the environment after
//! construction.

use std::path::PathBuf;

/// Visual decoration applied to the native window frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowDecoration {
	/// Platform-default frame and theme.
	#[default]
	Default,
	/// Platform-default frame with a dark theme.
	DarkMode,
	/// No frame at all.
	Frameless,
	/// No frame and a transparent background.
	Transparent,
}

/// Creation descriptor for the embedded webview.
#[derive(Debug, Clone, Default)]
pub struct WebViewCreateInfo {
	/// Directory for persistent browsing data. `None` keeps the session
	/// in memory.
	pub storage: Option<PathBuf>,
	/// Additional browser engine flags, passed through verbatim on
	/// platforms that accept them.
	pub flags: Vec<String>,
	/// Whether the default context menu is available.
	pub context_menu: bool,
	/// Whether the developer tools can be opened.
	pub dev_tools: bool,
}

/// Creation descriptor for the native window.
#[derive(Debug, Clone)]
pub struct WindowCreateInfo {
	/// Window title.
	pub title: String,
	/// Initial logical width in pixels.
	pub width: u32,
	/// Initial logical height in pixels.
	pub height: u32,
	/// Whether the window is shown on creation.
	pub visible: bool,
	/// Whether the user may resize the window.
	pub resizable: bool,
	/// Whether the window stays above all other windows.
	pub always_on_top: bool,
	/// Whether pointer events pass through the window.
	pub click_through: bool,
	/// Frame decoration.
	pub decoration: WindowDecoration,
	/// Webview descriptor for this window.
	pub webview: WebViewCreateInfo,
}

impl WindowCreateInfo {
	/// Default logical width of a newly created window.
	pub const DEFAULT_WIDTH: u32 = 640;
	/// Default logical height of a newly created window.
	pub const DEFAULT_HEIGHT: u32 = 480;
}

impl Default for WindowCreateInfo {
	fn default() -> Self {
		Self {
			title: String::new(),
			width: Self::DEFAULT_WIDTH,
			height: Self::DEFAULT_HEIGHT,
			visible: true,
			resizable: true,
			always_on_top: false,
			click_through: false,
			decoration: WindowDecoration::Default,
			webview: WebViewCreateInfo::default(),
		}
	}
}

/// Creation descriptor for the whole application.
#[derive(Debug, Clone)]
pub struct ApplicationCreateInfo {
	/// Application name, also used as the window title when the window
	/// title is empty.
	pub name: String,
	/// URI schemes intercepted by the runtime and routed to the
	/// request handler.
	pub schemes: Vec<String>,
	/// Whether the runtime runs in debug mode.
	pub debug: bool,
	/// Whether closing the window terminates the event loop.
	pub quit_on_close: bool,
	/// Window descriptor.
	pub window: WindowCreateInfo,
}

impl Default for ApplicationCreateInfo {
	fn default() -> Self {
		Self {
			name: String::new(),
			schemes: Vec::new(),
			debug: false,
			quit_on_close: true,
			window: WindowCreateInfo::default(),
		}
	}
}

impl ApplicationCreateInfo {
	/// Title used for the native window: the explicit window title when
	/// set, otherwise the application name.
	pub fn window_title(&self) -> &str {
		if self.window.title.is_empty() {
			&self.name
		} else {
			&self.window.title
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_window_defaults() {
		// Arrange & Act
		let info = WindowCreateInfo::default();

		// Assert
		assert_eq!(info.width, 640);
		assert_eq!(info.height, 480);
		assert!(info.visible);
		assert!(info.resizable);
		assert!(!info.always_on_top);
		assert!(!info.click_through);
		assert_eq!(info.decoration, WindowDecoration::Default);
	}

	#[test]
	fn test_window_title_falls_back_to_application_name() {
		// Arrange
		let info = ApplicationCreateInfo {
			name: "boson".into(),
			..Default::default()
		};

		// Act & Assert
		assert_eq!(info.window_title(), "boson");
	}

	#[test]
	fn test_explicit_window_title_wins() {
		// Arrange
		let mut info = ApplicationCreateInfo {
			name: "boson".into(),
			..Default::default()
		};
		info.window.title = "My App".into();

		// Act & Assert
		assert_eq!(info.window_title(), "My App");
	}
}
