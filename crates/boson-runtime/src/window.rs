//! Native window construction.

use tao::dpi::LogicalSize;
use tao::event_loop::EventLoop;
use tao::window::{Theme, Window, WindowBuilder};

use crate::error::RuntimeError;
use crate::info::{WindowCreateInfo, WindowDecoration};

/// Owns the native window of the application.
pub struct WindowManager {
	window: Window,
}

impl WindowManager {
	/// Create the native window described by `info`, titled `title`.
	pub fn new(
		event_loop: &EventLoop<()>,
		title: &str,
		info: &WindowCreateInfo,
	) -> Result<Self, RuntimeError> {
		let mut builder = WindowBuilder::new()
			.with_title(title)
			.with_inner_size(LogicalSize::new(info.width, info.height))
			.with_visible(info.visible)
			.with_resizable(info.resizable)
			.with_always_on_top(info.always_on_top);

		builder = match info.decoration {
			WindowDecoration::Default => builder,
			WindowDecoration::DarkMode => builder.with_theme(Some(Theme::Dark)),
			WindowDecoration::Frameless => builder.with_decorations(false),
			WindowDecoration::Transparent => {
				builder.with_decorations(false).with_transparent(true)
			}
		};

		let window = builder
			.build(event_loop)
			.map_err(|error| RuntimeError::WindowCreation(error.to_string()))?;

		if info.click_through {
			window
				.set_ignore_cursor_events(true)
				.map_err(|error| RuntimeError::WindowCreation(error.to_string()))?;
		}

		Ok(Self { window })
	}

	pub fn window(&self) -> &Window {
		&self.window
	}
}
