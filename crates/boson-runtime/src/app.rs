//! Application lifecycle: event registration and the native event loop.

use std::sync::Arc;

use tao::event::{Event, StartCause, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop};
use tao::platform::run_return::EventLoopExtRunReturn;

use crate::error::RuntimeError;
use crate::events::{ApplicationStarted, Navigate, SchemeRequestReceived};
use crate::info::ApplicationCreateInfo;
use crate::webview::WebViewManager;
use crate::window::WindowManager;

/// Callback invoked for every intercepted scheme request.
pub type RequestHandler = dyn Fn(&mut SchemeRequestReceived) + Send + Sync;

/// Callback invoked once, after the window and webview exist.
pub type StartedHandler = dyn Fn(&mut ApplicationStarted<'_>) + Send + Sync;

/// The native application: a window, its webview, and the event loop
/// driving both.
///
/// Handlers are registered before [`run`](Self::run); registering a handler
/// twice replaces the earlier one.
pub struct Application {
	info: ApplicationCreateInfo,
	request_handler: Option<Arc<RequestHandler>>,
	started_handler: Option<Box<StartedHandler>>,
}

impl Application {
	pub fn new(info: ApplicationCreateInfo) -> Self {
		Self {
			info,
			request_handler: None,
			started_handler: None,
		}
	}

	pub fn info(&self) -> &ApplicationCreateInfo {
		&self.info
	}

	/// Register the scheme request handler.
	pub fn on_request<F>(&mut self, handler: F)
	where
		F: Fn(&mut SchemeRequestReceived) + Send + Sync + 'static,
	{
		self.request_handler = Some(Arc::new(handler));
	}

	/// Register the startup handler.
	pub fn on_started<F>(&mut self, handler: F)
	where
		F: Fn(&mut ApplicationStarted<'_>) + Send + Sync + 'static,
	{
		self.started_handler = Some(Box::new(handler));
	}

	/// Run the registered request handler against a synthetic event.
	///
	/// This is the same dispatch path the webview uses; it exists so the
	/// request pipeline can be exercised without a native window.
	pub fn dispatch_request(&self, event: &mut SchemeRequestReceived) {
		if let Some(handler) = &self.request_handler {
			handler(event);
		}
	}

	/// Run the registered startup handler against the given webview seam.
	pub fn dispatch_started(&self, webview: &dyn Navigate) {
		if let Some(handler) = &self.started_handler {
			let mut event = ApplicationStarted::new(webview);
			handler(&mut event);
		}
	}

	/// Create the native resources and drive the event loop until the
	/// application quits. Returns the event loop's exit code.
	pub fn run(self) -> Result<i32, RuntimeError> {
		let Self {
			info,
			request_handler,
			started_handler,
		} = self;

		let mut event_loop = EventLoop::new();
		let window = WindowManager::new(&event_loop, info.window_title(), &info.window)?;
		let webview = WebViewManager::new(window.window(), &info, request_handler)?;
		let window_id = window.window().id();
		let quit_on_close = info.quit_on_close;

		tracing::info!(name = %info.name, schemes = ?info.schemes, "application starting");

		let mut started = false;
		let exit_code = event_loop.run_return(move |event, _window_target, control_flow| {
			*control_flow = ControlFlow::Wait;

			match event {
				Event::NewEvents(StartCause::Init) if !started => {
					started = true;
					if let Some(handler) = &started_handler {
						let mut event = ApplicationStarted::new(&webview);
						handler(&mut event);
					}
				}
				Event::WindowEvent {
					window_id: id,
					event: WindowEvent::CloseRequested,
					..
				} if id == window_id => {
					if quit_on_close {
						*control_flow = ControlFlow::Exit;
					}
				}
				Event::WindowEvent {
					window_id: id,
					event: WindowEvent::Resized(size),
					..
				} if id == window_id => {
					let _ = webview.set_bounds(0, 0, size.width, size.height);
				}
				_ => {}
			}
		});

		tracing::info!(exit_code, "application stopped");
		Ok(exit_code)
	}
}
