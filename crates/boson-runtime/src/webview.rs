//! WebView construction and scheme interception using wry.

use std::sync::Arc;

use bytes::Bytes;
use tao::window::Window;
use wry::{WebContext, WebView, WebViewBuilder};

use crate::app::RequestHandler;
use crate::error::RuntimeError;
use crate::events::{Navigate, SchemeRequestReceived};
use crate::info::ApplicationCreateInfo;

/// Initialization script that suppresses the engine's context menu.
const DISABLE_CONTEXT_MENU_SCRIPT: &str =
	"window.addEventListener('contextmenu', (event) => event.preventDefault());";

/// Owns the webview attached to the main window.
///
/// Every scheme listed in the application descriptor is registered as a
/// custom protocol. Intercepted requests are wrapped in a
/// [`SchemeRequestReceived`] event and handed to the request handler;
/// events left unanswered are served as `404 Not Found`.
pub struct WebViewManager {
	webview: WebView,
	// Must outlive the webview: holds the browsing session backing it.
	_context: WebContext,
}

impl WebViewManager {
	/// Create a webview attached to `window`, intercepting the schemes
	/// listed in `info`.
	pub fn new(
		window: &Window,
		info: &ApplicationCreateInfo,
		handler: Option<Arc<RequestHandler>>,
	) -> Result<Self, RuntimeError> {
		let webview_info = &info.window.webview;
		let mut context = WebContext::new(webview_info.storage.clone());

		let mut builder = WebViewBuilder::with_web_context(&mut context)
			.with_devtools(webview_info.dev_tools);

		if !webview_info.context_menu {
			builder = builder.with_initialization_script(DISABLE_CONTEXT_MENU_SCRIPT);
		}

		#[cfg(target_os = "windows")]
		if !webview_info.flags.is_empty() {
			use wry::WebViewBuilderExtWindows;
			builder = builder.with_additional_browser_args(webview_info.flags.join(" "));
		}
		#[cfg(not(target_os = "windows"))]
		if !webview_info.flags.is_empty() {
			tracing::debug!(
				flags = ?webview_info.flags,
				"browser flags are not supported on this platform and will be ignored"
			);
		}

		for scheme in &info.schemes {
			let handler = handler.clone();
			builder = builder.with_asynchronous_custom_protocol(
				scheme.clone(),
				move |_webview_id, request, responder| {
					let (parts, body) = request.into_parts();
					let request = http::Request::from_parts(parts, Bytes::from(body));
					tracing::debug!(
						method = %request.method(),
						uri = %request.uri(),
						"scheme request received"
					);

					let mut event = SchemeRequestReceived::new(request);
					if let Some(handler) = &handler {
						handler(&mut event);
					} else {
						tracing::warn!("scheme request received without a registered handler");
					}

					let response = event.response.take().unwrap_or_else(not_found);
					let (parts, body) = response.into_parts();
					responder.respond(http::Response::from_parts(parts, body.to_vec()));
				},
			);
		}

		let webview = builder
			.build_as_child(window)
			.map_err(|error| RuntimeError::WebViewCreation(error.to_string()))?;

		Ok(Self {
			webview,
			_context: context,
		})
	}

	pub fn webview(&self) -> &WebView {
		&self.webview
	}

	/// Resizes the webview to fill the window.
	pub fn set_bounds(&self, x: i32, y: i32, width: u32, height: u32) -> Result<(), RuntimeError> {
		self.webview
			.set_bounds(wry::Rect {
				position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(
					x as f64, y as f64,
				)),
				size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
					width as f64,
					height as f64,
				)),
			})
			.map_err(|error| RuntimeError::WebViewCreation(error.to_string()))
	}
}

impl Navigate for WebViewManager {
	fn load_url(&self, url: &str) -> Result<(), RuntimeError> {
		self.webview
			.load_url(url)
			.map_err(|error| RuntimeError::Navigation {
				url: url.to_owned(),
				message: error.to_string(),
			})
	}
}

/// Response served when no handler answered an intercepted request.
fn not_found() -> http::Response<Bytes> {
	let mut response = http::Response::new(Bytes::new());
	*response.status_mut() = http::StatusCode::NOT_FOUND;
	response
}
