//! # Boson Runtime
//!
//! The native side of the Boson desktop bridge: a tao window hosting a wry
//! webview, with the event loop wrapped into an [`Application`].
//!
//! An [`Application`] is described up front by an [`ApplicationCreateInfo`]
//! and driven by two callbacks:
//!
//! - [`Application::on_request`]: every request on an intercepted scheme is
//!   wrapped in a [`SchemeRequestReceived`] event; the handler answers it or
//!   leaves it for the built-in `404 Not Found`.
//! - [`Application::on_started`]: fired once after the window and webview
//!   exist, with a [`Navigate`] seam for pointing the webview at its
//!   entrypoint.

pub mod app;
pub mod error;
pub mod events;
pub mod info;
pub mod webview;
pub mod window;

pub use app::{Application, RequestHandler, StartedHandler};
pub use error::RuntimeError;
pub use events::{ApplicationStarted, Navigate, SchemeRequestReceived};
pub use info::{ApplicationCreateInfo, WebViewCreateInfo, WindowCreateInfo, WindowDecoration};
pub use webview::WebViewManager;
pub use window::WindowManager;
