//! The bridge runner: boots the kernel, wires the event handlers and
//! drives the native event loop to completion.

use std::sync::Arc;

use boson_http::{Kernel, Response};
use boson_runtime::{Application, SchemeRequestReceived};

use crate::adapter::HttpAdapter;
use crate::error::BridgeError;
use crate::services::BosonServices;

/// Runs a host kernel inside the native application.
///
/// The lifecycle is: boot the kernel once, register the scheme request
/// and startup handlers, then hand control to the event loop. Each
/// intercepted request drives one handle/terminate cycle on the kernel;
/// a kernel error is answered with `500 Internal Server Error` for that
/// request only and the loop keeps running.
pub struct BosonRunner<K> {
	services: BosonServices,
	kernel: K,
}

impl<K> BosonRunner<K>
where
	K: Kernel + 'static,
{
	pub fn new(services: BosonServices, kernel: K) -> Self {
		Self { services, kernel }
	}

	/// Boots the kernel and runs the application until it quits.
	///
	/// Returns the process exit code, always 0; native loop exit codes
	/// are not propagated.
	///
	/// # Errors
	///
	/// Returns a [`BridgeError`] when the kernel fails to boot or the
	/// native window and webview cannot be created. Per-request kernel
	/// errors are handled inside the loop and never abort the run.
	pub fn run(self) -> Result<i32, BridgeError> {
		let BosonServices {
			adapter,
			application_info,
			entrypoint,
			..
		} = self.services;

		// The kernel is async; the event loop is not. A current-thread
		// runtime lets the synchronous callbacks block on kernel calls.
		let runtime = Arc::new(
			tokio::runtime::Builder::new_current_thread()
				.enable_all()
				.build()?,
		);

		runtime
			.block_on(self.kernel.boot())
			.map_err(BridgeError::Http)?;
		tracing::debug!("kernel booted");

		let adapter = Arc::new(adapter);
		let kernel = Arc::new(self.kernel);
		let mut application = Application::new(application_info);

		{
			let adapter = adapter.clone();
			let kernel = kernel.clone();
			let runtime = runtime.clone();
			application.on_request(move |event| {
				answer(&adapter, &runtime, &kernel, event);
			});
		}

		application.on_started(move |event| {
			if let Some(url) = startup_url(entrypoint.as_deref()) {
				tracing::info!(url, "loading entrypoint");
				if let Err(error) = event.webview().load_url(url) {
					tracing::error!(%error, "failed to load entrypoint");
				}
			}
		});

		application.run()?;
		Ok(0)
	}
}

/// Drives one handle/terminate cycle on the kernel for an intercepted
/// request and attaches the outcome to the event.
fn answer<K: Kernel>(
	adapter: &HttpAdapter,
	runtime: &tokio::runtime::Runtime,
	kernel: &K,
	event: &mut SchemeRequestReceived,
) {
	let request = match adapter.create_request(&event.request) {
		Ok(request) => request,
		Err(error) => {
			tracing::error!(%error, "failed to adapt scheme request");
			event.respond(adapter.create_response(&Response::internal_server_error()));
			return;
		}
	};

	match runtime.block_on(kernel.handle(request.clone())) {
		Ok(response) => {
			event.respond(adapter.create_response(&response));
			if let Err(error) = runtime.block_on(kernel.terminate(&request, &response)) {
				tracing::error!(%error, "kernel terminate hook failed");
			}
		}
		Err(error) => {
			tracing::error!(%error, "kernel failed to handle request");
			event.respond(adapter.create_response(&Response::internal_server_error()));
		}
	}
}

/// The URL to load at startup, if the entrypoint names one.
fn startup_url(entrypoint: Option<&str>) -> Option<&str> {
	entrypoint.filter(|url| !url.is_empty())
}
