//! The host application kernel trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::request::Request;
use crate::response::Response;

/// The host web framework's kernel.
///
/// The bridge boots the kernel once at startup and then drives its
/// handle/terminate lifecycle once per intercepted scheme request.
/// `boot` and `terminate` default to no-ops for kernels that need
/// neither.
#[async_trait]
pub trait Kernel: Send + Sync {
	/// Boots the kernel. Called exactly once, before the first request.
	async fn boot(&self) -> Result<()> {
		Ok(())
	}

	/// Handles a single request and produces a response.
	///
	/// # Errors
	///
	/// Returns an error when the request cannot be answered; the bridge
	/// turns kernel errors into a 500 response for that request only.
	async fn handle(&self, request: Request) -> Result<Response>;

	/// Post-response hook, invoked with the request/response pair
	/// immediately after the response has been attached.
	async fn terminate(&self, _request: &Request, _response: &Response) -> Result<()> {
		Ok(())
	}
}

/// Blanket implementation so `Arc<K>` can be shared across the bridge's
/// event callbacks.
#[async_trait]
impl<K: Kernel + ?Sized> Kernel for Arc<K> {
	async fn boot(&self) -> Result<()> {
		(**self).boot().await
	}

	async fn handle(&self, request: Request) -> Result<Response> {
		(**self).handle(request).await
	}

	async fn terminate(&self, request: &Request, response: &Response) -> Result<()> {
		(**self).terminate(request, response).await
	}
}
