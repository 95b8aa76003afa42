use thiserror::Error;

/// Errors raised while assembling or running the bridge.
#[derive(Debug, Error)]
pub enum BridgeError {
	/// The bridge configuration could not be loaded or validated.
	#[error(transparent)]
	Config(#[from] boson_conf::ConfigError),

	/// The HTTP object model rejected a request or response.
	#[error(transparent)]
	Http(#[from] boson_http::HttpError),

	/// The native runtime failed.
	#[error(transparent)]
	Runtime(#[from] boson_runtime::RuntimeError),

	/// The async runtime backing the kernel could not be started.
	#[error("failed to start async runtime: {0}")]
	AsyncRuntime(#[from] std::io::Error),
}
