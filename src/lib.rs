//! # Boson Bridge
//!
//! Wires a host web framework into the Boson desktop runtime: the
//! application's pages are served to an embedded webview over custom URI
//! schemes instead of a socket.
//!
//! The bridge is assembled in three steps:
//!
//! 1. Load and validate a [`BosonConfig`].
//! 2. Build the service graph with [`BosonServices::builder`], replacing
//!    collaborators where the host application needs to.
//! 3. Hand the services and the host [`Kernel`] to a [`BosonRunner`] and
//!    call [`run`](BosonRunner::run).
//!
//! ```no_run
//! use boson_bridge::{BosonConfig, BosonRunner, BosonServices};
//! use boson_bridge::{Kernel, Request, Response};
//!
//! struct App;
//!
//! #[async_trait::async_trait]
//! impl Kernel for App {
//!     async fn handle(&self, request: Request) -> boson_bridge::HttpResult<Response> {
//!         Ok(Response::ok().with_body(format!("you asked for {}", request.path())))
//!     }
//! }
//!
//! fn main() -> Result<(), boson_bridge::BridgeError> {
//!     let config = BosonConfig::from_path("boson.toml")?;
//!     let services = BosonServices::builder(config).build();
//!     let exit_code = BosonRunner::new(services, App).run()?;
//!     std::process::exit(exit_code);
//! }
//! ```

pub mod adapter;
pub mod error;
pub mod runtime;
pub mod services;

pub use adapter::HttpAdapter;
pub use error::BridgeError;
pub use runtime::BosonRunner;
pub use services::{BosonServices, BosonServicesBuilder};

pub use boson_conf::{BosonConfig, ConfigError, StaticConfig, WindowConfig, WindowDecorations};
pub use boson_http::Result as HttpResult;
pub use boson_http::{
	BodyDecoder, BodyDecoderFactory, DecodedBody, HttpError, Kernel, Request, Response,
	ServerGlobalsProvider, UploadedFile,
};
pub use boson_runtime::{
	Application, ApplicationCreateInfo, Navigate, RuntimeError, SchemeRequestReceived,
};
pub use boson_static::{
	ExtensionMimeTypeDetector, FilesystemStaticProvider, MimeTypeDetector, StaticError,
	StaticFile, StaticProvider,
};
