//! # Boson HTTP
//!
//! The host-side HTTP object model for the Boson desktop bridge.
//!
//! A scheme request intercepted inside the WebView is translated into a
//! [`Request`] and answered by the host application's [`Kernel`], which
//! produces a [`Response`]. The crate also provides the collaborators
//! that reconstruct the request environment:
//!
//! - [`body`]: content-type keyed body decoders behind an ordered
//!   [`BodyDecoderFactory`]. An unknown content type degrades to a raw
//!   body instead of failing the request.
//! - [`globals`]: server-globals providers that rebuild the ambient
//!   request environment (`REQUEST_METHOD`, `HTTP_*`, ...) from the
//!   native request object.

pub mod body;
pub mod error;
pub mod globals;
pub mod kernel;
pub mod request;
pub mod response;

pub use body::{BodyDecoder, BodyDecoderFactory, DecodedBody, UploadedFile};
pub use body::{FormUrlEncodedDecoder, MultipartFormDataDecoder};
pub use error::{HttpError, Result};
pub use globals::{
	CompoundServerGlobalsProvider, DefaultServerGlobalsProvider, ServerGlobalsProvider,
	StaticServerGlobalsProvider,
};
pub use kernel::Kernel;
pub use request::{Request, RequestBuilder};
pub use response::Response;

pub use hyper::{HeaderMap, Method, StatusCode, Uri, Version};
