//! # Boson Static
//!
//! Static file serving for the Boson desktop bridge: a filesystem
//! provider that resolves scheme-request paths against an ordered list
//! of root directories, paired with an extension-keyed MIME type
//! detector.
//!
//! Both collaborators sit behind traits so a host application can
//! supply its own implementation to the bridge's service builder.

pub mod error;
pub mod mime;
pub mod provider;

pub use error::StaticError;
pub use mime::{ExtensionMimeTypeDetector, MimeTypeDetector};
pub use provider::{FilesystemStaticProvider, StaticFile, StaticProvider};
