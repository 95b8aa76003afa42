//! # Boson Configuration
//!
//! Configuration schema for the Boson desktop bridge.
//!
//! The bridge is configured through a nested option tree (typically a
//! `boson` table in the host application's TOML configuration file).
//! Every field carries a default, so an empty table is a valid
//! configuration; validation runs after deserialization and rejects
//! empty strings, empty lists and non-positive window geometry, naming
//! the offending field in the error.
//!
//! ```
//! use boson_conf::BosonConfig;
//!
//! let config = BosonConfig::from_toml_str(
//!     r#"
//!     name = "my-app"
//!
//!     [window]
//!     entrypoint = "boson://localhost/app"
//!     width = 1024
//!     height = 768
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.name, "my-app");
//! assert_eq!(config.window.width, 1024);
//! ```

pub mod error;
pub mod schema;

pub use error::ConfigError;
pub use schema::{BosonConfig, StaticConfig, WindowConfig, WindowDecorations};
