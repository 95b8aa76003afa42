//! The `boson` configuration tree.
//!
//! Mirrors the option surface of the Boson runtime: top-level
//! application options, a `window` sub-table and a `static` sub-table.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;

/// Root of the bridge configuration tree.
///
/// All fields default, so `BosonConfig::default()` (or an empty TOML
/// table) is a valid configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BosonConfig {
	/// The name of the boson application.
	#[serde(default = "default_name")]
	pub name: String,

	/// The URI schemes the application answers.
	#[serde(default = "default_schemes")]
	pub schemes: Vec<String>,

	/// Enable or disable application debug mode.
	#[serde(default)]
	pub is_debug: bool,

	/// Quit the application when the primary window is closed.
	#[serde(default = "default_true")]
	pub is_quit_on_close: bool,

	/// Window options for the primary application window.
	#[serde(default)]
	pub window: WindowConfig,

	/// Static file serving options.
	#[serde(default, rename = "static")]
	pub static_files: StaticConfig,
}

/// Options for the primary application window and its WebView.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
	/// The entrypoint URI loaded into the WebView at startup.
	#[serde(default = "default_entrypoint")]
	pub entrypoint: String,

	/// Initial width of the window in pixels.
	#[serde(default = "default_width")]
	pub width: u32,

	/// Initial height of the window in pixels.
	#[serde(default = "default_height")]
	pub height: u32,

	/// Whether the window is visible at startup.
	#[serde(default = "default_true")]
	pub is_visible: bool,

	/// Whether the window is resizable.
	#[serde(default = "default_true")]
	pub is_resizable: bool,

	/// Whether the window stays above all other windows.
	#[serde(default)]
	pub is_always_on_top: bool,

	/// Whether pointer events pass through the window.
	#[serde(default)]
	pub is_click_through: bool,

	/// Window decoration variant.
	#[serde(default)]
	pub decorations: WindowDecorations,

	/// Engine-specific browser flags, passed through verbatim.
	#[serde(default)]
	pub flags: Vec<String>,

	/// WebView storage (profile) directory. `None` means in-memory.
	#[serde(default)]
	pub storage: Option<PathBuf>,

	/// Whether the WebView offers its native context menu.
	#[serde(default)]
	pub enable_context_menu: bool,

	/// Whether the WebView developer tools are available.
	///
	/// When unset this follows [`BosonConfig::is_debug`].
	#[serde(default)]
	pub enable_dev_tools: Option<bool>,
}

/// Options for the static file provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticConfig {
	/// Directories searched for static files, in order.
	#[serde(default = "default_static_directory")]
	pub directory: Vec<PathBuf>,
}

/// Window decoration variants understood by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowDecorations {
	/// Native decorations with the platform theme.
	#[default]
	Default,
	/// Native decorations with a dark theme.
	DarkMode,
	/// No decorations at all.
	Frameless,
	/// No decorations and a transparent background.
	Transparent,
}

fn default_name() -> String {
	"boson".to_string()
}

fn default_schemes() -> Vec<String> {
	vec!["boson".to_string()]
}

fn default_entrypoint() -> String {
	"boson://localhost".to_string()
}

fn default_width() -> u32 {
	640
}

fn default_height() -> u32 {
	480
}

fn default_true() -> bool {
	true
}

fn default_static_directory() -> Vec<PathBuf> {
	vec![PathBuf::from("public")]
}

impl Default for BosonConfig {
	fn default() -> Self {
		Self {
			name: default_name(),
			schemes: default_schemes(),
			is_debug: false,
			is_quit_on_close: true,
			window: WindowConfig::default(),
			static_files: StaticConfig::default(),
		}
	}
}

impl Default for WindowConfig {
	fn default() -> Self {
		Self {
			entrypoint: default_entrypoint(),
			width: default_width(),
			height: default_height(),
			is_visible: true,
			is_resizable: true,
			is_always_on_top: false,
			is_click_through: false,
			decorations: WindowDecorations::default(),
			flags: Vec::new(),
			storage: None,
			enable_context_menu: false,
			enable_dev_tools: None,
		}
	}
}

impl Default for StaticConfig {
	fn default() -> Self {
		Self {
			directory: default_static_directory(),
		}
	}
}

impl BosonConfig {
	/// Reads, parses and validates a configuration from a TOML file.
	pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&raw)
	}

	/// Parses and validates a configuration from a TOML document.
	pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(raw)?;
		config.validate()?;
		Ok(config)
	}

	/// Validates the resolved configuration.
	///
	/// # Errors
	///
	/// Returns a [`ConfigError`] naming the offending field when a
	/// required string is empty, a required list is empty or the
	/// window geometry is not positive.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.name.is_empty() {
			return Err(ConfigError::EmptyField("name"));
		}

		if self.schemes.is_empty() {
			return Err(ConfigError::EmptyList("schemes"));
		}

		if self.schemes.iter().any(String::is_empty) {
			return Err(ConfigError::EmptyField("schemes"));
		}

		if self.window.entrypoint.is_empty() {
			return Err(ConfigError::EmptyField("window.entrypoint"));
		}

		if self.window.width == 0 {
			return Err(ConfigError::OutOfRange {
				field: "window.width",
				constraint: "a positive integer",
				value: 0,
			});
		}

		if self.window.height == 0 {
			return Err(ConfigError::OutOfRange {
				field: "window.height",
				constraint: "a positive integer",
				value: 0,
			});
		}

		Ok(())
	}

	/// Whether the WebView developer tools should be enabled.
	///
	/// Explicit `window.enable_dev_tools` wins; otherwise the debug
	/// flag decides.
	pub fn dev_tools_enabled(&self) -> bool {
		self.window.enable_dev_tools.unwrap_or(self.is_debug)
	}
}
