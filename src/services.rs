//! Explicit composition of the bridge's service graph.
//!
//! The graph is assembled in dependency order from a validated
//! [`BosonConfig`]: MIME detection feeds the static provider, globals
//! providers and body decoders feed the HTTP adapter, and the
//! configuration is projected into the runtime's creation descriptors.
//! Every collaborator can be replaced before
//! [`BosonServicesBuilder::build`]; a replacement registered first wins.

use std::sync::Arc;

use boson_conf::{BosonConfig, WindowDecorations};
use boson_http::{
	BodyDecoder, BodyDecoderFactory, CompoundServerGlobalsProvider, ServerGlobalsProvider,
};
use boson_runtime::{
	ApplicationCreateInfo, WebViewCreateInfo, WindowCreateInfo, WindowDecoration,
};
use boson_static::{
	ExtensionMimeTypeDetector, FilesystemStaticProvider, MimeTypeDetector, StaticProvider,
};

use crate::adapter::HttpAdapter;

/// The assembled service graph of the bridge.
pub struct BosonServices {
	/// The validated configuration the graph was built from.
	pub config: BosonConfig,
	/// The URL loaded into the webview at startup, if any.
	pub entrypoint: Option<String>,
	/// MIME detection used by the static provider.
	pub mime_detector: Arc<dyn MimeTypeDetector>,
	/// Static file resolution for scheme requests.
	pub static_provider: Arc<dyn StaticProvider>,
	/// Server environment reconstruction.
	pub globals_provider: Arc<dyn ServerGlobalsProvider>,
	/// Content-type keyed body decoding.
	pub body_decoders: Arc<BodyDecoderFactory>,
	/// Native-to-host request/response translation.
	pub adapter: HttpAdapter,
	/// Creation descriptor for the native application.
	pub application_info: ApplicationCreateInfo,
}

impl BosonServices {
	/// Starts a builder over the given configuration.
	pub fn builder(config: BosonConfig) -> BosonServicesBuilder {
		BosonServicesBuilder::new(config)
	}
}

/// Builder for [`BosonServices`].
///
/// Each `with_*` method registers a replacement for one collaborator.
/// Registering the same collaborator twice keeps the first registration;
/// anything not registered is built from the configuration.
pub struct BosonServicesBuilder {
	config: BosonConfig,
	entrypoint: Option<String>,
	mime_detector: Option<Arc<dyn MimeTypeDetector>>,
	static_provider: Option<Arc<dyn StaticProvider>>,
	globals_provider: Option<Arc<dyn ServerGlobalsProvider>>,
	body_decoders: Option<Vec<Arc<dyn BodyDecoder>>>,
}

impl BosonServicesBuilder {
	pub fn new(config: BosonConfig) -> Self {
		Self {
			config,
			entrypoint: None,
			mime_detector: None,
			static_provider: None,
			globals_provider: None,
			body_decoders: None,
		}
	}

	/// Replaces the startup entrypoint from the configuration.
	pub fn with_entrypoint(mut self, entrypoint: impl Into<String>) -> Self {
		if self.entrypoint.is_none() {
			self.entrypoint = Some(entrypoint.into());
		}
		self
	}

	/// Replaces the MIME type detector.
	pub fn with_mime_detector(mut self, detector: Arc<dyn MimeTypeDetector>) -> Self {
		if self.mime_detector.is_none() {
			self.mime_detector = Some(detector);
		}
		self
	}

	/// Replaces the static file provider.
	pub fn with_static_provider(mut self, provider: Arc<dyn StaticProvider>) -> Self {
		if self.static_provider.is_none() {
			self.static_provider = Some(provider);
		}
		self
	}

	/// Replaces the server globals provider.
	pub fn with_globals_provider(mut self, provider: Arc<dyn ServerGlobalsProvider>) -> Self {
		if self.globals_provider.is_none() {
			self.globals_provider = Some(provider);
		}
		self
	}

	/// Replaces the ordered body decoder list.
	pub fn with_body_decoders(mut self, decoders: Vec<Arc<dyn BodyDecoder>>) -> Self {
		if self.body_decoders.is_none() {
			self.body_decoders = Some(decoders);
		}
		self
	}

	/// Assembles the service graph.
	pub fn build(self) -> BosonServices {
		let config = self.config;

		let mime_detector: Arc<dyn MimeTypeDetector> = self
			.mime_detector
			.unwrap_or_else(|| Arc::new(ExtensionMimeTypeDetector::new(None)));

		let static_provider: Arc<dyn StaticProvider> = self.static_provider.unwrap_or_else(|| {
			Arc::new(FilesystemStaticProvider::new(
				config.static_files.directory.clone(),
				mime_detector.clone(),
			))
		});

		let globals_provider: Arc<dyn ServerGlobalsProvider> = self
			.globals_provider
			.unwrap_or_else(|| Arc::new(CompoundServerGlobalsProvider::with_defaults()));

		let body_decoders = Arc::new(match self.body_decoders {
			Some(decoders) => BodyDecoderFactory::new(decoders),
			None => BodyDecoderFactory::with_defaults(),
		});

		let adapter = HttpAdapter::new(globals_provider.clone(), body_decoders.clone());

		let entrypoint = self
			.entrypoint
			.or_else(|| Some(config.window.entrypoint.clone()))
			.filter(|url| !url.is_empty());

		let application_info = application_info(&config);

		BosonServices {
			config,
			entrypoint,
			mime_detector,
			static_provider,
			globals_provider,
			body_decoders,
			adapter,
			application_info,
		}
	}
}

/// Projects the configuration into the runtime's creation descriptors.
fn application_info(config: &BosonConfig) -> ApplicationCreateInfo {
	ApplicationCreateInfo {
		name: config.name.clone(),
		schemes: config.schemes.clone(),
		debug: config.is_debug,
		quit_on_close: config.is_quit_on_close,
		window: WindowCreateInfo {
			title: config.name.clone(),
			width: config.window.width,
			height: config.window.height,
			visible: config.window.is_visible,
			resizable: config.window.is_resizable,
			always_on_top: config.window.is_always_on_top,
			click_through: config.window.is_click_through,
			decoration: decoration(config.window.decorations),
			webview: WebViewCreateInfo {
				storage: config.window.storage.clone(),
				flags: config.window.flags.clone(),
				context_menu: config.window.enable_context_menu,
				dev_tools: config.dev_tools_enabled(),
			},
		},
	}
}

fn decoration(decorations: WindowDecorations) -> WindowDecoration {
	match decorations {
		WindowDecorations::Default => WindowDecoration::Default,
		WindowDecorations::DarkMode => WindowDecoration::DarkMode,
		WindowDecorations::Frameless => WindowDecoration::Frameless,
		WindowDecorations::Transparent => WindowDecoration::Transparent,
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;
	use std::path::Path;

	use bytes::Bytes;
	use rstest::rstest;

	use super::*;

	#[rstest]
	fn test_default_graph_from_default_config() {
		// Act
		let services = BosonServices::builder(BosonConfig::default()).build();

		// Assert
		assert_eq!(
			services.entrypoint.as_deref(),
			Some("boson://localhost")
		);
		assert_eq!(services.application_info.name, "boson");
		assert_eq!(services.application_info.schemes, vec!["boson".to_string()]);
		assert!(services.application_info.quit_on_close);
		assert_eq!(services.application_info.window.width, 640);
		assert_eq!(services.application_info.window.height, 480);
		assert!(!services.application_info.window.webview.dev_tools);
	}

	#[rstest]
	fn test_dev_tools_follow_debug_mode() {
		// Arrange
		let mut config = BosonConfig::default();
		config.is_debug = true;

		// Act
		let services = BosonServices::builder(config).build();

		// Assert
		assert!(services.application_info.debug);
		assert!(services.application_info.window.webview.dev_tools);
	}

	#[rstest]
	#[case::default_variant(WindowDecorations::Default, WindowDecoration::Default)]
	#[case::dark_mode(WindowDecorations::DarkMode, WindowDecoration::DarkMode)]
	#[case::frameless(WindowDecorations::Frameless, WindowDecoration::Frameless)]
	#[case::transparent(WindowDecorations::Transparent, WindowDecoration::Transparent)]
	fn test_decoration_mapping(
		#[case] configured: WindowDecorations,
		#[case] expected: WindowDecoration,
	) {
		// Arrange
		let mut config = BosonConfig::default();
		config.window.decorations = configured;

		// Act
		let services = BosonServices::builder(config).build();

		// Assert
		assert_eq!(services.application_info.window.decoration, expected);
	}

	#[rstest]
	fn test_entrypoint_override_wins_over_config() {
		// Act
		let services = BosonServices::builder(BosonConfig::default())
			.with_entrypoint("app://start")
			.build();

		// Assert
		assert_eq!(services.entrypoint.as_deref(), Some("app://start"));
	}

	#[rstest]
	fn test_first_registration_wins() {
		// Arrange
		struct HtmlOnly;
		impl MimeTypeDetector for HtmlOnly {
			fn detect(&self, _path: &Path) -> Option<String> {
				Some("text/html".to_string())
			}
		}
		struct Empty;
		impl MimeTypeDetector for Empty {
			fn detect(&self, _path: &Path) -> Option<String> {
				None
			}
		}

		// Act
		let services = BosonServices::builder(BosonConfig::default())
			.with_mime_detector(Arc::new(HtmlOnly))
			.with_mime_detector(Arc::new(Empty))
			.build();

		// Assert
		assert_eq!(
			services.mime_detector.detect(Path::new("x.bin")),
			Some("text/html".to_string())
		);
	}

	#[rstest]
	fn test_preset_static_provider_is_the_one_exposed() {
		// Arrange
		struct NullProvider;
		impl StaticProvider for NullProvider {
			fn find(
				&self,
				_request: &http::Request<Bytes>,
			) -> Result<Option<boson_static::StaticFile>, boson_static::StaticError> {
				Ok(None)
			}
		}
		let preset: Arc<dyn StaticProvider> = Arc::new(NullProvider);

		// Act
		let services = BosonServices::builder(BosonConfig::default())
			.with_static_provider(preset.clone())
			.build();

		// Assert
		assert!(Arc::ptr_eq(&preset, &services.static_provider));
	}

	#[rstest]
	fn test_custom_decoder_list_replaces_the_stock_decoders() {
		// Arrange
		struct CsvDecoder;
		impl BodyDecoder for CsvDecoder {
			fn supports(&self, content_type: &str) -> bool {
				content_type.starts_with("text/csv")
			}

			fn decode(
				&self,
				_content_type: &str,
				_body: &Bytes,
			) -> boson_http::Result<boson_http::DecodedBody> {
				Ok(boson_http::DecodedBody::Form(vec![(
					"decoder".to_string(),
					"csv".to_string(),
				)]))
			}
		}

		// Act
		let services = BosonServices::builder(BosonConfig::default())
			.with_body_decoders(vec![Arc::new(CsvDecoder)])
			.build();

		// Assert
		let body = Bytes::from_static(b"a,b");
		assert_eq!(
			services.body_decoders.decode(Some("text/csv"), &body),
			boson_http::DecodedBody::Form(vec![("decoder".to_string(), "csv".to_string())])
		);
		// The stock form decoder is gone; its content type now stays raw.
		assert_eq!(
			services
				.body_decoders
				.decode(Some("application/x-www-form-urlencoded"), &body),
			boson_http::DecodedBody::Raw(body.clone())
		);
	}

	#[rstest]
	fn test_custom_globals_provider_reaches_the_adapter() {
		// Arrange
		struct Fixed;
		impl ServerGlobalsProvider for Fixed {
			fn globals(&self, _request: &http::Request<Bytes>) -> HashMap<String, String> {
				HashMap::from([("APP_ENV".to_string(), "test".to_string())])
			}
		}

		// Act
		let services = BosonServices::builder(BosonConfig::default())
			.with_globals_provider(Arc::new(Fixed))
			.build();
		let native = http::Request::builder()
			.uri("boson://localhost/")
			.body(Bytes::new())
			.unwrap();
		let request = services.adapter.create_request(&native).unwrap();

		// Assert
		assert_eq!(
			request.server.get("APP_ENV").map(String::as_str),
			Some("test")
		);
		assert!(!request.server.contains_key("REQUEST_METHOD"));
	}
}
