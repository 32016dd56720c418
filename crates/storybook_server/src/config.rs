//! Server configuration.

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use storybook_error::ConfigError;

const DEFAULT_CONFIG: &str = include_str!("../defaults.toml");

/// Settings for the story endpoint.
///
/// # Example
///
/// ```
/// use storybook_server::ServerConfig;
///
/// let config = ServerConfig::from_toml_str("port = 8080").unwrap();
/// assert_eq!(*config.port(), 8080);
/// assert_eq!(config.host(), "127.0.0.1");
/// assert_eq!(config.model(), "gpt-4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ServerConfig {
    /// Interface to bind
    host: String,
    /// Port to bind
    port: u16,
    /// Model identifier sent to the provider
    model: String,
    /// Answer 400 for an empty `entries` array
    reject_empty_entries: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            model: storybook_core::STORY_MODEL.to_string(),
            reject_empty_entries: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from every source.
    ///
    /// Sources in order of precedence (later sources override earlier):
    /// 1. Built-in defaults
    /// 2. `~/.config/storybook/storybook.toml`
    /// 3. `./storybook.toml`, or `path` when given
    /// 4. `STORYBOOK_*` environment variables (e.g. `STORYBOOK_PORT=8080`)
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `path` is missing or any source fails
    /// to parse.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None::<Vec<(String, String)>>)
    }

    /// Like [`load`](Self::load), with the environment supplied by the caller.
    ///
    /// `None` reads the process environment.
    pub fn load_with_env<I>(path: Option<&Path>, env: Option<I>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storybook/storybook.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("storybook").required(false)),
        };

        let environment = Environment::with_prefix("STORYBOOK").try_parsing(true);
        let environment = match env {
            Some(vars) => environment.source(Some(vars.into_iter().collect())),
            None => environment,
        };

        Self::finish(builder.add_source(environment))
    }

    /// Parse a TOML document layered over the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or a value has the
    /// wrong type.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::finish(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from_str(toml, FileFormat::Toml)),
        )
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))
    }

    /// Override the bind interface.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Override the bind port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the empty-entries policy.
    pub fn with_reject_empty_entries(mut self, reject: bool) -> Self {
        self.reject_empty_entries = reject;
        self
    }

    /// `host:port` for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
