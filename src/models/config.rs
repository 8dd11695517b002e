//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

fn default_language() -> String {
    crate::i18n::DEFAULT_LANGUAGE.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Basic configuration shared across handlers.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub locales_dir: String,
    #[serde(default = "default_language")]
    pub default_language: String,
    pub secret: String,
    /// Root URL of the metadata back end serving `/api/assets/*`.
    pub api_base_url: String,
    /// Bearer token sent with every back-end request.
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
