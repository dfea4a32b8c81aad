//! # Client configuration: `petperfect.toml`
//!
//! The client needs to know where the REST API lives and how long to wait
//! before firing a search-driven refetch.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://api.petperfect.example"
//!
//! [search]
//! debounce_ms = 400   # admin search inputs
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. TOML (de)serialisation and [`ClientConfig::from_env`]. |
//! | [`ApiConfig`] | REST base URL. |
//! | [`SearchConfig`] | Debounce delay for search inputs, default **400 ms**. |
//!
//! All structs derive `Default`, so an empty file equals the default config.

use serde::{Deserialize, Serialize};

/// Environment variable holding the REST base URL.
pub const API_URL_VAR: &str = "PETCARE_API_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Delay between the last keystroke and the refetch.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    400
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl ClientConfig {
    /// Builder method to set the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    /// Default config with the base URL taken from [`API_URL_VAR`].
    ///
    /// On wasm the variable is read at compile time, since the browser has no
    /// process environment; natively it is read at runtime first.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(url) = std::env::var(API_URL_VAR) {
                return Self::default().with_base_url(url);
            }
        }
        match option_env!("PETCARE_API_URL") {
            Some(url) => Self::default().with_base_url(url),
            None => Self::default(),
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "petperfect.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.search.debounce_ms, 400);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_partial_toml() {
        let config = ClientConfig::from_toml("[api]\nbase_url = \"https://api.test\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://api.test");
        assert_eq!(config.search.debounce_ms, 400);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default().with_base_url("https://x.test");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
