//! # Client settings: where the backend lives
//!
//! Loaded with the `config` crate from, in increasing priority:
//!
//! 1. Built-in defaults. The default base URL can be baked in at compile time
//!    with the `MEETYOU_API_URL` environment variable, which is how browser
//!    builds (no runtime environment) get configured.
//! 2. An optional `meetyou.toml` in the working directory (native only).
//! 3. Environment variables prefixed with `MEETYOU`, sections separated by
//!    `__`, e.g. `MEETYOU__API__BASE_URL=http://api.example.com`.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//! ```

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

fn default_base_url() -> &'static str {
    option_env!("MEETYOU_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        let builder = Config::builder().set_default("api.base_url", default_base_url())?;

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.add_source(
            config::File::new("meetyou.toml", config::FileFormat::Toml).required(false),
        );

        builder
            .add_source(
                Environment::with_prefix("MEETYOU")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<Self>()
            .and_then(Self::validated)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Message(format!(
                "api.base_url must be an http(s) URL, got \"{url}\""
            )));
        }
        Ok(self)
    }

    /// Load settings, falling back to the defaults when loading fails.
    pub fn load() -> Self {
        Self::new().unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings, using defaults: {e}");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::{remove_var, set_var};

    const BASE_URL_VAR: &str = "MEETYOU__API__BASE_URL";

    // One test so the env var is never shared between threads
    #[test]
    fn test_settings() {
        remove_var(BASE_URL_VAR);
        assert_eq!(Settings::new().unwrap(), Settings::default());
        assert!(Settings::default().api.base_url.starts_with("http"));

        set_var(BASE_URL_VAR, "http://users.internal:9000");
        let settings = Settings::new().unwrap();
        assert_eq!(settings.api.base_url, "http://users.internal:9000");

        set_var(BASE_URL_VAR, "users.internal");
        assert!(Settings::new().is_err());
        assert_eq!(Settings::load(), Settings::default());

        remove_var(BASE_URL_VAR);
    }
}
