//! Application configuration
//!
//! The shape lives in shorts-types so the web front-end can deserialize it
//! without pulling in the native persistence layer. This module adds
//! validation, overrides and (natively) confy-backed persistence.

pub use shorts_types::AppConfig;

use tracing::warn;
use url::Url;

use super::ConfigError;

/// Overrides `api_base_url` when set and non-empty
pub const API_BASE_URL_ENV: &str = "SHORTS_API_BASE_URL";

#[cfg(not(target_arch = "wasm32"))]
const APP_NAME: &str = "shorts-trends";
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_NAME: &str = "config";

// ─────────────────────────────────────────────────────────────────────────────
// AppConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for AppConfig persistence and validation
pub trait AppConfigExt: Sized {
    #[cfg(not(target_arch = "wasm32"))]
    fn load() -> Result<Self, ConfigError>;
    #[cfg(not(target_arch = "wasm32"))]
    fn save(&self) -> Result<(), ConfigError>;
    #[cfg(not(target_arch = "wasm32"))]
    fn config_path() -> Result<std::path::PathBuf, ConfigError>;

    /// Parsed service base URL
    fn base_url(&self) -> Result<Url, ConfigError>;
    /// Check every field; returns the parsed base URL on success
    fn validate(&self) -> Result<Url, ConfigError>;
    fn with_base_url_override(self, base_url: Option<String>) -> Self;
    fn with_env_overrides(self) -> Self;
    /// This config if valid, otherwise the defaults
    fn validated_or_default(self) -> Result<(Self, Url), ConfigError>;
}

impl AppConfigExt for AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    fn load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn config_path() -> Result<std::path::PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, CONFIG_NAME)?)
    }

    fn base_url(&self) -> Result<Url, ConfigError> {
        let value = self.api_base_url.trim();
        let url = Url::parse(value).map_err(|source| ConfigError::InvalidBaseUrl {
            value: value.to_string(),
            source: Some(source),
        })?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                value: value.to_string(),
                source: None,
            });
        }
        Ok(url)
    }

    fn validate(&self) -> Result<Url, ConfigError> {
        if self.preview_limit == 0 {
            return Err(ConfigError::InvalidPreviewLimit);
        }
        self.base_url()
    }

    fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
        self
    }

    fn with_env_overrides(self) -> Self {
        let from_env = std::env::var(API_BASE_URL_ENV).ok();
        self.with_base_url_override(from_env)
    }

    fn validated_or_default(self) -> Result<(Self, Url), ConfigError> {
        match self.validate() {
            Ok(url) => Ok((self, url)),
            Err(err) => {
                warn!(error = %err, "invalid configuration, falling back to defaults");
                let defaults = AppConfig::default();
                let url = defaults.validate()?;
                Ok((defaults, url))
            }
        }
    }
}
