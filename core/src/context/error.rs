//! Error types for configuration

use thiserror::Error;

/// Errors while loading, saving or validating [`AppConfig`](shorts_types::AppConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),

    #[error("invalid API base URL '{value}'")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: Option<url::ParseError>,
    },

    #[error("preview limit must be at least 1")]
    InvalidPreviewLimit,
}
