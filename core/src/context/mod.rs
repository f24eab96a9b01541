mod config;
mod error;

pub use config::{API_BASE_URL_ENV, AppConfig, AppConfigExt};
pub use error::ConfigError;
