//! Backend wiring for the browser build
//!
//! The hosting page may assign a configuration object to
//! `window.__SHORTS_CONFIG__` before the bundle loads:
//!
//! ```js
//! window.__SHORTS_CONFIG__ = { api_base_url: "https://trends.example.com", preview_limit: 8 };
//! ```
//!
//! Missing fields take their defaults; a missing or unreadable object means
//! `AppConfig::default()`.

use shorts_core::{AppConfig, AppConfigExt, HttpVideoSource};
use tracing::{info, warn};
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__SHORTS_CONFIG__";

/// Resolved configuration plus the HTTP source bound to it.
#[derive(Clone)]
pub struct Backend {
    pub config: AppConfig,
    pub source: HttpVideoSource,
}

/// Read the page-provided config object, if any
fn page_config() -> AppConfig {
    let value = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if value.is_undefined() || value.is_null() {
        return AppConfig::default();
    }

    match serde_wasm_bindgen::from_value(value) {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "ignoring unreadable {CONFIG_GLOBAL}");
            AppConfig::default()
        }
    }
}

/// Build the backend from the page config. Invalid values fall back to defaults.
pub fn resolve_backend() -> Result<Backend, String> {
    let (config, base_url) = page_config()
        .validated_or_default()
        .map_err(|err| err.to_string())?;
    info!(api_base_url = %base_url, preview_limit = config.preview_limit, "dashboard configured");

    Ok(Backend {
        config,
        source: HttpVideoSource::new(base_url),
    })
}

impl PartialEq for Backend {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && self.source.base_url() == other.source.base_url()
    }
}
