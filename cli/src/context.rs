use std::sync::Arc;

use shorts_core::{
    AppConfig, AppConfigExt, ConfigError, Drilldowns, HttpVideoSource, OverlayStack,
    QueryController, SelectionState,
};
use tokio::sync::{Mutex, RwLock};

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the core state machines.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<AppConfig>,
    pub source: HttpVideoSource,
    pub selection: Arc<RwLock<SelectionState>>,
    pub controller: Arc<Mutex<QueryController>>,
    pub drilldowns: Arc<Mutex<Drilldowns>>,
    pub overlays: Arc<Mutex<OverlayStack>>,
}

impl CliContext {
    /// Build the context from a resolved config. Invalid values fall back to defaults.
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let (config, base_url) = config.validated_or_default()?;
        Ok(Self {
            selection: Arc::new(RwLock::new(SelectionState::from_config(&config))),
            source: HttpVideoSource::new(base_url),
            config: Arc::new(config),
            controller: Arc::new(Mutex::new(QueryController::new())),
            drilldowns: Arc::new(Mutex::new(Drilldowns::new())),
            overlays: Arc::new(Mutex::new(OverlayStack::new())),
        })
    }

    pub fn preview_limit(&self) -> usize {
        self.config.preview_limit
    }
}
