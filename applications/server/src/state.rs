/// Shared application state
use crate::{logging::Logger, services::AuthService};
use connectly_core::{SettingsStore, Storage};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub auth_service: Arc<AuthService>,
    pub settings: Arc<SettingsStore>,
    pub logger: &'static Logger,
}

impl AppState {
    pub fn new(
        storage: Arc<dyn Storage>,
        auth_service: Arc<AuthService>,
        settings: Arc<SettingsStore>,
        logger: &'static Logger,
    ) -> Self {
        Self {
            storage,
            auth_service,
            settings,
            logger,
        }
    }
}
