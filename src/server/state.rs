use crate::application::config::{Config, Environment};
use crate::application::interfaces::OandaService;
use std::sync::Arc;

/// State shared by every request handler
///
/// Cheap to clone: the service sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Oanda operations
    pub service: Arc<dyn OandaService>,
    /// Account the service is bound to, reported by `/health`
    pub account_id: String,
    /// Environment the service talks to
    pub environment: Environment,
}

impl AppState {
    /// Creates the state from a configuration and the service built from it
    pub fn new(config: &Config, service: Arc<dyn OandaService>) -> Self {
        Self {
            service,
            account_id: config.credentials.account_id.clone(),
            environment: config.environment,
        }
    }
}
