use std::sync::Arc;

use crate::config::Config;
use crate::letter::date::{Clock, SystemClock};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Date source for letter headers. Default: SystemClock.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            clock: Arc::new(SystemClock),
        }
    }
}
