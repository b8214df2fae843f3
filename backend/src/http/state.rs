//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::repository::FullRepository;
use crate::models::time::{ChronoTzResolver, Clock, LocalTimeResolver, SystemClock};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for database operations
    pub repository: Arc<dyn FullRepository>,
    /// Source of "now" for spot reports
    pub clock: Arc<dyn Clock>,
    pub resolver: Arc<dyn LocalTimeResolver>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// State with the system clock, the IANA resolver and default settings.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self {
            repository,
            clock: Arc::new(SystemClock),
            resolver: Arc::new(ChronoTzResolver),
            config: Arc::new(AppConfig::default()),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}
