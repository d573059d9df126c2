//! Shared application state.

use std::sync::Arc;

use chrono_tz::Tz;
use tokio::sync::RwLock;

use crate::db::DatabaseService;
use crate::registry::CityRegistry;
use crate::weather::WeatherClient;

/// Application state shared with request handlers.
///
/// Service handles are written only by the lifecycle manager: set once at
/// startup, taken once at shutdown. Handlers read them.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Weather client handle; `None` before startup and after shutdown.
    weather: Arc<RwLock<Option<Arc<WeatherClient>>>>,
    /// Database handle placeholder; never populated.
    database: Arc<RwLock<Option<Arc<DatabaseService>>>>,
    /// Monitored city registry.
    registry: &'static CityRegistry,
    /// Timezone for timestamps on the rendered page.
    display_tz: Tz,
}

impl AppState {
    /// Create state with no services attached.
    pub fn new(registry: &'static CityRegistry, display_tz: Tz) -> Self {
        Self {
            weather: Arc::new(RwLock::new(None)),
            database: Arc::new(RwLock::new(None)),
            registry,
            display_tz,
        }
    }

    /// The city registry.
    pub fn registry(&self) -> &'static CityRegistry {
        self.registry
    }

    /// The display timezone.
    pub fn display_tz(&self) -> Tz {
        self.display_tz
    }

    /// Current weather client handle, if initialized.
    pub async fn weather(&self) -> Option<Arc<WeatherClient>> {
        self.weather.read().await.clone()
    }

    /// Attach the weather client. Called by the lifecycle manager.
    pub async fn set_weather(&self, client: Arc<WeatherClient>) {
        *self.weather.write().await = Some(client);
    }

    /// Detach and return the weather client. Called at shutdown.
    pub async fn take_weather(&self) -> Option<Arc<WeatherClient>> {
        self.weather.write().await.take()
    }

    /// Whether persistence is enabled. Always false with the inert stub.
    pub async fn database_enabled(&self) -> bool {
        self.database.read().await.is_some()
    }

    /// Detach and return the database service. Called at shutdown.
    pub async fn take_database(&self) -> Option<Arc<DatabaseService>> {
        self.database.write().await.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn state_starts_with_no_services() {
        let state = AppState::new(CityRegistry::global(), chrono_tz::Europe::Moscow);

        assert!(state.weather().await.is_none());
        assert!(!state.database_enabled().await);
    }
}
