//! Service startup and teardown.

use std::sync::Arc;

use tracing::{error, info};

use crate::config::Config;
use crate::error::{AppError, ConfigError, LifecycleError};
use crate::state::AppState;
use crate::weather::WeatherClient;

/// Lifecycle phase of the service manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing constructed yet.
    Uninitialized,
    /// Startup in progress.
    Initializing,
    /// Services constructed and published.
    Running,
    /// Teardown in progress.
    Stopping,
    /// Terminal. Only a fresh process may start again.
    Stopped,
}

/// Owns construction and teardown of the services held in [`AppState`].
#[derive(Debug)]
pub struct ServiceManager {
    state: AppState,
    phase: Phase,
}

impl ServiceManager {
    /// Create a manager around shared state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            phase: Phase::Uninitialized,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Construct and publish all services.
    ///
    /// Rejects a missing credential before constructing anything. On any
    /// initialization failure, runs `stop()` for cleanup symmetry and
    /// propagates the error.
    pub async fn start(&mut self, config: &Config) -> Result<(), AppError> {
        if self.phase == Phase::Stopped {
            return Err(LifecycleError::AlreadyStopped.into());
        }

        self.phase = Phase::Initializing;
        info!("starting services");

        match self.initialize(config).await {
            Ok(()) => {
                self.phase = Phase::Running;
                info!("services running");
                Ok(())
            }
            Err(e) => {
                error!("failed to initialize services: {e}");
                self.stop().await;
                Err(e)
            }
        }
    }

    async fn initialize(&mut self, config: &Config) -> Result<(), AppError> {
        if config.openweather_api_key.is_empty() {
            return Err(ConfigError::MissingCredential.into());
        }

        let client = Arc::new(WeatherClient::new(config)?);
        client.initialize().await;
        self.state.set_weather(client).await;

        Ok(())
    }

    /// Tear down all services. Idempotent: repeated calls are no-ops.
    pub async fn stop(&mut self) {
        if self.phase == Phase::Stopped {
            return;
        }

        self.phase = Phase::Stopping;
        info!("stopping services");

        if let Some(weather) = self.state.take_weather().await {
            weather.shutdown().await;
        }
        if let Some(database) = self.state.take_database().await {
            database.stop().await;
        }

        self.phase = Phase::Stopped;
        info!("services stopped");
    }
}
