//! Placeholder persistence service.
//!
//! Present in the application state but never constructed by any code
//! path; the shutdown sequence tears it down if it ever exists.

use tracing::info;

/// Inert database service stub.
#[derive(Debug)]
pub struct DatabaseService;

impl DatabaseService {
    /// Log teardown. Holds no releasable resources.
    pub async fn stop(&self) {
        info!("database service stopped");
    }
}
