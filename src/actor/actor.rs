// ABOUTME: The Actor trait and the report actors return on clean shutdown.
// ABOUTME: Object-safe so a driver can spawn any mix of actors uniformly.

use async_trait::async_trait;
use serde::Serialize;

use super::shutdown::Shutdown;
use crate::error::TillError;

/// An actor that runs a loop against a shared account until cancelled.
///
/// Cancellation is uniform across actors: when the shutdown signal fires,
/// `run` exits its loop cleanly and returns a report. Only non-recoverable
/// errors are returned as `Err`; the caller decides how to surface them.
#[async_trait]
pub trait Actor: Send + Sync {
    /// Human-readable name for reports and logs.
    fn name(&self) -> &str;

    /// Run the actor loop until the shutdown signal fires.
    async fn run(&self, shutdown: Shutdown) -> Result<ActorReport, TillError>;
}

/// Summary of an actor's work, returned when its loop exits cleanly.
#[derive(Debug, Clone, Serialize)]
pub struct ActorReport {
    /// Unique identifier for this actor instance.
    pub actor_id: String,

    /// The actor's name.
    pub name: String,

    /// Number of committed operations.
    pub iterations: u64,

    /// Sum of all committed amounts.
    pub total_amount: i64,
}
