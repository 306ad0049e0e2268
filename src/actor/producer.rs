// ABOUTME: Producer actor - deposits bounded random amounts into the shared account.
// ABOUTME: Paced by a configurable delay; exits cleanly when the shutdown signal fires.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::actor::{Actor, ActorReport};
use super::config::ActorConfig;
use super::shutdown::Shutdown;
use crate::account::Account;
use crate::error::TillError;

/// Deposits a random amount each iteration, then pauses for the pacing
/// delay. Deposits never block on the account's condition, so the pause is
/// the producer's only suspension point besides the lock itself.
pub struct Producer {
    actor_id: String,
    account: Arc<Account>,
    config: ActorConfig,
}

impl Producer {
    /// Create a producer over a shared account.
    pub fn new(account: Arc<Account>, config: ActorConfig) -> Self {
        Self {
            actor_id: Uuid::new_v4().to_string(),
            account,
            config,
        }
    }

    /// Get the actor ID.
    pub fn actor_id(&self) -> &str {
        &self.actor_id
    }
}

#[async_trait]
impl Actor for Producer {
    fn name(&self) -> &str {
        "producer"
    }

    async fn run(&self, shutdown: Shutdown) -> Result<ActorReport, TillError> {
        let mut iterations = 0u64;
        let mut total_amount = 0i64;

        while !shutdown.is_cancelled() {
            let amount = self.config.draw_amount();
            self.account.deposit(amount).await?;
            iterations += 1;
            total_amount += amount;

            tokio::select! {
                biased;
                () = shutdown.cancelled() => break,
                () = tokio::time::sleep(self.config.pace) => {}
            }
        }

        Ok(ActorReport {
            actor_id: self.actor_id.clone(),
            name: self.name().to_string(),
            iterations,
            total_amount,
        })
    }
}
