// ABOUTME: Consumer actor - withdraws bounded random amounts from the shared account.
// ABOUTME: Blocks in the account while funds are short; exits cleanly on shutdown.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::actor::{Actor, ActorReport};
use super::config::ActorConfig;
use super::shutdown::Shutdown;
use crate::account::Account;
use crate::error::{AccountError, TillError};

/// Withdraws a random amount each iteration. When the balance is short the
/// withdrawal suspends inside the account until deposits catch up, so the
/// consumer needs no pacing of its own: it is paced by the producer.
pub struct Consumer {
    actor_id: String,
    account: Arc<Account>,
    config: ActorConfig,
}

impl Consumer {
    /// Create a consumer over a shared account.
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
impl Actor for Consumer {
    fn name(&self) -> &str {
        "consumer"
    }

    async fn run(&self, shutdown: Shutdown) -> Result<ActorReport, TillError> {
        let mut iterations = 0u64;
        let mut total_amount = 0i64;

        while !shutdown.is_cancelled() {
            let amount = self.config.draw_amount();
            match self
                .account
                .withdraw_with_cancel(amount, shutdown.cancelled())
                .await
            {
                Ok(_) => {
                    iterations += 1;
                    total_amount += amount;
                }
                // Same clean exit the producer takes: cancellation is not
                // a failure, and it must never leave this loop silently dead.
                Err(AccountError::Cancelled) => break,
                Err(e) => return Err(e.into()),
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
