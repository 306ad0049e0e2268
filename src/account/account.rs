// ABOUTME: The shared account - a mutex-protected balance with wait/notify.
// ABOUTME: Withdrawals block until funds arrive; deposits broadcast-wake all waiters.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::{Mutex, Notify};

use super::events::AccountEvent;
use crate::error::AccountError;

/// Mutable state for the account, protected by a single mutex.
struct AccountState {
    balance: i64,
    taps: Vec<UnboundedSender<AccountEvent>>,
}

impl AccountState {
    /// Send an event to every live subscriber, pruning closed ones.
    fn emit(&mut self, event: &AccountEvent) {
        self.taps.retain(|tap| tap.send(event.clone()).is_ok());
    }
}

/// A shared balance coordinated between concurrent producers and consumers.
///
/// The account is the only shared mutable state: an integer balance behind a
/// [`Mutex`], with a [`Notify`] acting as the "funds may have arrived"
/// condition. tokio's async mutex grants the lock to contending tasks in
/// FIFO arrival order, so waiters (including those woken from the condition)
/// are serviced in the order they queued rather than by scheduler whim.
///
/// # Blocking Semantics
///
/// - [`deposit`](Self::deposit) never waits on the condition; at most it
///   queues briefly for the lock.
/// - [`withdraw`](Self::withdraw) blocks while the balance is below the
///   requested amount, releasing the lock for the duration of the wait so
///   deposits are never blocked by a waiting consumer.
/// - Every deposit wakes *all* blocked withdrawals. A wake is only a hint
///   that some deposit happened: each woken withdrawal re-checks its own
///   predicate under the lock and goes back to sleep if still unsatisfied.
pub struct Account {
    state: Mutex<AccountState>,
    deposited: Notify,
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

impl Account {
    /// Create a new account with a zero balance.
    pub fn new() -> Self {
        Self::with_balance(0)
    }

    /// Create a new account seeded with an initial balance.
    ///
    /// # Panics
    ///
    /// Panics if `balance` is negative.
    pub fn with_balance(balance: i64) -> Self {
        assert!(balance >= 0, "initial balance must be non-negative");

        Self {
            state: Mutex::new(AccountState {
                balance,
                taps: Vec::new(),
            }),
            deposited: Notify::new(),
        }
    }

    /// Get the current balance.
    pub async fn balance(&self) -> i64 {
        self.state.lock().await.balance
    }

    /// Subscribe to the account's event stream.
    ///
    /// Events arrive in commit order. The stream ends when the account is
    /// dropped; dropping the receiver unsubscribes.
    pub async fn subscribe(&self) -> UnboundedReceiver<AccountEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.state.lock().await.taps.push(tx);
        rx
    }

    /// Deposit an amount into the account and return the new balance.
    ///
    /// Wakes every withdrawal currently blocked on insufficient funds; any
    /// number of them might now be satisfiable, and the lock serializes
    /// their re-checks in queue order.
    ///
    /// Returns `Err(AccountError::InvalidAmount)` if `amount` is not
    /// positive, or `Err(AccountError::Overflow)` if the balance would wrap.
    /// The balance is untouched in both cases.
    pub async fn deposit(&self, amount: i64) -> Result<i64, AccountError> {
        let amount = validate(amount)?;

        let mut state = self.state.lock().await;
        let balance = state
            .balance
            .checked_add(amount)
            .ok_or(AccountError::Overflow)?;
        state.balance = balance;
        state.emit(&AccountEvent::Deposit { amount, balance });
        drop(state);

        // Broadcast, not single-wake: the condition doesn't know withdrawal
        // amounts, so every waiter must re-check its own predicate.
        self.deposited.notify_waiters();
        Ok(balance)
    }

    /// Withdraw an amount, waiting as long as it takes for funds to arrive.
    ///
    /// Returns the new balance. Equivalent to
    /// [`withdraw_with_cancel`](Self::withdraw_with_cancel) with a cancel
    /// future that never completes.
    pub async fn withdraw(&self, amount: i64) -> Result<i64, AccountError> {
        self.withdraw_with_cancel(amount, std::future::pending::<()>())
            .await
    }

    /// Withdraw an amount with cancellation support, returning the new balance.
    ///
    /// While the balance is below `amount`, the caller is suspended on the
    /// account's condition with the lock released, and re-checks the balance
    /// under the lock on every wake. Returns `Err(AccountError::Cancelled)`
    /// if the cancel future completes while waiting; the balance is left
    /// untouched and the lock is free.
    ///
    /// Cancellation is only observed while waiting: a withdrawal whose funds
    /// are available at check time commits even if `cancel` has completed.
    ///
    /// # Arguments
    ///
    /// * `amount` - Amount to withdraw. Must be positive.
    /// * `cancel` - A future that, when completed, cancels the wait.
    pub async fn withdraw_with_cancel<F>(
        &self,
        amount: i64,
        cancel: F,
    ) -> Result<i64, AccountError>
    where
        F: std::future::Future<Output = ()>,
    {
        let amount = validate(amount)?;
        tokio::pin!(cancel);

        loop {
            // Register interest in the next deposit before checking the
            // balance, so a deposit landing between the unlock below and the
            // select cannot be missed.
            let notified = self.deposited.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            {
                let mut state = self.state.lock().await;
                if state.balance >= amount {
                    let balance = state.balance - amount;
                    state.balance = balance;
                    state.emit(&AccountEvent::Withdraw { amount, balance });
                    return Ok(balance);
                }
                let balance = state.balance;
                state.emit(&AccountEvent::WithdrawWaiting {
                    requested: amount,
                    balance,
                });
            }

            tokio::select! {
                biased;
                () = &mut cancel => {
                    return Err(AccountError::Cancelled);
                }
                () = &mut notified => {
                    // A deposit happened; loop around and re-check.
                }
            }
        }
    }
}

fn validate(amount: i64) -> Result<i64, AccountError> {
    if amount <= 0 {
        return Err(AccountError::InvalidAmount(amount));
    }
    Ok(amount)
}
