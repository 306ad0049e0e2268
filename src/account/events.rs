// ABOUTME: Observable events emitted by account operations.
// ABOUTME: Events are ordered by critical-section commit order, not wall-clock.

use serde::Serialize;

/// Events emitted by [`Account`](super::Account) operations.
///
/// Every event is emitted while the account lock is held, so the order in
/// which subscribers receive events is exactly the order in which the
/// operations committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccountEvent {
    /// A deposit committed. `balance` is the balance after the deposit.
    Deposit { amount: i64, balance: i64 },

    /// A withdrawal found insufficient funds and is about to block.
    /// Emitted once per failed predicate check.
    WithdrawWaiting { requested: i64, balance: i64 },

    /// A withdrawal committed. `balance` is the balance after the withdrawal.
    Withdraw { amount: i64, balance: i64 },
}

impl std::fmt::Display for AccountEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountEvent::Deposit { amount, balance } => {
                write!(f, "deposit {} (balance {})", amount, balance)
            }
            AccountEvent::WithdrawWaiting { requested, balance } => {
                write!(f, "waiting to withdraw {} (balance {})", requested, balance)
            }
            AccountEvent::Withdraw { amount, balance } => {
                write!(f, "withdraw {} (balance {})", amount, balance)
            }
        }
    }
}
