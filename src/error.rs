// ABOUTME: Defines all error types for the till library using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under TillError.

/// Top-level error type for the till library.
#[derive(Debug, thiserror::Error)]
pub enum TillError {
    #[error("Account error: {0}")]
    Account(#[from] AccountError),
}

/// Errors from account operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    /// Amounts must be strictly positive; the offending amount is carried.
    #[error("invalid amount: {0}")]
    InvalidAmount(i64),

    /// A deposit would overflow the balance. State is left untouched.
    #[error("balance overflow")]
    Overflow,

    /// A blocked withdrawal was cancelled before funds arrived.
    #[error("operation cancelled")]
    Cancelled,
}
