//! Domain error model.

use thiserror::Error;

use crate::id::{AccountId, TransactionId};

/// Result type used across the banking domain.
pub type BankResult<T> = Result<T, BankError>;

/// Domain-level error.
///
/// Deterministic failures of the banking core. There is no retry logic and no
/// partial-failure recovery anywhere in the system; every error propagates
/// synchronously to the immediate caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    /// No account matched the supplied (email, password) pair.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A transfer amount exceeded the sender's balance.
    ///
    /// Raised before any mutation, so both balances are untouched on this
    /// path.
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: i64, requested: i64 },

    /// An operation referenced an account the ledger does not hold.
    #[error("unknown account: {0}")]
    AccountNotFound(AccountId),

    /// An operation referenced a transaction the ledger does not hold.
    #[error("unknown transaction: {0}")]
    TransactionNotFound(TransactionId),

    /// An identifier failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A ledger lock was poisoned by a panicking writer.
    #[error("ledger lock poisoned")]
    LockPoisoned,
}

impl BankError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
