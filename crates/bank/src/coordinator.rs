//! The transfer coordinator.

use std::sync::Arc;

use tracing::{debug, info};

use minibank_accounts::{Account, NewAccount};
use minibank_core::{AccountId, BankError, BankResult};
use minibank_ledger::{LedgerStore, Transaction};

use crate::config::BankConfig;
use crate::confirm::{Confirmation, FixedDelayConfirmation};

// ─────────────────────────────────────────────────────────────────────────────
// Bank
// ─────────────────────────────────────────────────────────────────────────────

/// Transfer coordinator: owns the ledger store and exposes the only
/// operations of the system.
///
/// A `Bank` is an explicit instance with open construction; there is no
/// process-wide singleton. Methods take `&self` and the store synchronizes
/// internally, so a `Bank` can be shared across tasks.
///
/// # Invariants
/// - Accounts open with a zero balance.
/// - A transfer's balance check happens before any mutation; a rejected
///   transfer changes nothing.
/// - Both balances move synchronously, before the confirmation delay; the
///   transfer's record stays `Pending` until the delay elapses and then flips
///   to `Completed` exactly once.
pub struct Bank {
    store: LedgerStore,
    confirmation: Arc<dyn Confirmation>,
}

impl Bank {
    /// Coordinator with the production fixed-delay confirmation.
    pub fn new(config: BankConfig) -> Self {
        Self::with_confirmation(Arc::new(FixedDelayConfirmation::new(
            config.confirmation_delay,
        )))
    }

    /// Coordinator with a caller-supplied confirmation step.
    pub fn with_confirmation(confirmation: Arc<dyn Confirmation>) -> Self {
        Self {
            store: LedgerStore::new(),
            confirmation,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accounts
    // ─────────────────────────────────────────────────────────────────────────

    /// Open an account with a zero balance and append it to the store.
    ///
    /// Email uniqueness is not enforced; duplicate credentials are permitted
    /// and [`Bank::authenticate`] resolves to the first match.
    pub fn create_account(&self, profile: NewAccount) -> BankResult<Account> {
        let account = self.store.insert_account(profile)?;
        info!(account = %account.id(), email = account.email(), "account opened");
        Ok(account)
    }

    /// First account matching the (email, password) pair exactly.
    ///
    /// The scan is linear over insertion order and case-sensitive on both
    /// fields.
    pub fn authenticate(&self, email: &str, password: &str) -> BankResult<Account> {
        self.store
            .find_by_credentials(email, password)?
            .ok_or(BankError::InvalidCredentials)
    }

    /// Credit the account directly. No validation of sign or size.
    ///
    /// Returns the new balance.
    pub fn deposit(&self, account: AccountId, amount: i64) -> BankResult<i64> {
        let balance = self.store.deposit(account, amount)?;
        debug!(%account, amount, balance, "deposit applied");
        Ok(balance)
    }

    /// Debit the account directly, bypassing the transfer-time floor check.
    ///
    /// The balance may go negative. Returns the new balance.
    pub fn withdraw(&self, account: AccountId, amount: i64) -> BankResult<i64> {
        let balance = self.store.withdraw(account, amount)?;
        debug!(%account, amount, balance, "withdrawal applied");
        Ok(balance)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transfers
    // ─────────────────────────────────────────────────────────────────────────

    /// Move `amount` from `sender` to `recipient`.
    ///
    /// The balance check and both mutations happen synchronously, before the
    /// confirmation delay; while the delay is pending the log already shows
    /// the moved balances next to a `Pending` record. The returned record is
    /// `Completed`.
    ///
    /// Fails with [`BankError::InsufficientFunds`] when the sender's balance
    /// is below `amount`, in which case nothing was mutated. The confirmation
    /// step itself has no failure path.
    pub async fn transfer_funds(
        &self,
        sender: AccountId,
        recipient: AccountId,
        amount: i64,
    ) -> BankResult<Transaction> {
        let transaction = self.store.post_transfer(sender, recipient, amount)?;
        debug!(
            transaction = %transaction.id(),
            %sender,
            %recipient,
            amount,
            "transfer posted"
        );

        self.confirmation.confirm(transaction.id()).await;

        let completed = self.store.complete_transaction(transaction.id())?;
        info!(transaction = %completed.id(), amount, "transfer confirmed");
        Ok(completed)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Current balance of the stored account record.
    pub fn balance(&self, account: AccountId) -> BankResult<i64> {
        self.store.balance_of(account)
    }

    /// Transactions the account participated in, in creation order.
    ///
    /// Unknown accounts yield an empty history rather than an error.
    pub fn history(&self, account: AccountId) -> BankResult<Vec<Transaction>> {
        self.store.history_for(account)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
