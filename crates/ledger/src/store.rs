use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use minibank_accounts::{Account, NewAccount};
use minibank_core::{AccountId, BankError, BankResult, TransactionId};

use crate::transaction::Transaction;

#[derive(Debug, Default)]
struct LedgerInner {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
}

impl LedgerInner {
    fn account(&self, id: AccountId) -> BankResult<&Account> {
        self.accounts
            .iter()
            .find(|a| a.id() == id)
            .ok_or(BankError::AccountNotFound(id))
    }

    fn account_mut(&mut self, id: AccountId) -> BankResult<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or(BankError::AccountNotFound(id))
    }
}

/// In-memory ledger: the owning collections of accounts and transactions.
///
/// Both sequences are insertion-ordered and sit behind a single lock; methods
/// take `&self` and synchronize internally. The validate-then-mutate sequence
/// of `post_transfer` runs under one write-lock acquisition, so interleaved
/// transfers against the same sender cannot pass the balance check against a
/// stale balance.
///
/// No persistence: lifetime equals process lifetime.
#[derive(Debug, Default)]
pub struct LedgerStore {
    inner: RwLock<LedgerInner>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> BankResult<RwLockReadGuard<'_, LedgerInner>> {
        self.inner.read().map_err(|_| BankError::LockPoisoned)
    }

    fn write(&self) -> BankResult<RwLockWriteGuard<'_, LedgerInner>> {
        self.inner.write().map_err(|_| BankError::LockPoisoned)
    }

    /// Open an account with a zero balance and append it.
    ///
    /// Email uniqueness is not checked; duplicate credentials are permitted
    /// and credential lookup resolves to the first match.
    pub fn insert_account(&self, profile: NewAccount) -> BankResult<Account> {
        let account = Account::open(profile, Utc::now());
        let mut inner = self.write()?;
        inner.accounts.push(account.clone());
        Ok(account)
    }

    /// First account whose (email, password) pair matches exactly, in
    /// insertion order. Comparison is case-sensitive on both fields.
    pub fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> BankResult<Option<Account>> {
        let inner = self.read()?;
        Ok(inner
            .accounts
            .iter()
            .find(|a| a.credentials_match(email, password))
            .cloned())
    }

    /// Direct read of the stored record's balance.
    pub fn balance_of(&self, account: AccountId) -> BankResult<i64> {
        let inner = self.read()?;
        Ok(inner.account(account)?.balance())
    }

    /// Credit the stored record and return the new balance. Unchecked.
    pub fn deposit(&self, account: AccountId, amount: i64) -> BankResult<i64> {
        let mut inner = self.write()?;
        let record = inner.account_mut(account)?;
        record.deposit(amount);
        Ok(record.balance())
    }

    /// Debit the stored record and return the new balance.
    ///
    /// No floor check here; this is the direct path that bypasses the
    /// transfer-time validation, so the balance may go negative.
    pub fn withdraw(&self, account: AccountId, amount: i64) -> BankResult<i64> {
        let mut inner = self.write()?;
        let record = inner.account_mut(account)?;
        record.withdraw(amount);
        Ok(record.balance())
    }

    /// Validate and apply a transfer in one atomic step.
    ///
    /// On success the returned record is `Pending` and both balances already
    /// reflect the transfer. The record is appended to the log first, then
    /// the sender is debited and the recipient credited. On the
    /// insufficient-funds path nothing is mutated.
    pub fn post_transfer(
        &self,
        sender: AccountId,
        recipient: AccountId,
        amount: i64,
    ) -> BankResult<Transaction> {
        let mut inner = self.write()?;

        let balance = inner.account(sender)?.balance();
        inner.account(recipient)?;

        if balance < amount {
            return Err(BankError::InsufficientFunds {
                balance,
                requested: amount,
            });
        }

        let transaction = Transaction::pending(sender, recipient, amount, Utc::now());
        inner.transactions.push(transaction.clone());

        inner.account_mut(sender)?.withdraw(amount);
        inner.account_mut(recipient)?.deposit(amount);

        Ok(transaction)
    }

    /// Flip the stored record to `Completed` and return the updated snapshot.
    pub fn complete_transaction(&self, id: TransactionId) -> BankResult<Transaction> {
        let mut inner = self.write()?;
        let record = inner
            .transactions
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(BankError::TransactionNotFound(id))?;
        record.complete(Utc::now());
        Ok(record.clone())
    }

    /// Snapshot of one stored transaction.
    pub fn transaction(&self, id: TransactionId) -> BankResult<Transaction> {
        let inner = self.read()?;
        inner
            .transactions
            .iter()
            .find(|t| t.id() == id)
            .cloned()
            .ok_or(BankError::TransactionNotFound(id))
    }

    /// Transactions where the account is sender or recipient, in insertion
    /// order. Unknown accounts yield an empty history rather than an error.
    pub fn history_for(&self, account: AccountId) -> BankResult<Vec<Transaction>> {
        let inner = self.read()?;
        Ok(inner
            .transactions
            .iter()
            .filter(|t| t.is_participant(account))
            .cloned()
            .collect())
    }
}
