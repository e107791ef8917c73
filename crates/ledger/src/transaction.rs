use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use minibank_core::{AccountId, TransactionId};

/// Transfer record lifecycle.
///
/// A record is born `Pending` and becomes `Completed` exactly once, when the
/// confirmation step lands. There is no Failed, Reversed, or Cancelled state:
/// balances move before confirmation, and confirmation never undoes anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
}

impl core::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransactionStatus::Pending => write!(f, "pending"),
            TransactionStatus::Completed => write!(f, "completed"),
        }
    }
}

/// One transfer's record.
///
/// Sender and recipient are held by identity, not by copy; the balances they
/// point at live on the account records in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    sender: AccountId,
    recipient: AccountId,
    amount: i64,
    status: TransactionStatus,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Fresh `Pending` record for a transfer.
    pub fn pending(
        sender: AccountId,
        recipient: AccountId,
        amount: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            sender,
            recipient,
            amount,
            status: TransactionStatus::Pending,
            created_at,
            completed_at: None,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn sender(&self) -> AccountId {
        self.sender
    }

    pub fn recipient(&self) -> AccountId {
        self.recipient
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn is_completed(&self) -> bool {
        self.status == TransactionStatus::Completed
    }

    /// Identity comparison against sender and recipient.
    pub fn is_participant(&self, account: AccountId) -> bool {
        self.sender == account || self.recipient == account
    }

    /// Flip `Pending` to `Completed`.
    ///
    /// Later calls are no-ops, so the transition happens at most once and a
    /// completed record never reverts.
    pub(crate) fn complete(&mut self, at: DateTime<Utc>) {
        if self.status == TransactionStatus::Pending {
            self.status = TransactionStatus::Completed;
            self.completed_at = Some(at);
        }
    }
}
