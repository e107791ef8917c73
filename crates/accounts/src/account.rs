use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use minibank_core::AccountId;

/// Identity fields supplied when opening an account.
///
/// The password is kept as given. Credential hardening (hashing, salting) is
/// out of scope for this system; everything lives in memory for the process
/// lifetime only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// A bank account: identity, credentials, and a mutable balance.
///
/// Balances are in minor currency units (cents) and start at zero. The two
/// mutators are unchecked: `deposit` accepts any amount and `withdraw` has no
/// floor, so a direct withdrawal can push the balance negative. The transfer
/// coordinator performs its balance check before calling `withdraw`; nothing
/// here repeats it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    balance: i64,
    opened_at: DateTime<Utc>,
}

impl Account {
    /// Open a new account with a zero balance.
    pub fn open(profile: NewAccount, opened_at: DateTime<Utc>) -> Self {
        Self {
            id: AccountId::new(),
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            password: profile.password,
            balance: 0,
            opened_at,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Exact, case-sensitive comparison of both credential fields.
    pub fn credentials_match(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }

    /// balance += amount. No sign or size validation.
    pub fn deposit(&mut self, amount: i64) {
        self.balance += amount;
    }

    /// balance -= amount. No floor check; the result may be negative.
    pub fn withdraw(&mut self, amount: i64) {
        self.balance -= amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_profile() -> NewAccount {
        NewAccount {
            first_name: "Alice".to_string(),
            last_name: "Doe".to_string(),
            email: "alice@example.com".to_string(),
            password: "password123".to_string(),
        }
    }

    fn test_account() -> Account {
        Account::open(test_profile(), Utc::now())
    }

    #[test]
    fn opens_with_zero_balance() {
        let account = test_account();
        assert_eq!(account.balance(), 0);
    }

    #[test]
    fn deposit_adds_and_withdraw_subtracts() {
        let mut account = test_account();
        account.deposit(1_000);
        assert_eq!(account.balance(), 1_000);
        account.withdraw(400);
        assert_eq!(account.balance(), 600);
    }

    #[test]
    fn withdraw_has_no_floor() {
        let mut account = test_account();
        account.withdraw(250);
        assert_eq!(account.balance(), -250);
    }

    #[test]
    fn deposit_accepts_negative_amounts() {
        let mut account = test_account();
        account.deposit(-100);
        assert_eq!(account.balance(), -100);
    }

    #[test]
    fn credentials_match_is_exact() {
        let account = test_account();
        assert!(account.credentials_match("alice@example.com", "password123"));
        assert!(!account.credentials_match("Alice@example.com", "password123"));
        assert!(!account.credentials_match("alice@example.com", "Password123"));
        assert!(!account.credentials_match("alice@example.com", ""));
    }

    #[test]
    fn each_account_gets_a_fresh_id() {
        let a = test_account();
        let b = test_account();
        assert_ne!(a.id(), b.id());
    }
}
