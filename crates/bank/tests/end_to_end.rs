//! Black-box run of the full usage scenario against the public API.

use std::time::Duration;

use minibank_accounts::NewAccount;
use minibank_bank::{Bank, BankConfig};
use minibank_ledger::TransactionStatus;

fn profile(first: &str, email: &str, password: &str) -> NewAccount {
    NewAccount {
        first_name: first.to_string(),
        last_name: "Example".to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test(start_paused = true)]
async fn the_demo_scenario_settles_as_documented() {
    let bank = Bank::new(BankConfig::default().with_confirmation_delay(Duration::from_secs(2)));

    let alice = bank
        .create_account(profile("Alice", "alice@example.com", "password123"))
        .unwrap();
    let bob = bank
        .create_account(profile("Bob", "bob@example.com", "securepassword"))
        .unwrap();

    bank.deposit(alice.id(), 1_000).unwrap();
    bank.deposit(bob.id(), 500).unwrap();

    let authenticated = bank
        .authenticate("alice@example.com", "password123")
        .unwrap();
    assert_eq!(authenticated.id(), alice.id());
    assert_eq!(bank.balance(authenticated.id()).unwrap(), 1_000);

    let transaction = bank
        .transfer_funds(alice.id(), bob.id(), 500)
        .await
        .unwrap();

    assert_eq!(bank.balance(alice.id()).unwrap(), 500);
    assert_eq!(bank.balance(bob.id()).unwrap(), 1_000);
    assert_eq!(transaction.status(), TransactionStatus::Completed);
    assert!(transaction.completed_at().is_some());

    let history = bank.history(alice.id()).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id(), transaction.id());
    assert_eq!(history[0].amount(), 500);
    assert_eq!(bank.history(bob.id()).unwrap().len(), 1);
}
