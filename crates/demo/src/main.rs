//! Demonstration driver: runs the documented usage scenario end to end.

use minibank_accounts::NewAccount;
use minibank_bank::{Bank, BankConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    minibank_observability::init();

    let bank = Bank::new(BankConfig::default());

    let alice = bank.create_account(NewAccount {
        first_name: "Alice".to_string(),
        last_name: "Doe".to_string(),
        email: "alice@example.com".to_string(),
        password: "password123".to_string(),
    })?;
    let bob = bank.create_account(NewAccount {
        first_name: "Bob".to_string(),
        last_name: "Smith".to_string(),
        email: "bob@example.com".to_string(),
        password: "securepassword".to_string(),
    })?;

    bank.deposit(alice.id(), 1_000)?;
    bank.deposit(bob.id(), 500)?;

    let authenticated = bank.authenticate("alice@example.com", "password123")?;
    tracing::info!(
        account = %authenticated.id(),
        balance = bank.balance(authenticated.id())?,
        "authenticated"
    );

    let transaction = bank.transfer_funds(alice.id(), bob.id(), 500).await?;
    tracing::info!(
        transaction = %transaction.id(),
        status = %transaction.status(),
        sender_balance = bank.balance(alice.id())?,
        recipient_balance = bank.balance(bob.id())?,
        "transfer settled"
    );

    for record in bank.history(alice.id())? {
        tracing::info!(
            transaction = %record.id(),
            sender = %record.sender(),
            recipient = %record.recipient(),
            amount = record.amount(),
            status = %record.status(),
            "history entry"
        );
    }

    Ok(())
}
