//! Ledger domain module.
//!
//! Owns the transaction record with its confirmation lifecycle and the
//! in-memory store holding both collections of the system. The store exposes
//! the only mutation entry points; nothing outside this crate can touch a
//! stored record directly.

pub mod store;
pub mod transaction;

pub use store::LedgerStore;
pub use transaction::{Transaction, TransactionStatus};
