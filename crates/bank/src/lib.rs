//! Transfer coordinator for the banking simulation.
//!
//! `Bank` owns the ledger store and exposes the only operations of the
//! system: account creation, authentication, funds transfer with its deferred
//! confirmation step, and the balance/history queries.

pub mod config;
pub mod confirm;
pub mod coordinator;

pub use config::BankConfig;
pub use confirm::{Confirmation, FixedDelayConfirmation};
pub use coordinator::Bank;
