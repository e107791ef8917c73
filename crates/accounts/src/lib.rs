//! Accounts domain module.
//!
//! The account entity holds identity, credentials, and balance state. It has
//! no IO and performs no bounds checking of its own; the only floor check in
//! the system lives in the transfer coordinator.

pub mod account;

pub use account::{Account, NewAccount};
