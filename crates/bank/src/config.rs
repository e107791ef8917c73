//! Coordinator configuration.

use std::time::Duration;

/// Configuration for a [`crate::Bank`] instance.
#[derive(Debug, Clone)]
pub struct BankConfig {
    /// How long the confirmation step of a transfer takes.
    pub confirmation_delay: Duration,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            confirmation_delay: Duration::from_secs(2),
        }
    }
}

impl BankConfig {
    pub fn with_confirmation_delay(mut self, delay: Duration) -> Self {
        self.confirmation_delay = delay;
        self
    }
}
