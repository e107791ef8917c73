//! Deferred confirmation of posted transfers.

use std::time::Duration;

use async_trait::async_trait;

use minibank_core::TransactionId;

/// Confirmation step for a posted transfer.
///
/// Confirmation cannot fail and cannot be cancelled; it only determines when
/// the transfer's record flips to completed. The trait is a seam so the
/// coordinator can be driven deterministically in tests, not a failure
/// policy.
#[async_trait]
pub trait Confirmation: Send + Sync {
    /// Suspend until the transfer identified by `transaction` counts as
    /// confirmed.
    async fn confirm(&self, transaction: TransactionId);
}

/// Production confirmation: a fixed-duration timer.
#[derive(Debug, Clone)]
pub struct FixedDelayConfirmation {
    delay: Duration,
}

impl FixedDelayConfirmation {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Confirmation for FixedDelayConfirmation {
    async fn confirm(&self, _transaction: TransactionId) {
        tokio::time::sleep(self.delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn waits_for_the_configured_delay() {
        let confirmation = FixedDelayConfirmation::new(Duration::from_secs(2));
        let started = tokio::time::Instant::now();

        confirmation.confirm(TransactionId::new()).await;

        assert!(started.elapsed() >= Duration::from_secs(2));
    }
}
