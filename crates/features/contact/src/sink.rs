use crate::error::ContactError;
use folio_domain::ContactDraft;
use folio_domain::constants::SUBMIT_DELAY;
use std::future::Future;
use std::time::Duration;

/// Destination for submitted contact messages.
pub trait MessageSink {
    /// # Errors
    /// [`ContactError::Delivery`] when the message could not be handed off.
    fn deliver(&self, draft: &ContactDraft) -> impl Future<Output = Result<(), ContactError>>;
}

/// Stand-in transport: waits `delay` and reports success. Nothing leaves the
/// process.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSink {
    delay: Duration,
}

impl SimulatedSink {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSink {
    fn default() -> Self {
        Self::new(SUBMIT_DELAY)
    }
}

impl MessageSink for SimulatedSink {
    async fn deliver(&self, draft: &ContactDraft) -> Result<(), ContactError> {
        tracing::debug!(name = %draft.name, delay_ms = self.delay.as_millis(), "Simulating delivery");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
