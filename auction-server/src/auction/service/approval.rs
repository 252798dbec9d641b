#[cfg(test)]
use mockall::automock;
use {
    crate::auction::entities,
    axum::async_trait,
    std::{
        fmt::Debug,
        time::Duration,
    },
};

/// Grants a bidder's registration for a listing once the bidder accepted the terms.
///
/// Resolving with `Ok` means the approval was granted. An error leaves the registration pending.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ApprovalProvider: Debug + Send + Sync + 'static {
    async fn request_approval(
        &self,
        listing_id: entities::ListingId,
        bidder_id: entities::BidderId,
    ) -> anyhow::Result<()>;
}

/// Approves every registration after a fixed delay.
#[derive(Debug, Clone)]
pub struct DelayedApprovalProvider {
    delay: Duration,
}

impl DelayedApprovalProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ApprovalProvider for DelayedApprovalProvider {
    async fn request_approval(
        &self,
        listing_id: entities::ListingId,
        bidder_id: entities::BidderId,
    ) -> anyhow::Result<()> {
        tracing::debug!(%listing_id, bidder_id, delay = ?self.delay, "Waiting for approval");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        uuid::Uuid,
    };

    #[tokio::test(start_paused = true)]
    async fn test_delayed_approval_waits_for_delay() {
        let provider = DelayedApprovalProvider::new(Duration::from_secs(3));
        let start = tokio::time::Instant::now();
        provider
            .request_approval(Uuid::new_v4(), "u1".to_string())
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_secs(3));
    }
}
