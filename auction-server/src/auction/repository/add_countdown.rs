use {
    super::Repository,
    crate::auction::entities,
    tokio_util::sync::CancellationToken,
};

impl Repository {
    /// Registers the cancellation token of a listing's countdown, cancelling the one it replaces.
    pub async fn add_countdown(&self, listing_id: entities::ListingId, token: CancellationToken) {
        if let Some(previous) = self
            .in_memory_store
            .countdowns
            .lock()
            .await
            .insert(listing_id, token)
        {
            previous.cancel();
        }
    }
}
