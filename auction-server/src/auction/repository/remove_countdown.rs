use {
    super::Repository,
    crate::auction::entities,
    tokio_util::sync::CancellationToken,
};

impl Repository {
    pub async fn remove_countdown(
        &self,
        listing_id: &entities::ListingId,
    ) -> Option<CancellationToken> {
        self.in_memory_store
            .countdowns
            .lock()
            .await
            .remove(listing_id)
    }
}
