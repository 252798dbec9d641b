use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    pub async fn get_or_create_in_memory_listing_lock(
        &self,
        listing_id: entities::ListingId,
    ) -> entities::ListingLock {
        self.in_memory_store
            .listing_lock
            .lock()
            .await
            .entry(listing_id)
            .or_default()
            .clone()
    }
}
