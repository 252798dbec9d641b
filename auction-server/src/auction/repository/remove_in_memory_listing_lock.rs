use {
    super::Repository,
    crate::auction::entities,
    std::sync::Arc,
};

impl Repository {
    pub async fn remove_in_memory_listing_lock(&self, listing_id: &entities::ListingId) {
        let mut mutex_guard = self.in_memory_store.listing_lock.lock().await;
        let listing_lock = mutex_guard.get(listing_id);
        if let Some(listing_lock) = listing_lock {
            // Whenever there is no thread borrowing a lock for this listing, we can remove it from the locks HashMap.
            if Arc::strong_count(listing_lock) == 1 {
                mutex_guard.remove(listing_id);
            }
        }
    }
}
