use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    /// Removes the auction together with every registration made for it.
    #[tracing::instrument(skip_all, fields(listing_id = %listing_id))]
    pub async fn remove_in_memory_auction(
        &self,
        listing_id: &entities::ListingId,
    ) -> Option<entities::Auction> {
        let auction = self
            .in_memory_store
            .auctions
            .write()
            .await
            .remove(listing_id);
        self.in_memory_store
            .registrations
            .write()
            .await
            .retain(|(registered_listing_id, _), _| registered_listing_id != listing_id);
        auction
    }
}
