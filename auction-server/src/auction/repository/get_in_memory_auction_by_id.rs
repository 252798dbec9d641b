use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    pub async fn get_in_memory_auction_by_id(
        &self,
        listing_id: &entities::ListingId,
    ) -> Option<entities::Auction> {
        self.in_memory_store
            .auctions
            .read()
            .await
            .get(listing_id)
            .cloned()
    }
}
