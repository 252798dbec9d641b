use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    pub async fn get_registration(
        &self,
        listing_id: entities::ListingId,
        bidder_id: &entities::BidderId,
    ) -> entities::Registration {
        self.in_memory_store
            .registrations
            .read()
            .await
            .get(&(listing_id, bidder_id.clone()))
            .cloned()
            .unwrap_or_default()
    }
}
