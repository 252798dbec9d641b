use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
};

pub struct RemoveListingInput {
    pub listing_id: entities::ListingId,
}

impl Service {
    /// Stops observing the listing and drops its auction state. No end event is emitted.
    #[tracing::instrument(skip_all, fields(listing_id = %input.listing_id), err(level = tracing::Level::TRACE))]
    pub async fn remove_listing(
        &self,
        input: RemoveListingInput,
    ) -> Result<entities::Auction, RestError> {
        let listing_lock = self
            .repo
            .get_or_create_in_memory_listing_lock(input.listing_id)
            .await;
        let result = {
            let _guard = listing_lock.lock().await;
            self.stop_countdown(&input.listing_id).await;
            self.repo
                .remove_in_memory_auction(&input.listing_id)
                .await
                .ok_or(RestError::ListingNotFound)
        };
        drop(listing_lock);
        self.repo
            .remove_in_memory_listing_lock(&input.listing_id)
            .await;
        result
    }
}
