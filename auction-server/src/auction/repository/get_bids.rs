use {
    super::Repository,
    crate::{
        api::RestError,
        auction::entities,
    },
};

impl Repository {
    pub async fn get_bids(
        &self,
        listing_id: &entities::ListingId,
    ) -> Result<Vec<entities::Bid>, RestError> {
        self.in_memory_store
            .auctions
            .read()
            .await
            .get(listing_id)
            .map(|auction| auction.ledger.history())
            .ok_or(RestError::ListingNotFound)
    }
}
