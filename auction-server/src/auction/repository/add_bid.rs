use {
    super::Repository,
    crate::{
        api::RestError,
        auction::entities,
    },
};

impl Repository {
    /// Records the bid and returns the listing's new current bid.
    pub async fn add_bid(&self, bid: entities::Bid) -> Result<entities::BidAmount, RestError> {
        let mut auctions = self.in_memory_store.auctions.write().await;
        let auction = auctions
            .get_mut(&bid.listing_id)
            .ok_or(RestError::ListingNotFound)?;
        auction.ledger.record(bid)?;
        Ok(auction.ledger.current_bid())
    }
}
