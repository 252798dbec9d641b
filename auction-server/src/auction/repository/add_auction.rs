use {
    super::Repository,
    crate::{
        api::RestError,
        auction::entities,
    },
    std::collections::hash_map::Entry,
};

impl Repository {
    #[tracing::instrument(skip_all, fields(listing_id = %auction.listing.id))]
    pub async fn add_auction(&self, auction: entities::Auction) -> Result<(), RestError> {
        match self
            .in_memory_store
            .auctions
            .write()
            .await
            .entry(auction.listing.id)
        {
            Entry::Occupied(_) => Err(RestError::BadParameters(format!(
                "Listing {} already exists",
                auction.listing.id
            ))),
            Entry::Vacant(entry) => {
                entry.insert(auction);
                Ok(())
            }
        }
    }
}
