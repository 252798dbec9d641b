use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
};

pub struct GetAuctionByIdInput {
    pub listing_id: entities::ListingId,
}

impl Service {
    pub async fn get_auction_by_id(
        &self,
        input: GetAuctionByIdInput,
    ) -> Result<entities::Auction, RestError> {
        self.repo
            .get_in_memory_auction_by_id(&input.listing_id)
            .await
            .ok_or(RestError::ListingNotFound)
    }
}
