use {
    super::{
        get_auction_by_id::GetAuctionByIdInput,
        Service,
    },
    crate::{
        api::RestError,
        auction::entities,
    },
};

pub struct GetRegistrationInput {
    pub listing_id: entities::ListingId,
    pub bidder_id:  entities::BidderId,
}

impl Service {
    pub async fn get_registration(
        &self,
        input: GetRegistrationInput,
    ) -> Result<entities::RegistrationStatus, RestError> {
        self.get_auction_by_id(GetAuctionByIdInput {
            listing_id: input.listing_id,
        })
        .await?;
        Ok(self
            .repo
            .get_registration(input.listing_id, &input.bidder_id)
            .await
            .status())
    }
}
