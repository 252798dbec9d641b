use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
};

pub struct GetBidsInput {
    pub listing_id: entities::ListingId,
}

impl Service {
    /// Bid history of the listing, most recent first.
    #[tracing::instrument(skip_all, fields(listing_id = %input.listing_id), err(level = tracing::Level::TRACE))]
    pub async fn get_bids(&self, input: GetBidsInput) -> Result<Vec<entities::Bid>, RestError> {
        self.repo.get_bids(&input.listing_id).await
    }
}
