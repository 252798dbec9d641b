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

pub struct GrantApprovalInput {
    pub listing_id: entities::ListingId,
    pub bidder_id:  entities::BidderId,
}

impl Service {
    /// Resolution of the approval request: a pending registration becomes approved.
    #[tracing::instrument(
        skip_all,
        fields(listing_id = %input.listing_id, bidder_id = input.bidder_id),
        err(level = tracing::Level::TRACE)
    )]
    pub async fn grant_approval(
        &self,
        input: GrantApprovalInput,
    ) -> Result<entities::RegistrationStatus, RestError> {
        let listing_lock = self
            .repo
            .get_or_create_in_memory_listing_lock(input.listing_id)
            .await;
        let result = self.grant_approval_for_lock(&input, listing_lock).await;
        self.repo
            .remove_in_memory_listing_lock(&input.listing_id)
            .await;
        let status = result?;
        self.notification_sink
            .notify(entities::SessionEvent::RegistrationApproved {
                listing_id: input.listing_id,
                bidder_id:  input.bidder_id,
            });
        Ok(status)
    }

    /// The listing may have been removed while the approval was pending.
    async fn grant_approval_for_lock(
        &self,
        input: &GrantApprovalInput,
        listing_lock: entities::ListingLock,
    ) -> Result<entities::RegistrationStatus, RestError> {
        let _guard = listing_lock.lock().await;
        self.get_auction_by_id(GetAuctionByIdInput {
            listing_id: input.listing_id,
        })
        .await?;
        self.repo
            .update_registration(
                input.listing_id,
                input.bidder_id.clone(),
                entities::Registration::on_approval_granted,
            )
            .await
            .map_err(RestError::from)
    }
}
