use {
    super::{
        get_auction_by_id::GetAuctionByIdInput,
        grant_approval::GrantApprovalInput,
        Service,
    },
    crate::{
        api::RestError,
        auction::entities,
    },
};

pub struct AcceptTermsInput {
    pub listing_id: entities::ListingId,
    pub bidder_id:  entities::BidderId,
}

impl Service {
    /// Moves the bidder to pending approval and asks the approval provider in the background.
    #[tracing::instrument(
        skip_all,
        fields(listing_id = %input.listing_id, bidder_id = input.bidder_id),
        err(level = tracing::Level::TRACE)
    )]
    pub async fn accept_terms(
        &self,
        input: AcceptTermsInput,
    ) -> Result<entities::RegistrationStatus, RestError> {
        let listing_lock = self
            .repo
            .get_or_create_in_memory_listing_lock(input.listing_id)
            .await;
        let result = self.accept_terms_for_lock(&input, listing_lock).await;
        self.repo
            .remove_in_memory_listing_lock(&input.listing_id)
            .await;
        let status = result?;

        self.task_tracker.spawn({
            let service = self.clone();
            async move {
                service
                    .request_approval(input.listing_id, input.bidder_id)
                    .await;
            }
        });
        Ok(status)
    }

    /// The listing can not be removed between the existence check and the transition.
    async fn accept_terms_for_lock(
        &self,
        input: &AcceptTermsInput,
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
                entities::Registration::accept_terms,
            )
            .await
            .map_err(RestError::from)
    }

    async fn request_approval(&self, listing_id: entities::ListingId, bidder_id: entities::BidderId) {
        match self
            .approval_provider
            .request_approval(listing_id, bidder_id.clone())
            .await
        {
            Ok(()) => {
                if let Err(err) = self
                    .grant_approval(GrantApprovalInput {
                        listing_id,
                        bidder_id: bidder_id.clone(),
                    })
                    .await
                {
                    tracing::warn!(error = ?err, %listing_id, bidder_id, "Failed to grant approval");
                }
            }
            Err(err) => {
                tracing::error!(
                    error = ?err,
                    %listing_id,
                    bidder_id,
                    "Approval request failed, registration stays pending"
                );
            }
        }
    }
}
