use {
    super::Service,
    crate::auction::entities,
    anyhow::anyhow,
};

pub struct ConcludeAuctionInput {
    pub listing_id: entities::ListingId,
}

impl Service {
    /// Announces the end of an auction whose countdown reached zero.
    ///
    /// Runs under the listing lock, so a bid that passed validation before the end is part of the result.
    #[tracing::instrument(skip_all, fields(listing_id = %input.listing_id, winning_bid_id))]
    pub async fn conclude_auction(&self, input: ConcludeAuctionInput) -> anyhow::Result<()> {
        let listing_lock = self
            .repo
            .get_or_create_in_memory_listing_lock(input.listing_id)
            .await;
        let result = self.conclude_auction_for_lock(&input, listing_lock).await;
        self.repo
            .remove_in_memory_listing_lock(&input.listing_id)
            .await;
        result
    }

    async fn conclude_auction_for_lock(
        &self,
        input: &ConcludeAuctionInput,
        listing_lock: entities::ListingLock,
    ) -> anyhow::Result<()> {
        let _guard = listing_lock.lock().await;
        let auction = self
            .repo
            .get_in_memory_auction_by_id(&input.listing_id)
            .await
            .ok_or_else(|| anyhow!("Listing not found: {}", input.listing_id))?;
        let winning_bid = auction.ledger.leading_bid().cloned();
        if let Some(bid) = &winning_bid {
            tracing::Span::current().record("winning_bid_id", bid.id.to_string());
        }
        tracing::info!(
            listing_id = %input.listing_id,
            bid_count = auction.ledger.len(),
            current_bid = auction.ledger.current_bid(),
            "Concluding auction"
        );
        self.repo.remove_countdown(&input.listing_id).await;
        self.notification_sink
            .notify(entities::SessionEvent::AuctionEnded {
                listing_id: input.listing_id,
                winning_bid,
            });
        Ok(())
    }
}
