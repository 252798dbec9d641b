use {
    super::{
        verification::{
            verify_bid,
            VerifyBidInput,
        },
        Service,
    },
    crate::{
        api::RestError,
        auction::entities,
    },
};

pub struct HandleBidInput {
    pub bid_create: entities::BidCreate,
}

impl Service {
    #[tracing::instrument(
        skip_all,
        fields(listing_id = %input.bid_create.listing_id, bidder_id = input.bid_create.bidder_id, amount = input.bid_create.amount, bid_id),
        err(level = tracing::Level::TRACE)
    )]
    pub async fn handle_bid(&self, input: HandleBidInput) -> Result<entities::Bid, RestError> {
        let listing_id = input.bid_create.listing_id;
        let listing_lock = self
            .repo
            .get_or_create_in_memory_listing_lock(listing_id)
            .await;
        let result = self.handle_bid_for_lock(input, listing_lock).await;
        self.repo.remove_in_memory_listing_lock(&listing_id).await;
        let bid = result?;
        tracing::Span::current().record("bid_id", bid.id.to_string());
        Ok(bid)
    }

    /// Validation and recording happen under the listing lock, so concurrent bids on one listing are serialized.
    async fn handle_bid_for_lock(
        &self,
        input: HandleBidInput,
        listing_lock: entities::ListingLock,
    ) -> Result<entities::Bid, RestError> {
        let _guard = listing_lock.lock().await;
        let bid_create = input.bid_create;
        let auction = self
            .repo
            .get_in_memory_auction_by_id(&bid_create.listing_id)
            .await
            .ok_or(RestError::ListingNotFound)?;
        let registration = self
            .repo
            .get_registration(bid_create.listing_id, &bid_create.bidder_id)
            .await;
        let now = self.clock.now();
        verify_bid(&VerifyBidInput {
            amount:              bid_create.amount,
            registration_status: registration.status(),
            current_bid:         auction.ledger.current_bid(),
            remaining_seconds:   auction.listing.remaining_seconds(now),
        })?;

        let bid = entities::Bid::new(bid_create, now);
        self.repo.add_bid(bid.clone()).await?;
        self.notification_sink
            .notify(entities::SessionEvent::BidAccepted {
                listing_id: bid.listing_id,
                bid:        bid.clone(),
            });
        Ok(bid)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            auction::service::{
                accept_terms::AcceptTermsInput,
                approval::MockApprovalProvider,
                get_auction_by_id::GetAuctionByIdInput,
                get_bids::GetBidsInput,
                get_registration::GetRegistrationInput,
                notification::MockNotificationSink,
                tests::{
                    listing,
                    recording_sink,
                },
            },
            kernel::clock::MockClock,
        },
        futures::future::join_all,
        time::{
            Duration,
            OffsetDateTime,
        },
    };

    fn bid_input(
        listing_id: entities::ListingId,
        bidder_id: &str,
        amount: entities::BidAmount,
    ) -> HandleBidInput {
        HandleBidInput {
            bid_create: entities::BidCreate {
                listing_id,
                bidder_id: bidder_id.to_string(),
                amount,
            },
        }
    }

    fn approving_provider() -> MockApprovalProvider {
        let mut approval_provider = MockApprovalProvider::new();
        approval_provider
            .expect_request_approval()
            .returning(|_, _| Ok(()));
        approval_provider
    }

    fn fixed_clock(now: OffsetDateTime) -> MockClock {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(now);
        clock
    }

    #[tokio::test]
    async fn test_bidding_scenario() {
        let now = OffsetDateTime::now_utc();
        let (sink, events) = recording_sink();
        let service = Service::new_with_mocks(fixed_clock(now), sink, approving_provider());
        let listing = listing(now, 10_000);
        let listing_id = listing.id;
        service
            .add_auction_unobserved(entities::Auction::new(listing))
            .await;

        assert_eq!(
            service
                .handle_bid(bid_input(listing_id, "u1", 10_500))
                .await
                .unwrap_err(),
            RestError::NotApproved
        );

        let status = service
            .accept_terms(AcceptTermsInput {
                listing_id,
                bidder_id: "u1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(status, entities::RegistrationStatus::PendingApproval);
        service.wait_for_tasks().await;
        assert_eq!(
            service
                .get_registration(GetRegistrationInput {
                    listing_id,
                    bidder_id: "u1".to_string(),
                })
                .await
                .unwrap(),
            entities::RegistrationStatus::Approved
        );

        let bid = service
            .handle_bid(bid_input(listing_id, "u1", 10_500))
            .await
            .unwrap();
        assert_eq!(bid.amount, 10_500);
        assert_eq!(bid.timestamp, now);
        let auction = service
            .get_auction_by_id(GetAuctionByIdInput { listing_id })
            .await
            .unwrap();
        assert_eq!(auction.ledger.current_bid(), 10_500);

        assert_eq!(
            service
                .handle_bid(bid_input(listing_id, "u1", 10_300))
                .await
                .unwrap_err(),
            RestError::BidTooLow {
                leading_bid: 10_500,
            }
        );

        let events: Vec<entities::SessionEvent> = events.try_iter().collect();
        assert_eq!(
            events,
            vec![
                entities::SessionEvent::RegistrationApproved {
                    listing_id,
                    bidder_id: "u1".to_string(),
                },
                entities::SessionEvent::BidAccepted { listing_id, bid },
            ]
        );
    }

    #[tokio::test]
    async fn test_bid_on_closed_auction() {
        let now = OffsetDateTime::now_utc();
        let listing = listing(now, 10_000);
        let listing_id = listing.id;
        let (sink, _events) = recording_sink();
        let service = Service::new_with_mocks(
            fixed_clock(listing.end_time + Duration::seconds(1)),
            sink,
            approving_provider(),
        );
        service
            .add_auction_unobserved(entities::Auction::new(listing))
            .await;
        service
            .accept_terms(AcceptTermsInput {
                listing_id,
                bidder_id: "u1".to_string(),
            })
            .await
            .unwrap();
        service.wait_for_tasks().await;

        assert_eq!(
            service
                .handle_bid(bid_input(listing_id, "u1", 20_000))
                .await
                .unwrap_err(),
            RestError::AuctionClosed
        );
        assert!(service
            .get_bids(GetBidsInput { listing_id })
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_bid_on_unknown_listing() {
        let service = Service::new_with_mocks(
            fixed_clock(OffsetDateTime::now_utc()),
            MockNotificationSink::new(),
            MockApprovalProvider::new(),
        );
        assert_eq!(
            service
                .handle_bid(bid_input(entities::ListingId::new_v4(), "u1", 1))
                .await
                .unwrap_err(),
            RestError::ListingNotFound
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_bids_keep_current_bid_increasing() {
        let now = OffsetDateTime::now_utc();
        let (sink, events) = recording_sink();
        let service = Service::new_with_mocks(fixed_clock(now), sink, approving_provider());
        let listing = listing(now, 100);
        let listing_id = listing.id;
        service
            .add_auction_unobserved(entities::Auction::new(listing))
            .await;
        let bidders: Vec<String> = (0..4).map(|i| format!("u{}", i)).collect();
        for bidder_id in bidders.iter() {
            service
                .accept_terms(AcceptTermsInput {
                    listing_id,
                    bidder_id: bidder_id.clone(),
                })
                .await
                .unwrap();
        }
        service.wait_for_tasks().await;

        let results = join_all((0..40u64).map(|i| {
            let service = service.clone();
            let bidder_id = bidders[(i % 4) as usize].clone();
            tokio::spawn(async move {
                service
                    .handle_bid(bid_input(listing_id, &bidder_id, 100 + (i % 10 + 1) * 50))
                    .await
            })
        }))
        .await;
        let accepted = results
            .into_iter()
            .map(|result| result.unwrap())
            .filter(|result| result.is_ok())
            .count();

        let history = service.get_bids(GetBidsInput { listing_id }).await.unwrap();
        assert_eq!(history.len(), accepted);
        assert!(history.windows(2).all(|w| w[0].amount > w[1].amount));
        assert_eq!(history[0].amount, 600);
        let accepted_events = events
            .try_iter()
            .filter(|event| matches!(event, entities::SessionEvent::BidAccepted { .. }))
            .count();
        assert_eq!(accepted_events, accepted);
    }
}
