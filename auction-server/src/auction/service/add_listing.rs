use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
};

pub struct AddListingInput {
    pub listing_create: entities::ListingCreate,
}

impl Service {
    /// Adds a live listing and starts observing its countdown.
    #[tracing::instrument(skip_all, fields(listing_id), err(level = tracing::Level::TRACE))]
    pub async fn add_listing(&self, input: AddListingInput) -> Result<entities::Auction, RestError> {
        let listing_create = input.listing_create;
        if listing_create.title.trim().is_empty() {
            return Err(RestError::BadParameters(
                "Listing title must not be empty".to_string(),
            ));
        }
        if listing_create.starting_price == 0 {
            return Err(RestError::BadParameters(
                "Starting price must be positive".to_string(),
            ));
        }
        if listing_create.end_time <= self.clock.now() {
            return Err(RestError::BadParameters(
                "Listing end time must be in the future".to_string(),
            ));
        }

        let auction = entities::Auction::new(entities::Listing::new(listing_create));
        tracing::Span::current().record("listing_id", auction.listing.id.to_string());
        self.repo.add_auction(auction.clone()).await?;
        self.start_countdown(auction.listing.clone()).await;
        tracing::info!(
            listing_id = %auction.listing.id,
            title = auction.listing.title,
            starting_price = auction.listing.starting_price,
            end_time = %auction.listing.end_time,
            "Listing added"
        );
        Ok(auction)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            auction::service::{
                approval::MockApprovalProvider,
                notification::MockNotificationSink,
            },
            kernel::clock::MockClock,
        },
        time::{
            Duration,
            OffsetDateTime,
        },
        uuid::Uuid,
    };

    fn service(now: OffsetDateTime) -> Service {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(now);
        Service::new_with_mocks(clock, MockNotificationSink::new(), MockApprovalProvider::new())
    }

    fn listing_create(now: OffsetDateTime) -> entities::ListingCreate {
        entities::ListingCreate {
            id:             None,
            title:          "Porsche 911 Carrera S 2024".to_string(),
            starting_price: 1_100_000,
            end_time:       now + Duration::minutes(30),
        }
    }

    #[tokio::test]
    async fn test_add_listing() {
        let now = OffsetDateTime::now_utc();
        let service = service(now);
        let auction = service
            .add_listing(AddListingInput {
                listing_create: listing_create(now),
            })
            .await
            .unwrap();
        assert_eq!(auction.ledger.current_bid(), 1_100_000);
        assert!(auction.ledger.is_empty());
        assert_eq!(service.suggested_bid(&auction), 1_100_500);
        let auctions = service.get_auctions().await;
        assert_eq!(auctions.len(), 1);
        assert_eq!(auctions[0].listing, auction.listing);
    }

    #[tokio::test]
    async fn test_add_listing_keeps_seeded_id() {
        let now = OffsetDateTime::now_utc();
        let service = service(now);
        let id = Uuid::new_v4();
        let mut create = listing_create(now);
        create.id = Some(id);
        let auction = service
            .add_listing(AddListingInput {
                listing_create: create.clone(),
            })
            .await
            .unwrap();
        assert_eq!(auction.listing.id, id);
        assert!(matches!(
            service
                .add_listing(AddListingInput {
                    listing_create: create,
                })
                .await,
            Err(RestError::BadParameters(_))
        ));
    }

    #[tokio::test]
    async fn test_add_listing_rejects_invalid_listing() {
        let now = OffsetDateTime::now_utc();
        let service = service(now);

        let mut zero_price = listing_create(now);
        zero_price.starting_price = 0;
        let mut no_title = listing_create(now);
        no_title.title = "  ".to_string();
        let mut expired = listing_create(now);
        expired.end_time = now - Duration::seconds(1);

        for listing_create in [zero_price, no_title, expired] {
            assert!(matches!(
                service.add_listing(AddListingInput { listing_create }).await,
                Err(RestError::BadParameters(_))
            ));
        }
        assert!(service.get_auctions().await.is_empty());
    }
}
