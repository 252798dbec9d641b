use {
    super::{
        entities,
        service::{
            accept_terms::AcceptTermsInput,
            add_listing::AddListingInput,
            get_auction_by_id::GetAuctionByIdInput,
            get_bids::GetBidsInput,
            get_registration::GetRegistrationInput,
            handle_bid::HandleBidInput,
            remove_listing::RemoveListingInput,
            Service,
        },
    },
    crate::{
        api::{
            RestError,
            WrappedRouter,
        },
        state::Store,
    },
    axum::{
        extract::{
            Path,
            State,
        },
        Json,
        Router,
    },
    sellar_auction_api_types::{
        bid::{
            self,
            Bid,
            BidCreate,
            BidResult,
            Bids,
        },
        listing::{
            self,
            Listing,
            ListingCreate,
            ListingParams,
            Listings,
        },
        registration,
        registration::{
            Registration,
            RegistrationParams,
            RegistrationStatus,
        },
        ErrorBodyResponse,
    },
    std::sync::Arc,
    time::{
        Duration,
        OffsetDateTime,
    },
};

impl From<entities::Bid> for Bid {
    fn from(bid: entities::Bid) -> Self {
        Bid {
            id:        bid.id,
            bidder_id: bid.bidder_id,
            amount:    bid.amount,
            timestamp: bid.timestamp,
        }
    }
}

impl From<entities::RegistrationStatus> for RegistrationStatus {
    fn from(status: entities::RegistrationStatus) -> Self {
        match status {
            entities::RegistrationStatus::NotRegistered => RegistrationStatus::NotRegistered,
            entities::RegistrationStatus::PendingApproval => RegistrationStatus::PendingApproval,
            entities::RegistrationStatus::Approved => RegistrationStatus::Approved,
        }
    }
}

fn get_listing_view(service: &Service, auction: entities::Auction) -> Listing {
    let now = service.now();
    Listing {
        id: auction.listing.id,
        suggested_bid: service.suggested_bid(&auction),
        current_bid: auction.ledger.current_bid(),
        leading_bid: auction.ledger.leading_bid().cloned().map(Bid::from),
        bid_count: auction.ledger.len(),
        remaining_seconds: auction.listing.remaining_seconds(now),
        closed: auction.listing.is_closed(now),
        title: auction.listing.title,
        starting_price: auction.listing.starting_price,
        end_time: auction.listing.end_time,
    }
}

fn get_listing_create(
    listing_create: ListingCreate,
    now: OffsetDateTime,
) -> Result<entities::ListingCreate, RestError> {
    let end_time = match (listing_create.end_time, listing_create.duration_seconds) {
        (Some(end_time), None) => end_time,
        (None, Some(duration_seconds)) => {
            let duration_seconds = i64::try_from(duration_seconds).map_err(|_| {
                RestError::BadParameters("Listing duration is too long".to_string())
            })?;
            now.checked_add(Duration::seconds(duration_seconds))
                .ok_or_else(|| RestError::BadParameters("Listing duration is too long".to_string()))?
        }
        _ => {
            return Err(RestError::BadParameters(
                "Exactly one of end_time and duration_seconds must be set".to_string(),
            ))
        }
    };
    Ok(entities::ListingCreate {
        id: None,
        title: listing_create.title,
        starting_price: listing_create.starting_price,
        end_time,
    })
}

/// List the auction listings, soonest closing first.
#[utoipa::path(get, path = "/v1/listings", responses(
    (status = 200, description = "Listings", body = Listings),
),)]
pub async fn get_listings(State(store): State<Arc<Store>>) -> Result<Json<Listings>, RestError> {
    let service = &store.auction_service;
    let items = service
        .get_auctions()
        .await
        .into_iter()
        .map(|auction| get_listing_view(service, auction))
        .collect();
    Ok(Json(Listings { items }))
}

/// Create a new auction listing.
///
/// The countdown of the listing starts immediately.
#[utoipa::path(post, path = "/v1/listings", request_body = ListingCreate, responses(
    (status = 200, description = "Listing was created successfully", body = Listing),
    (status = 400, response = ErrorBodyResponse),
),)]
pub async fn post_listing(
    State(store): State<Arc<Store>>,
    Json(listing_create): Json<ListingCreate>,
) -> Result<Json<Listing>, RestError> {
    let service = &store.auction_service;
    let auction = service
        .add_listing(AddListingInput {
            listing_create: get_listing_create(listing_create, service.now())?,
        })
        .await?;
    Ok(Json(get_listing_view(service, auction)))
}

/// Query the state of a listing.
#[utoipa::path(get, path = "/v1/listings/{listing_id}", params(ListingParams), responses(
    (status = 200, description = "Latest state of the listing", body = Listing),
    (status = 404, description = "Listing was not found", body = ErrorBodyResponse),
),)]
pub async fn get_listing(
    State(store): State<Arc<Store>>,
    Path(params): Path<ListingParams>,
) -> Result<Json<Listing>, RestError> {
    let service = &store.auction_service;
    let auction = service
        .get_auction_by_id(GetAuctionByIdInput {
            listing_id: params.listing_id,
        })
        .await?;
    Ok(Json(get_listing_view(service, auction)))
}

/// Remove a listing and stop its countdown.
#[utoipa::path(delete, path = "/v1/listings/{listing_id}", params(ListingParams), responses(
    (status = 200, description = "Last state of the removed listing", body = Listing),
    (status = 404, description = "Listing was not found", body = ErrorBodyResponse),
),)]
pub async fn delete_listing(
    State(store): State<Arc<Store>>,
    Path(params): Path<ListingParams>,
) -> Result<Json<Listing>, RestError> {
    let service = &store.auction_service;
    let auction = service
        .remove_listing(RemoveListingInput {
            listing_id: params.listing_id,
        })
        .await?;
    Ok(Json(get_listing_view(service, auction)))
}

/// Returns the bids of a listing, most recent first.
#[utoipa::path(get, path = "/v1/listings/{listing_id}/bids", params(ListingParams), responses(
    (status = 200, description = "Bid history of the listing", body = Bids),
    (status = 404, description = "Listing was not found", body = ErrorBodyResponse),
),)]
pub async fn get_bids(
    State(store): State<Arc<Store>>,
    Path(params): Path<ListingParams>,
) -> Result<Json<Bids>, RestError> {
    let bids = store
        .auction_service
        .get_bids(GetBidsInput {
            listing_id: params.listing_id,
        })
        .await?;
    Ok(Json(Bids {
        items: bids.into_iter().map(Bid::from).collect(),
    }))
}

/// Bid on a listing.
///
/// The bidder must be approved for the listing, the auction must not be closed and
/// the amount must exceed the current bid.
#[utoipa::path(post, path = "/v1/listings/{listing_id}/bids", params(ListingParams), request_body = BidCreate, responses(
    (status = 200, description = "Bid was accepted", body = BidResult),
    (status = 400, response = ErrorBodyResponse),
    (status = 403, description = "Bidder is not approved", body = ErrorBodyResponse),
    (status = 404, description = "Listing was not found", body = ErrorBodyResponse),
    (status = 409, description = "Auction is closed", body = ErrorBodyResponse),
),)]
pub async fn post_bid(
    State(store): State<Arc<Store>>,
    Path(params): Path<ListingParams>,
    Json(bid_create): Json<BidCreate>,
) -> Result<Json<BidResult>, RestError> {
    let bid = store
        .auction_service
        .handle_bid(HandleBidInput {
            bid_create: entities::BidCreate {
                listing_id: params.listing_id,
                bidder_id:  bid_create.bidder_id,
                amount:     bid_create.amount,
            },
        })
        .await?;
    Ok(Json(BidResult {
        status:      "OK".to_string(),
        id:          bid.id,
        current_bid: bid.amount,
    }))
}

/// Query the registration status of a bidder for a listing.
#[utoipa::path(get, path = "/v1/listings/{listing_id}/registrations/{bidder_id}", params(RegistrationParams), responses(
    (status = 200, description = "Registration of the bidder", body = Registration),
    (status = 404, description = "Listing was not found", body = ErrorBodyResponse),
),)]
pub async fn get_registration(
    State(store): State<Arc<Store>>,
    Path(params): Path<RegistrationParams>,
) -> Result<Json<Registration>, RestError> {
    let status = store
        .auction_service
        .get_registration(GetRegistrationInput {
            listing_id: params.listing_id,
            bidder_id:  params.bidder_id.clone(),
        })
        .await?;
    Ok(Json(Registration {
        listing_id: params.listing_id,
        bidder_id:  params.bidder_id,
        status:     status.into(),
    }))
}

/// Accept the auction terms for a listing.
///
/// The registration becomes pending and is approved asynchronously.
#[utoipa::path(post, path = "/v1/listings/{listing_id}/registrations/{bidder_id}", params(RegistrationParams), responses(
    (status = 200, description = "Terms were accepted", body = Registration),
    (status = 404, description = "Listing was not found", body = ErrorBodyResponse),
    (status = 409, description = "Bidder already accepted the terms", body = ErrorBodyResponse),
),)]
pub async fn post_registration(
    State(store): State<Arc<Store>>,
    Path(params): Path<RegistrationParams>,
) -> Result<Json<Registration>, RestError> {
    let status = store
        .auction_service
        .accept_terms(AcceptTermsInput {
            listing_id: params.listing_id,
            bidder_id:  params.bidder_id.clone(),
        })
        .await?;
    Ok(Json(Registration {
        listing_id: params.listing_id,
        bidder_id:  params.bidder_id,
        status:     status.into(),
    }))
}

pub fn get_routes() -> anyhow::Result<Router<Arc<Store>>> {
    Ok(WrappedRouter::new()
        .route(listing::Route::GetListings, get_listings)?
        .route(listing::Route::PostListing, post_listing)?
        .route(listing::Route::GetListing, get_listing)?
        .route(listing::Route::DeleteListing, delete_listing)?
        .route(bid::Route::GetBids, get_bids)?
        .route(bid::Route::PostBid, post_bid)?
        .route(registration::Route::GetRegistration, get_registration)?
        .route(registration::Route::PostRegistration, post_registration)?
        .router)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::auction::service::{
            approval::MockApprovalProvider,
            notification::MockNotificationSink,
            tests::listing,
        },
        crate::kernel::clock::MockClock,
    };

    fn listing_create(
        end_time: Option<OffsetDateTime>,
        duration_seconds: Option<u64>,
    ) -> ListingCreate {
        ListingCreate {
            title: "Lote MacBook Pro M3 Max".to_string(),
            starting_price: 245_000,
            end_time,
            duration_seconds,
        }
    }

    #[test]
    fn test_get_listing_create_with_duration() {
        let now = OffsetDateTime::now_utc();
        let create = get_listing_create(listing_create(None, Some(1_800)), now).unwrap();
        assert_eq!(create.end_time, now + Duration::minutes(30));
        assert_eq!(create.starting_price, 245_000);
        assert_eq!(create.id, None);
    }

    #[test]
    fn test_get_listing_create_with_end_time() {
        let now = OffsetDateTime::now_utc();
        let end_time = now + Duration::hours(2);
        let create = get_listing_create(listing_create(Some(end_time), None), now).unwrap();
        assert_eq!(create.end_time, end_time);
    }

    #[test]
    fn test_get_listing_create_requires_exactly_one_end() {
        let now = OffsetDateTime::now_utc();
        for create in [
            listing_create(None, None),
            listing_create(Some(now), Some(60)),
            listing_create(None, Some(u64::MAX)),
        ] {
            assert!(matches!(
                get_listing_create(create, now),
                Err(RestError::BadParameters(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_get_listing_view() {
        let now = OffsetDateTime::now_utc();
        let mut clock = MockClock::new();
        clock.expect_now().return_const(now);
        let service = Service::new_with_mocks(
            clock,
            MockNotificationSink::new(),
            MockApprovalProvider::new(),
        );
        let listing = listing(now, 10_000);
        let mut auction = entities::Auction::new(listing.clone());
        let bid = entities::Bid::new(
            entities::BidCreate {
                listing_id: listing.id,
                bidder_id:  "u1".to_string(),
                amount:     10_500,
            },
            now,
        );
        auction.ledger.record(bid.clone()).unwrap();

        let view = get_listing_view(&service, auction);
        assert_eq!(view.current_bid, 10_500);
        assert_eq!(view.suggested_bid, 11_000);
        assert_eq!(view.bid_count, 1);
        assert_eq!(view.remaining_seconds, 3_600);
        assert!(!view.closed);
        assert_eq!(view.leading_bid, Some(Bid::from(bid)));
    }
}
