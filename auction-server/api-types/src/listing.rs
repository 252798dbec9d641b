use {
    crate::{
        bid::{
            Bid,
            BidAmount,
        },
        listing_path,
        Routable,
        RouteProperties,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    strum::AsRefStr,
    time::OffsetDateTime,
    utoipa::{
        IntoParams,
        ToResponse,
        ToSchema,
    },
    uuid::Uuid,
};

pub type ListingId = Uuid;

#[derive(Serialize, Deserialize, ToSchema, Clone, PartialEq, Debug)]
pub struct ListingCreate {
    /// The title shown to bidders.
    #[schema(example = "Touro Reprodutor Nelore PO")]
    pub title:            String,
    /// The price the auction opens at. Every accepted bid must exceed it.
    #[schema(example = 125000)]
    pub starting_price:   BidAmount,
    /// Absolute close time in RFC 3339 format. Exactly one of this and `duration_seconds` must be set.
    #[schema(example = "2026-10-18T21:26:57.329954Z", value_type = Option<String>)]
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_time:         Option<OffsetDateTime>,
    /// Seconds from creation until the auction closes.
    #[schema(example = 3600)]
    #[serde(default)]
    pub duration_seconds: Option<u64>,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, PartialEq, Debug)]
pub struct Listing {
    /// The unique id of the listing.
    #[schema(example = "beedbeed-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub id:                ListingId,
    #[schema(example = "Touro Reprodutor Nelore PO")]
    pub title:             String,
    #[schema(example = 125000)]
    pub starting_price:    BidAmount,
    /// The time the auction closes in RFC 3339 format.
    #[schema(example = "2026-10-18T21:26:57.329954Z", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub end_time:          OffsetDateTime,
    /// The leading bid amount, or the starting price when there are no bids yet.
    #[schema(example = 128500)]
    pub current_bid:       BidAmount,
    /// The leading bid itself, if any bid was accepted.
    pub leading_bid:       Option<Bid>,
    /// A convenient next amount to offer. Any amount above the current bid is accepted.
    #[schema(example = 129000)]
    pub suggested_bid:     BidAmount,
    #[schema(example = 3)]
    pub bid_count:         usize,
    /// Whole seconds until the auction closes, zero once closed.
    #[schema(example = 1800)]
    pub remaining_seconds: u64,
    pub closed:            bool,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, PartialEq, Debug)]
pub struct Listings {
    pub items: Vec<Listing>,
}

#[derive(Serialize, Deserialize, IntoParams, Clone, Debug)]
#[into_params(parameter_in = Path)]
pub struct ListingParams {
    /// The id of the listing.
    #[param(example = "beedbeed-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub listing_id: ListingId,
}

#[derive(AsRefStr, Clone)]
#[strum(prefix = "/")]
pub enum Route {
    #[strum(serialize = "")]
    GetListings,
    #[strum(serialize = "")]
    PostListing,
    #[strum(serialize = ":listing_id")]
    GetListing,
    #[strum(serialize = ":listing_id")]
    DeleteListing,
}

impl Routable for Route {
    fn properties(&self) -> RouteProperties {
        let method = match self {
            Route::GetListings => http::Method::GET,
            Route::PostListing => http::Method::POST,
            Route::GetListing => http::Method::GET,
            Route::DeleteListing => http::Method::DELETE,
        };
        RouteProperties {
            method,
            full_path: listing_path(self),
        }
    }
}
