use {
    crate::{
        listing_path,
        BidderId,
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
        ToResponse,
        ToSchema,
    },
    uuid::Uuid,
};

pub type BidId = Uuid;
/// Monetary amount in whole currency units.
pub type BidAmount = u64;

#[derive(Serialize, Deserialize, ToSchema, Clone, PartialEq, Debug)]
pub struct BidCreate {
    /// The bidder placing the bid. The bidder must be approved for the listing.
    #[schema(example = "u101")]
    pub bidder_id: BidderId,
    /// The offered amount. It must exceed the current bid of the listing.
    #[schema(example = 10500)]
    pub amount:    BidAmount,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, PartialEq, Debug)]
pub struct Bid {
    #[schema(example = "obo3ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub id:        BidId,
    #[schema(example = "u101")]
    pub bidder_id: BidderId,
    #[schema(example = 10500)]
    pub amount:    BidAmount,
    /// The time the bid was accepted in RFC 3339 format.
    #[schema(example = "2026-10-18T21:26:57.329954Z", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, PartialEq, Debug)]
pub struct BidResult {
    pub status:      String,
    /// The unique id created to identify the bid.
    #[schema(example = "obo3ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub id:          BidId,
    /// The listing's current bid after this bid was recorded.
    #[schema(example = 10500)]
    pub current_bid: BidAmount,
}

/// Bids of a listing, most recent first.
#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, PartialEq, Debug)]
pub struct Bids {
    pub items: Vec<Bid>,
}

#[derive(AsRefStr, Clone)]
#[strum(prefix = "/")]
pub enum Route {
    #[strum(serialize = ":listing_id/bids")]
    GetBids,
    #[strum(serialize = ":listing_id/bids")]
    PostBid,
}

impl Routable for Route {
    fn properties(&self) -> RouteProperties {
        let method = match self {
            Route::GetBids => http::Method::GET,
            Route::PostBid => http::Method::POST,
        };
        RouteProperties {
            method,
            full_path: listing_path(self),
        }
    }
}
