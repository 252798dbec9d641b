use {
    super::ListingId,
    time::OffsetDateTime,
    uuid::Uuid,
};

pub type BidId = Uuid;
pub type BidAmount = u64;
pub type BidderId = String;

#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub id:         BidId,
    pub listing_id: ListingId,
    pub bidder_id:  BidderId,
    pub amount:     BidAmount,
    pub timestamp:  OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BidCreate {
    pub listing_id: ListingId,
    pub bidder_id:  BidderId,
    pub amount:     BidAmount,
}

impl Bid {
    pub fn new(bid_create: BidCreate, timestamp: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            listing_id: bid_create.listing_id,
            bidder_id: bid_create.bidder_id,
            amount: bid_create.amount,
            timestamp,
        }
    }
}
