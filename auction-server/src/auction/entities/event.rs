use super::{
    Bid,
    BidderId,
    ListingId,
};

/// Events emitted by the auction session for the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    BidAccepted {
        listing_id: ListingId,
        bid:        Bid,
    },
    AuctionEndingSoon {
        listing_id:        ListingId,
        title:             String,
        time_left_seconds: u64,
    },
    RegistrationApproved {
        listing_id: ListingId,
        bidder_id:  BidderId,
    },
    AuctionEnded {
        listing_id:  ListingId,
        winning_bid: Option<Bid>,
    },
}

impl SessionEvent {
    pub fn listing_id(&self) -> ListingId {
        match self {
            SessionEvent::BidAccepted { listing_id, .. }
            | SessionEvent::AuctionEndingSoon { listing_id, .. }
            | SessionEvent::RegistrationApproved { listing_id, .. }
            | SessionEvent::AuctionEnded { listing_id, .. } => *listing_id,
        }
    }
}
