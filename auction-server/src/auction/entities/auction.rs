use super::{
    BidLedger,
    Listing,
};

/// The live state of one listing's auction.
#[derive(Clone, Debug)]
pub struct Auction {
    pub listing: Listing,
    pub ledger:  BidLedger,
}

impl Auction {
    pub fn new(listing: Listing) -> Self {
        let ledger = BidLedger::new(listing.starting_price);
        Self { listing, ledger }
    }
}
