use super::{
    Bid,
    BidAmount,
    SessionError,
};

/// Append-only record of the accepted bids of one listing.
///
/// Every recorded bid strictly exceeds the one before it, so the insertion order
/// is also the ascending amount order.
#[derive(Clone, Debug)]
pub struct BidLedger {
    starting_price: BidAmount,
    bids:           Vec<Bid>,
}

impl BidLedger {
    pub fn new(starting_price: BidAmount) -> Self {
        Self {
            starting_price,
            bids: Vec::new(),
        }
    }

    pub fn record(&mut self, bid: Bid) -> Result<(), SessionError> {
        let leading_bid = self.current_bid();
        if bid.amount <= leading_bid {
            return Err(SessionError::BidTooLow { leading_bid });
        }
        self.bids.push(bid);
        Ok(())
    }

    /// The amount to beat: the leading bid, or the starting price before the first bid.
    pub fn current_bid(&self) -> BidAmount {
        self.leading_bid()
            .map(|bid| bid.amount)
            .unwrap_or(self.starting_price)
    }

    pub fn leading_bid(&self) -> Option<&Bid> {
        self.bids.last()
    }

    /// Most recent first.
    pub fn history(&self) -> Vec<Bid> {
        self.bids.iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.bids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::auction::entities::BidCreate,
        time::OffsetDateTime,
        uuid::Uuid,
    };

    fn bid(listing_id: Uuid, amount: BidAmount) -> Bid {
        Bid::new(
            BidCreate {
                listing_id,
                bidder_id: "u1".to_string(),
                amount,
            },
            OffsetDateTime::now_utc(),
        )
    }

    #[test]
    fn test_current_bid_starts_at_starting_price() {
        let ledger = BidLedger::new(10_000);
        assert_eq!(ledger.current_bid(), 10_000);
        assert!(ledger.leading_bid().is_none());
        assert!(ledger.history().is_empty());
    }

    #[test]
    fn test_history_is_most_recent_first() {
        let listing_id = Uuid::new_v4();
        let mut ledger = BidLedger::new(50);
        for amount in [100, 250, 400] {
            ledger.record(bid(listing_id, amount)).unwrap();
        }
        let amounts: Vec<BidAmount> = ledger.history().iter().map(|b| b.amount).collect();
        assert_eq!(amounts, vec![400, 250, 100]);
        assert_eq!(ledger.current_bid(), 400);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_record_keeps_current_bid_strictly_increasing() {
        let listing_id = Uuid::new_v4();
        let mut ledger = BidLedger::new(100);
        let mut previous = ledger.current_bid();
        for amount in [150, 150, 120, 151, 300, 299, 1_000] {
            let _ = ledger.record(bid(listing_id, amount));
            assert!(ledger.current_bid() >= previous);
            previous = ledger.current_bid();
        }
        let amounts: Vec<BidAmount> = ledger.history().iter().rev().map(|b| b.amount).collect();
        assert_eq!(amounts, vec![150, 151, 300, 1_000]);
        assert!(amounts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_record_rejects_amount_not_above_leading_bid() {
        let listing_id = Uuid::new_v4();
        let mut ledger = BidLedger::new(10_000);
        assert_eq!(
            ledger.record(bid(listing_id, 10_000)),
            Err(SessionError::BidTooLow {
                leading_bid: 10_000,
            })
        );
        ledger.record(bid(listing_id, 10_500)).unwrap();
        assert_eq!(
            ledger.record(bid(listing_id, 10_300)),
            Err(SessionError::BidTooLow {
                leading_bid: 10_500,
            })
        );
        assert_eq!(ledger.len(), 1);
    }
}
