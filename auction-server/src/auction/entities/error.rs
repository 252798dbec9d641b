use {
    super::{
        BidAmount,
        RegistrationStatus,
    },
    std::fmt::{
        Display,
        Formatter,
    },
};

/// Expected outcomes of the auction session that the caller has to branch on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The registration does not allow the requested transition from its current status.
    InvalidStateTransition { from: RegistrationStatus },
    /// The bidder is not approved for the listing.
    NotApproved,
    /// The auction has no time left.
    AuctionClosed,
    /// The bid does not exceed the leading bid.
    BidTooLow { leading_bid: BidAmount },
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::InvalidStateTransition { from } => {
                write!(f, "Invalid registration transition from {:?}", from)
            }
            SessionError::NotApproved => write!(f, "Bidder is not approved for this auction"),
            SessionError::AuctionClosed => write!(f, "Auction is closed"),
            SessionError::BidTooLow { leading_bid } => {
                write!(f, "Bid must be greater than the leading bid {}", leading_bid)
            }
        }
    }
}

impl std::error::Error for SessionError {}
