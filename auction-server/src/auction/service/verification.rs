use crate::auction::entities::{
    BidAmount,
    RegistrationStatus,
    SessionError,
};

pub struct VerifyBidInput {
    pub amount:              BidAmount,
    pub registration_status: RegistrationStatus,
    pub current_bid:         BidAmount,
    pub remaining_seconds:   u64,
}

/// Decides whether a proposed bid may be recorded.
///
/// The conditions are checked in order: approval, then remaining time, then amount.
/// Only strict increase over the current bid is required, the suggested increment is not enforced.
pub fn verify_bid(input: &VerifyBidInput) -> Result<(), SessionError> {
    if input.registration_status != RegistrationStatus::Approved {
        return Err(SessionError::NotApproved);
    }
    if input.remaining_seconds == 0 {
        return Err(SessionError::AuctionClosed);
    }
    if input.amount <= input.current_bid {
        return Err(SessionError::BidTooLow {
            leading_bid: input.current_bid,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(
        amount: BidAmount,
        registration_status: RegistrationStatus,
        remaining_seconds: u64,
    ) -> VerifyBidInput {
        VerifyBidInput {
            amount,
            registration_status,
            current_bid: 10_000,
            remaining_seconds,
        }
    }

    #[test]
    fn test_verify_bid_accepts_only_amounts_above_current_bid() {
        for amount in [10_001, 10_500, u64::MAX] {
            assert_eq!(
                verify_bid(&input(amount, RegistrationStatus::Approved, 30)),
                Ok(())
            );
        }
        for amount in [0, 9_999, 10_000] {
            assert_eq!(
                verify_bid(&input(amount, RegistrationStatus::Approved, 30)),
                Err(SessionError::BidTooLow {
                    leading_bid: 10_000,
                })
            );
        }
    }

    #[test]
    fn test_verify_bid_requires_approval() {
        assert_eq!(
            verify_bid(&input(10_500, RegistrationStatus::NotRegistered, 30)),
            Err(SessionError::NotApproved)
        );
        assert_eq!(
            verify_bid(&input(10_500, RegistrationStatus::PendingApproval, 30)),
            Err(SessionError::NotApproved)
        );
    }

    #[test]
    fn test_verify_bid_rejects_closed_auction() {
        assert_eq!(
            verify_bid(&input(10_500, RegistrationStatus::Approved, 0)),
            Err(SessionError::AuctionClosed)
        );
        assert_eq!(
            verify_bid(&input(10_500, RegistrationStatus::Approved, 1)),
            Ok(())
        );
    }

    #[test]
    fn test_verify_bid_checks_approval_before_closing_and_amount() {
        assert_eq!(
            verify_bid(&input(1, RegistrationStatus::NotRegistered, 0)),
            Err(SessionError::NotApproved)
        );
        assert_eq!(
            verify_bid(&input(1, RegistrationStatus::Approved, 0)),
            Err(SessionError::AuctionClosed)
        );
    }
}
