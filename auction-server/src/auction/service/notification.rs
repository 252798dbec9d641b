#[cfg(test)]
use mockall::automock;
use {
    crate::{
        auction::entities,
        server::{
            EXIT_CHECK_INTERVAL,
            SHOULD_EXIT,
        },
    },
    anyhow::anyhow,
    std::{
        fmt::Debug,
        sync::atomic::Ordering,
    },
    tokio::sync::broadcast::{
        self,
        error::RecvError,
    },
};

/// Receives the events of every auction session. Implementations must not block.
#[cfg_attr(test, automock)]
pub trait NotificationSink: Debug + Send + Sync + 'static {
    fn notify(&self, event: entities::SessionEvent);
}

#[derive(Debug, Clone)]
pub struct BroadcastNotificationSink {
    sender: broadcast::Sender<entities::SessionEvent>,
}

impl BroadcastNotificationSink {
    pub fn new(sender: broadcast::Sender<entities::SessionEvent>) -> Self {
        Self { sender }
    }
}

impl NotificationSink for BroadcastNotificationSink {
    fn notify(&self, event: entities::SessionEvent) {
        if let Err(err) = self.sender.send(event) {
            tracing::warn!(listing_id = %err.0.listing_id(), "No subscriber for session event");
        }
    }
}

fn render_event(event: &entities::SessionEvent) {
    match event {
        entities::SessionEvent::BidAccepted { listing_id, bid } => tracing::info!(
            %listing_id,
            bid_id = %bid.id,
            bidder_id = bid.bidder_id,
            amount = bid.amount,
            "Bid accepted"
        ),
        entities::SessionEvent::AuctionEndingSoon {
            listing_id,
            title,
            time_left_seconds,
        } => tracing::info!(%listing_id, title, time_left_seconds, "Auction ending soon"),
        entities::SessionEvent::RegistrationApproved {
            listing_id,
            bidder_id,
        } => tracing::info!(%listing_id, bidder_id, "Registration approved"),
        entities::SessionEvent::AuctionEnded {
            listing_id,
            winning_bid,
        } => match winning_bid {
            Some(bid) => tracing::info!(
                %listing_id,
                bidder_id = bid.bidder_id,
                amount = bid.amount,
                "Auction ended"
            ),
            None => tracing::info!(%listing_id, "Auction ended without bids"),
        },
    }
}

pub async fn run_notification_loop(
    mut receiver: broadcast::Receiver<entities::SessionEvent>,
) -> anyhow::Result<()> {
    tracing::info!("Starting notification renderer...");
    let mut exit_check_interval = tokio::time::interval(EXIT_CHECK_INTERVAL);
    while !SHOULD_EXIT.load(Ordering::Acquire) {
        tokio::select! {
            event = receiver.recv() => {
                match event {
                    Ok(event) => render_event(&event),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Notification renderer fell behind, events were dropped");
                    }
                    Err(RecvError::Closed) => return Err(anyhow!("Session event channel closed")),
                }
            }
            _ = exit_check_interval.tick() => {}
        }
    }
    tracing::info!("Shutting down notification renderer...");
    Ok(())
}
