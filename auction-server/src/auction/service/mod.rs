use {
    super::{
        entities,
        repository::Repository,
    },
    crate::kernel::clock::Clock,
    approval::ApprovalProvider,
    notification::NotificationSink,
    std::{
        sync::Arc,
        time::Duration,
    },
    time::OffsetDateTime,
    tokio_util::task::TaskTracker,
};

pub mod accept_terms;
pub mod add_listing;
pub mod approval;
pub mod conclude_auction;
pub mod get_auction_by_id;
pub mod get_auctions;
pub mod get_bids;
pub mod get_registration;
pub mod grant_approval;
pub mod handle_bid;
pub mod notification;
pub mod remove_listing;
pub mod verification;
pub mod workers;

pub struct Config {
    /// Period of the countdown re-evaluation of every observed listing.
    pub countdown_interval:            Duration,
    pub ending_soon_threshold_seconds: u64,
    /// Added to the current bid to suggest the next amount. Not enforced on submitted bids.
    pub suggested_bid_increment:       entities::BidAmount,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            countdown_interval:            Duration::from_secs(1),
            ending_soon_threshold_seconds: entities::ENDING_SOON_THRESHOLD_SECONDS,
            suggested_bid_increment:       500,
        }
    }
}

pub struct ServiceInner {
    config:            Config,
    repo:              Arc<Repository>,
    clock:             Arc<dyn Clock>,
    notification_sink: Arc<dyn NotificationSink>,
    approval_provider: Arc<dyn ApprovalProvider>,
    task_tracker:      TaskTracker,
}

#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);
impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(
        config: Config,
        clock: Arc<dyn Clock>,
        notification_sink: Arc<dyn NotificationSink>,
        approval_provider: Arc<dyn ApprovalProvider>,
        task_tracker: TaskTracker,
    ) -> Self {
        Self(Arc::new(ServiceInner {
            config,
            repo: Arc::new(Repository::new()),
            clock,
            notification_sink,
            approval_provider,
            task_tracker,
        }))
    }

    pub fn now(&self) -> OffsetDateTime {
        self.clock.now()
    }

    pub fn suggested_bid(&self, auction: &entities::Auction) -> entities::BidAmount {
        auction
            .ledger
            .current_bid()
            .saturating_add(self.config.suggested_bid_increment)
    }
}
