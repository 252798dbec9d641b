use {
    super::{
        conclude_auction::ConcludeAuctionInput,
        Service,
    },
    crate::{
        auction::entities,
        server::{
            EXIT_CHECK_INTERVAL,
            SHOULD_EXIT,
        },
    },
    anyhow::Result,
    std::sync::atomic::Ordering,
    tokio_util::sync::CancellationToken,
};

impl Service {
    /// Spawns the countdown of a listing. Starting it again replaces and cancels the previous one.
    pub async fn start_countdown(&self, listing: entities::Listing) {
        let token = CancellationToken::new();
        self.repo.add_countdown(listing.id, token.clone()).await;
        self.task_tracker.spawn({
            let service = self.clone();
            async move {
                let listing_id = listing.id;
                if let Err(err) = service.run_countdown_loop(listing, token).await {
                    tracing::error!(error = ?err, %listing_id, "Auction countdown failed");
                }
            }
        });
    }

    /// Returns false if the listing was not observed.
    pub async fn stop_countdown(&self, listing_id: &entities::ListingId) -> bool {
        match self.repo.remove_countdown(listing_id).await {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    #[tracing::instrument(skip_all, fields(listing_id = %listing.id))]
    pub async fn run_countdown_loop(
        &self,
        listing: entities::Listing,
        token: CancellationToken,
    ) -> Result<()> {
        tracing::info!("Starting auction countdown...");
        let mut countdown = entities::Countdown::new(
            listing.end_time,
            self.config.ending_soon_threshold_seconds,
        );
        let mut interval = tokio::time::interval(self.config.countdown_interval);
        let mut exit_check_interval = tokio::time::interval(EXIT_CHECK_INTERVAL);

        while !SHOULD_EXIT.load(Ordering::Acquire) {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::info!("Auction countdown cancelled");
                    return Ok(());
                }
                _ = interval.tick() => {
                    let tick = countdown.observe(self.clock.now());
                    if tick.ending_soon {
                        self.notification_sink.notify(entities::SessionEvent::AuctionEndingSoon {
                            listing_id:        listing.id,
                            title:             listing.title.clone(),
                            time_left_seconds: tick.remaining_seconds,
                        });
                    }
                    if tick.remaining_seconds == 0 {
                        return self
                            .conclude_auction(ConcludeAuctionInput {
                                listing_id: listing.id,
                            })
                            .await;
                    }
                }
                _ = exit_check_interval.tick() => {}
            }
        }
        tracing::info!("Shutting down auction countdown...");
        Ok(())
    }
}
