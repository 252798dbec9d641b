use {
    crate::{
        api,
        auction::{
            entities,
            service::{
                self,
                add_listing::AddListingInput,
                approval::DelayedApprovalProvider,
                notification::{
                    run_notification_loop,
                    BroadcastNotificationSink,
                },
                Service,
            },
        },
        config::{
            Config,
            ListingConfig,
            RunOptions,
        },
        kernel::clock::SystemClock,
        state::Store,
    },
    anyhow::anyhow,
    std::{
        sync::{
            atomic::{
                AtomicBool,
                Ordering,
            },
            Arc,
        },
        time::Duration,
    },
    time::OffsetDateTime,
    tokio_util::task::TaskTracker,
};

fn get_listing_create(
    listing: ListingConfig,
    now: OffsetDateTime,
) -> anyhow::Result<entities::ListingCreate> {
    let end_time = now
        .checked_add(time::Duration::try_from(listing.duration)?)
        .ok_or_else(|| anyhow!("Listing duration is too long: {}", listing.title))?;
    Ok(entities::ListingCreate {
        id: listing.id,
        title: listing.title,
        starting_price: listing.starting_price,
        end_time,
    })
}

async fn add_seed_listings(
    service: &Service,
    listings: Vec<ListingConfig>,
) -> anyhow::Result<()> {
    let now = service.now();
    for listing in listings {
        let title = listing.title.clone();
        service
            .add_listing(AddListingInput {
                listing_create: get_listing_create(listing, now)?,
            })
            .await
            .map_err(|err| anyhow!("Failed to add listing({title}): {:?}", err))?;
    }
    Ok(())
}

pub async fn start_server(run_options: RunOptions) -> anyhow::Result<()> {
    tokio::spawn(async move {
        tracing::info!("Registered shutdown signal handler...");
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = ?err, "Failed to listen for the shut down signal");
        }
        tracing::info!("Shut down signal received, waiting for tasks...");
        SHOULD_EXIT.store(true, Ordering::Release);
    });

    let config = Config::load(&run_options.config.config).map_err(|err| {
        anyhow!(
            "Failed to load config from file({path}): {:?}",
            err,
            path = run_options.config.config
        )
    })?;

    let task_tracker = TaskTracker::new();
    let (event_sender, event_receiver) =
        tokio::sync::broadcast::channel(config.auction.notification_channel_size);
    let auction_service = Service::new(
        service::Config {
            countdown_interval:            config.auction.countdown_interval,
            ending_soon_threshold_seconds: config.auction.ending_soon_threshold.as_secs(),
            suggested_bid_increment:       config.auction.suggested_bid_increment,
        },
        Arc::new(SystemClock),
        Arc::new(BroadcastNotificationSink::new(event_sender)),
        Arc::new(DelayedApprovalProvider::new(config.auction.approval_delay)),
        task_tracker.clone(),
    );
    add_seed_listings(&auction_service, config.listings).await?;

    let store = Arc::new(Store { auction_service });
    let (notification_result, api_result) = tokio::join!(
        run_notification_loop(event_receiver),
        api::start_api(run_options, store),
    );

    // Stop the countdowns in case the api failed before the shut down signal
    SHOULD_EXIT.store(true, Ordering::Release);
    task_tracker.close();
    task_tracker.wait().await;
    notification_result?;
    api_result?;
    Ok(())
}

// A static exit flag to indicate to running threads that we're shutting down. This is used to
// gracefully shutdown the application.
//
// NOTE: A more idiomatic approach would be to use a tokio::sync::broadcast channel, and to send a
// shutdown signal to all running tasks. However, this is a bit more complicated to implement and
// we don't rely on global state for anything else.
pub(crate) static SHOULD_EXIT: AtomicBool = AtomicBool::new(false);
pub const EXIT_CHECK_INTERVAL: Duration = Duration::from_secs(1);
