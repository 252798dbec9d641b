use {
    super::entities,
    std::collections::HashMap,
    tokio::sync::{
        Mutex,
        RwLock,
    },
    tokio_util::sync::CancellationToken,
};

mod add_auction;
mod add_bid;
mod add_countdown;
mod get_bids;
mod get_in_memory_auction_by_id;
mod get_in_memory_auctions;
mod get_or_create_in_memory_listing_lock;
mod get_registration;
mod remove_countdown;
mod remove_in_memory_auction;
mod remove_in_memory_listing_lock;
mod update_registration;

pub type RegistrationKey = (entities::ListingId, entities::BidderId);

#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub auctions:      RwLock<HashMap<entities::ListingId, entities::Auction>>,
    pub registrations: RwLock<HashMap<RegistrationKey, entities::Registration>>,
    pub listing_lock:  Mutex<HashMap<entities::ListingId, entities::ListingLock>>,
    pub countdowns:    Mutex<HashMap<entities::ListingId, CancellationToken>>,
}

#[derive(Debug, Default)]
pub struct Repository {
    pub in_memory_store: InMemoryStore,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }
}
