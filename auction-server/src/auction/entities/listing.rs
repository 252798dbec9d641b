use {
    super::{
        countdown,
        BidAmount,
    },
    std::sync::Arc,
    time::OffsetDateTime,
    tokio::sync::Mutex,
    uuid::Uuid,
};

pub type ListingId = Uuid;
pub type ListingLock = Arc<Mutex<()>>;

#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub id:             ListingId,
    pub title:          String,
    pub starting_price: BidAmount,
    pub end_time:       OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListingCreate {
    /// Seeded listings keep their configured id, everything else gets a fresh one.
    pub id:             Option<ListingId>,
    pub title:          String,
    pub starting_price: BidAmount,
    pub end_time:       OffsetDateTime,
}

impl Listing {
    pub fn new(listing_create: ListingCreate) -> Self {
        Self {
            id:             listing_create.id.unwrap_or_else(Uuid::new_v4),
            title:          listing_create.title,
            starting_price: listing_create.starting_price,
            end_time:       listing_create.end_time,
        }
    }

    pub fn remaining_seconds(&self, now: OffsetDateTime) -> u64 {
        countdown::tick(now, self.end_time)
    }

    pub fn is_closed(&self, now: OffsetDateTime) -> bool {
        self.remaining_seconds(now) == 0
    }
}
