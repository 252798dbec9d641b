use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    /// Auctions ordered by closing time, soonest first.
    pub async fn get_in_memory_auctions(&self) -> Vec<entities::Auction> {
        let mut auctions: Vec<entities::Auction> = self
            .in_memory_store
            .auctions
            .read()
            .await
            .values()
            .cloned()
            .collect();
        auctions.sort_by_key(|auction| (auction.listing.end_time, auction.listing.id));
        auctions
    }
}
