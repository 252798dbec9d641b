use {
    super::Service,
    crate::auction::entities,
};

impl Service {
    pub async fn get_auctions(&self) -> Vec<entities::Auction> {
        self.repo.get_in_memory_auctions().await
    }
}
